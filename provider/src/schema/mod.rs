/*!

The Terraform schema of the provider and its data sources. A [`Schema`] is a tree of
[`Attribute`]s; nested objects remember the document key each attribute was derived from so that
values can be moved between Kubernetes documents (camelCase keys) and Terraform state (snake_case
attribute names). [`nested_attributes_for`] builds nested attributes from a typed tree.

!*/

mod derive;
mod transcribe;

pub use derive::{nested_attributes_for, to_snake_case};

use crate::validators::Validator;
use crate::{AttributePath, Diagnostics};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute<S: Into<String>>(mut self, name: S, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Checks `config` against the schema: required attributes must be present, computed-only
    /// attributes must be absent and string values must pass their validators.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::default();
        for (name, attribute) in &self.attributes {
            attribute.validate(
                config.get(name),
                &AttributePath::root(name.as_str()),
                &mut diagnostics,
            );
        }
        diagnostics
    }
}

/// How an attribute relates to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    pub mode: AttributeMode,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Int64,
    Float64,
    Bool,
    /// Any JSON value; used where the document is free-form.
    Dynamic,
    List(ElementType),
    Map(ElementType),
    SingleNested(NestedAttributes),
    ListNested(NestedAttributes),
    MapNested(NestedAttributes),
}

/// The element type of a list or map attribute of primitive values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    String,
    Int64,
    Float64,
    Bool,
    Dynamic,
    List(Box<ElementType>),
    Map(Box<ElementType>),
}

/// The attributes of a nested object, keyed by Terraform attribute name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NestedAttributes(pub BTreeMap<String, NestedAttribute>);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NestedAttribute {
    /// The key of this attribute in the Kubernetes document.
    pub document_key: String,
    #[serde(flatten)]
    pub attribute: Attribute,
}

impl NestedAttributes {
    /// Builds nested attributes whose document keys are their attribute names.
    pub fn from_attributes<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (S, Attribute)>,
        S: Into<String>,
    {
        Self(
            attributes
                .into_iter()
                .map(|(name, attribute)| {
                    let name = name.into();
                    (
                        name.clone(),
                        NestedAttribute {
                            document_key: name,
                            attribute,
                        },
                    )
                })
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.get(name).map(|nested| &nested.attribute)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Attribute {
    pub fn new(kind: AttributeKind, mode: AttributeMode) -> Self {
        Self {
            kind,
            mode,
            description: String::new(),
            validators: Vec::new(),
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeKind::String, AttributeMode::Required)
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeKind::String, AttributeMode::Optional)
    }

    pub fn computed_string() -> Self {
        Self::new(AttributeKind::String, AttributeMode::Computed)
    }

    pub fn optional_bool() -> Self {
        Self::new(AttributeKind::Bool, AttributeMode::Optional)
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn is_computed_only(&self) -> bool {
        self.mode == AttributeMode::Computed
    }

    fn validate(&self, value: Option<&Value>, path: &AttributePath, diagnostics: &mut Diagnostics) {
        let value = match value {
            None | Some(Value::Null) => {
                if self.mode == AttributeMode::Required {
                    diagnostics.add_attribute_error(
                        path.clone(),
                        "Missing required argument",
                        format!(
                            "The argument \"{}\" is required, but no definition was found.",
                            path
                        ),
                    );
                }
                return;
            }
            Some(value) => value,
        };

        if self.is_computed_only() {
            diagnostics.add_attribute_error(
                path.clone(),
                "Invalid configuration",
                format!(
                    "\"{}\" is a computed attribute and cannot be set in configuration.",
                    path
                ),
            );
            return;
        }

        match (&self.kind, value) {
            (AttributeKind::String, Value::String(s)) => {
                for validator in &self.validators {
                    if let Err(detail) = validator.validate(s) {
                        diagnostics.add_attribute_error(
                            path.clone(),
                            "Invalid Attribute Value",
                            detail,
                        );
                    }
                }
            }
            (AttributeKind::SingleNested(nested), Value::Object(_)) => {
                nested.validate_object(value, path, diagnostics)
            }
            (AttributeKind::ListNested(nested), Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    nested.validate_object(item, &path.attribute(index.to_string()), diagnostics)
                }
            }
            (AttributeKind::MapNested(nested), Value::Object(entries)) => {
                for (key, item) in entries {
                    nested.validate_object(item, &path.attribute(key.as_str()), diagnostics)
                }
            }
            _ => {}
        }
    }
}

impl NestedAttributes {
    fn validate_object(&self, value: &Value, path: &AttributePath, diagnostics: &mut Diagnostics) {
        for (name, nested) in &self.0 {
            nested.attribute.validate(
                value.get(name),
                &path.attribute(name.as_str()),
                diagnostics,
            );
        }
    }
}
