//! Derives Terraform attributes from the JSON schema of a typed tree.
//!
//! The schema is generated with OpenAPI 3 settings and inlined subschemas, which is how kube
//! generates CRD schemas. References, single-element `allOf` wrappers and `nullable` markers are
//! still resolved in case a type opts out of inlining.

use super::{Attribute, AttributeKind, AttributeMode, ElementType, NestedAttribute, NestedAttributes};
use schemars::gen::SchemaSettings;
use schemars::schema::{InstanceType, Schema, SchemaObject, SingleOrVec};
use schemars::{JsonSchema, Map};
use std::collections::BTreeMap;

/// Trees deeper than this are exposed as dynamic values. It also stops recursive types.
const MAX_DEPTH: usize = 32;

/// Builds the nested attributes of `T`, giving every attribute the same `mode`. Property names
/// become snake_case attribute names; the property names are kept as document keys.
pub fn nested_attributes_for<T>(mode: AttributeMode) -> NestedAttributes
where
    T: JsonSchema,
{
    let root = SchemaSettings::openapi3()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>();
    let deriver = Deriver {
        definitions: &root.definitions,
        mode,
    };
    match deriver.resolve_object(&root.schema, 0) {
        Some(object) => deriver.nested(object, 0),
        None => NestedAttributes::default(),
    }
}

/// Converts a camelCase (or PascalCase) name to snake_case, e.g. `bindPort` to `bind_port`.
pub fn to_snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

struct Deriver<'a> {
    definitions: &'a Map<String, Schema>,
    mode: AttributeMode,
}

impl<'a> Deriver<'a> {
    fn nested(&self, object: &'a SchemaObject, depth: usize) -> NestedAttributes {
        let mut attributes = BTreeMap::new();
        if let Some(validation) = &object.object {
            for (key, property) in &validation.properties {
                let attribute = Attribute {
                    kind: self.attribute_kind(property, depth + 1),
                    mode: self.mode,
                    description: description(property).unwrap_or_default(),
                    validators: Vec::new(),
                };
                attributes.insert(
                    to_snake_case(key),
                    NestedAttribute {
                        document_key: key.clone(),
                        attribute,
                    },
                );
            }
        }
        NestedAttributes(attributes)
    }

    fn attribute_kind(&self, schema: &'a Schema, depth: usize) -> AttributeKind {
        let object = match self.resolve(schema, depth) {
            None => return AttributeKind::Dynamic,
            Some(object) => object,
        };
        match instance_type(object) {
            Some(InstanceType::String) => AttributeKind::String,
            Some(InstanceType::Integer) => AttributeKind::Int64,
            Some(InstanceType::Number) => AttributeKind::Float64,
            Some(InstanceType::Boolean) => AttributeKind::Bool,
            Some(InstanceType::Array) => match items(object) {
                None => AttributeKind::List(ElementType::Dynamic),
                Some(items) => match self.object_with_properties(items, depth + 1) {
                    Some(item) => AttributeKind::ListNested(self.nested(item, depth + 1)),
                    None => AttributeKind::List(self.element_type(items, depth + 1)),
                },
            },
            Some(InstanceType::Object) if has_properties(object) => {
                AttributeKind::SingleNested(self.nested(object, depth))
            }
            Some(InstanceType::Object) => match additional_properties(object) {
                None => AttributeKind::Dynamic,
                Some(values) => match self.object_with_properties(values, depth + 1) {
                    Some(value) => AttributeKind::MapNested(self.nested(value, depth + 1)),
                    None => AttributeKind::Map(self.element_type(values, depth + 1)),
                },
            },
            _ => AttributeKind::Dynamic,
        }
    }

    fn element_type(&self, schema: &'a Schema, depth: usize) -> ElementType {
        let object = match self.resolve(schema, depth) {
            None => return ElementType::Dynamic,
            Some(object) => object,
        };
        match instance_type(object) {
            Some(InstanceType::String) => ElementType::String,
            Some(InstanceType::Integer) => ElementType::Int64,
            Some(InstanceType::Number) => ElementType::Float64,
            Some(InstanceType::Boolean) => ElementType::Bool,
            Some(InstanceType::Array) => ElementType::List(Box::new(
                items(object)
                    .map(|items| self.element_type(items, depth + 1))
                    .unwrap_or(ElementType::Dynamic),
            )),
            Some(InstanceType::Object) if !has_properties(object) => {
                match additional_properties(object) {
                    Some(values) => ElementType::Map(Box::new(self.element_type(values, depth + 1))),
                    None => ElementType::Dynamic,
                }
            }
            _ => ElementType::Dynamic,
        }
    }

    fn object_with_properties(&self, schema: &'a Schema, depth: usize) -> Option<&'a SchemaObject> {
        self.resolve(schema, depth).filter(|object| {
            instance_type(object) == Some(InstanceType::Object) && has_properties(object)
        })
    }

    /// Follows references and single `allOf` wrappers. `None` means the schema accepts any value.
    fn resolve(&self, schema: &'a Schema, depth: usize) -> Option<&'a SchemaObject> {
        match schema {
            Schema::Bool(_) => None,
            Schema::Object(object) => self.resolve_object(object, depth),
        }
    }

    fn resolve_object(&self, object: &'a SchemaObject, depth: usize) -> Option<&'a SchemaObject> {
        if depth > MAX_DEPTH {
            return None;
        }
        if let Some(reference) = &object.reference {
            let name = reference.rsplit('/').next().unwrap_or(reference.as_str());
            return self
                .definitions
                .get(name)
                .and_then(|schema| self.resolve(schema, depth + 1));
        }
        if object.instance_type.is_none() {
            if let Some(all_of) = object
                .subschemas
                .as_ref()
                .and_then(|subschemas| subschemas.all_of.as_ref())
            {
                if let [single] = all_of.as_slice() {
                    return self.resolve(single, depth + 1);
                }
            }
            return None;
        }
        Some(object)
    }
}

/// The instance type of a schema, ignoring `null` in type lists.
fn instance_type(object: &SchemaObject) -> Option<InstanceType> {
    match object.instance_type.as_ref()? {
        SingleOrVec::Single(instance_type) => Some(**instance_type),
        SingleOrVec::Vec(instance_types) => instance_types
            .iter()
            .copied()
            .find(|instance_type| *instance_type != InstanceType::Null),
    }
}

fn has_properties(object: &SchemaObject) -> bool {
    object
        .object
        .as_ref()
        .map(|validation| !validation.properties.is_empty())
        .unwrap_or(false)
}

fn items(object: &SchemaObject) -> Option<&Schema> {
    match object.array.as_ref()?.items.as_ref()? {
        SingleOrVec::Single(items) => Some(&**items),
        SingleOrVec::Vec(_) => None,
    }
}

fn additional_properties(object: &SchemaObject) -> Option<&Schema> {
    object.object.as_ref()?.additional_properties.as_deref()
}

fn description(schema: &Schema) -> Option<String> {
    match schema {
        Schema::Bool(_) => None,
        Schema::Object(object) => object.metadata.as_ref()?.description.clone(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use model::gateway::{GatewaySpec, RouteTableSpec, VirtualServiceSpec};
    use serde_json::Value;

    #[allow(dead_code)]
    #[derive(JsonSchema)]
    #[serde(rename_all = "camelCase")]
    struct Reference {
        name: Option<String>,
        namespace: Option<String>,
    }

    #[allow(dead_code)]
    #[derive(JsonSchema)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        /// The port to listen on.
        bind_port: Option<i64>,
        ratio: Option<f64>,
        enabled: Option<bool>,
        proxy_names: Option<Vec<String>>,
        selector: Option<BTreeMap<String, String>>,
        matrix: Option<Vec<Vec<i64>>>,
        refs: Option<Vec<Reference>>,
        by_name: Option<BTreeMap<String, Reference>>,
        free_form: Option<Value>,
        #[serde(rename = "ref")]
        reference: Option<Reference>,
    }

    fn kind<'a>(attributes: &'a NestedAttributes, name: &str) -> &'a AttributeKind {
        &attributes.get(name).unwrap().kind
    }

    #[test]
    fn snake_case() {
        assert_eq!(to_snake_case("bindPort"), "bind_port");
        assert_eq!(to_snake_case("VirtualService"), "virtual_service");
        assert_eq!(to_snake_case("proxy100Continue"), "proxy100_continue");
        assert_eq!(to_snake_case("ref"), "ref");
    }

    #[test]
    fn primitive_and_collection_attributes() {
        let attributes = nested_attributes_for::<Sample>(AttributeMode::Computed);
        assert_eq!(attributes.len(), 10);
        assert_eq!(kind(&attributes, "bind_port"), &AttributeKind::Int64);
        assert_eq!(kind(&attributes, "ratio"), &AttributeKind::Float64);
        assert_eq!(kind(&attributes, "enabled"), &AttributeKind::Bool);
        assert_eq!(
            kind(&attributes, "proxy_names"),
            &AttributeKind::List(ElementType::String)
        );
        assert_eq!(
            kind(&attributes, "selector"),
            &AttributeKind::Map(ElementType::String)
        );
        assert_eq!(
            kind(&attributes, "matrix"),
            &AttributeKind::List(ElementType::List(Box::new(ElementType::Int64)))
        );
        assert_eq!(kind(&attributes, "free_form"), &AttributeKind::Dynamic);
        assert_eq!(
            attributes.get("bind_port").unwrap().description,
            "The port to listen on."
        );
        assert_eq!(
            attributes.get("ratio").unwrap().mode,
            AttributeMode::Computed
        );
    }

    #[test]
    fn nested_attributes_keep_document_keys() {
        let attributes = nested_attributes_for::<Sample>(AttributeMode::Optional);
        let reference = NestedAttributes::from_attributes([
            ("name", Attribute::new(AttributeKind::String, AttributeMode::Optional)),
            (
                "namespace",
                Attribute::new(AttributeKind::String, AttributeMode::Optional),
            ),
        ]);
        assert_eq!(
            kind(&attributes, "refs"),
            &AttributeKind::ListNested(reference.clone())
        );
        assert_eq!(
            kind(&attributes, "by_name"),
            &AttributeKind::MapNested(reference.clone())
        );
        assert_eq!(
            kind(&attributes, "ref"),
            &AttributeKind::SingleNested(reference)
        );
        assert_eq!(attributes.0.get("proxy_names").unwrap().document_key, "proxyNames");
    }

    #[test]
    fn gateway_spec_attributes() {
        let attributes = nested_attributes_for::<GatewaySpec>(AttributeMode::Computed);
        assert_eq!(kind(&attributes, "bind_port"), &AttributeKind::Int64);
        let http_gateway = match kind(&attributes, "http_gateway") {
            AttributeKind::SingleNested(nested) => nested,
            other => panic!("unexpected kind {:?}", other),
        };
        assert_eq!(
            kind(http_gateway, "virtual_service_selector"),
            &AttributeKind::Map(ElementType::String)
        );
        assert!(matches!(
            kind(http_gateway, "virtual_services"),
            AttributeKind::ListNested(_)
        ));
    }

    #[test]
    fn virtual_service_routes_are_nested_lists() {
        let attributes = nested_attributes_for::<VirtualServiceSpec>(AttributeMode::Computed);
        let virtual_host = match kind(&attributes, "virtual_host") {
            AttributeKind::SingleNested(nested) => nested,
            other => panic!("unexpected kind {:?}", other),
        };
        let routes = match kind(virtual_host, "routes") {
            AttributeKind::ListNested(nested) => nested,
            other => panic!("unexpected kind {:?}", other),
        };
        let options = match kind(routes, "options") {
            AttributeKind::SingleNested(nested) => nested,
            other => panic!("unexpected kind {:?}", other),
        };
        assert_eq!(
            kind(options, "envoy_metadata"),
            &AttributeKind::Map(ElementType::Dynamic)
        );
        assert!(matches!(
            kind(routes, "delegate_action"),
            AttributeKind::SingleNested(_)
        ));
    }

    #[test]
    fn descriptions_come_from_doc_comments() {
        let attributes = nested_attributes_for::<RouteTableSpec>(AttributeMode::Computed);
        assert!(attributes
            .get("weight")
            .unwrap()
            .description
            .starts_with("Orders route tables"));
        assert_eq!(attributes.get("routes").unwrap().description, "");
    }
}
