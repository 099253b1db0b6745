use crate::schema::{Attribute, AttributeKind, AttributeMode, ElementType, NestedAttributes};
use crate::validators::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The state of a CRD data source. Unset values are written as `null` so that every attribute in
/// the schema is present in state.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DataSourceModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    pub metadata: MetadataModel,
    /// The spec in state form: snake_case attribute names, nulls for missing fields.
    #[serde(default)]
    pub spec: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MetadataModel {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// The state of a manifest data source.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ManifestModel {
    #[serde(default)]
    pub id: Option<String>,
    pub metadata: MetadataModel,
    #[serde(default)]
    pub spec: Option<Value>,
    /// The rendered Kubernetes manifest.
    #[serde(default)]
    pub yaml: Option<String>,
}

impl MetadataModel {
    /// The synthetic Terraform ID of the object, `name/namespace`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.name, self.namespace)
    }
}

pub(super) fn id_attribute() -> Attribute {
    Attribute::computed_string()
        .with_description("The identifier of the object, in the form 'name/namespace'.")
}

/// The `metadata` block. Name and namespace identify the object; `labels_mode` decides whether
/// labels and annotations are read from the cluster or set in configuration.
pub(super) fn metadata_attribute(labels_mode: AttributeMode) -> Attribute {
    let string_map = || Attribute::new(AttributeKind::Map(ElementType::String), labels_mode);
    Attribute::new(
        AttributeKind::SingleNested(NestedAttributes::from_attributes([
            (
                "name",
                Attribute::required_string()
                    .with_description("Unique name of the object within its namespace.")
                    .with_validator(Validator::DnsSubdomainName),
            ),
            (
                "namespace",
                Attribute::required_string()
                    .with_description("The namespace of the object.")
                    .with_validator(Validator::DnsLabelName),
            ),
            (
                "labels",
                string_map().with_description(
                    "Map of string keys and values used to organize and select objects.",
                ),
            ),
            (
                "annotations",
                string_map()
                    .with_description("Unstructured key value map of arbitrary metadata."),
            ),
        ])),
        AttributeMode::Required,
    )
    .with_description("Standard object metadata.")
}
