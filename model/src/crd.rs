use crate::error::{self, Result};
use core::fmt::Debug;
use kube::core::ApiResource;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::ResultExt;
use std::collections::BTreeMap;

/// Ties a typed spec tree to the custom resource it mirrors. Implementors are marker types (see
/// [`crate::gateway`]); all of the information lives in the associated items so that a data
/// source can be written once and parameterized by `CrdKind`.
pub trait CrdKind: Send + Sync + 'static {
    /// The API group, e.g. `gateway.solo.io`.
    const GROUP: &'static str;
    /// The API version within the group, e.g. `v1`.
    const VERSION: &'static str;
    /// The `kind` field of the object, e.g. `VirtualService`.
    const KIND: &'static str;
    /// The plural resource name used in API paths, e.g. `virtualservices`.
    const PLURAL: &'static str;

    /// The typed `spec` of the custom resource.
    type Spec: Serialize
        + DeserializeOwned
        + JsonSchema
        + Clone
        + Debug
        + Default
        + PartialEq
        + Send
        + Sync
        + 'static;

    /// The `apiVersion` of the object, `{group}/{version}`.
    fn api_version() -> String {
        format!("{}/{}", Self::GROUP, Self::VERSION)
    }

    /// The `ApiResource` that kube's dynamic API needs in order to address objects of this kind.
    fn api_resource() -> ApiResource {
        ApiResource {
            group: Self::GROUP.to_string(),
            version: Self::VERSION.to_string(),
            api_version: Self::api_version(),
            kind: Self::KIND.to_string(),
            plural: Self::PLURAL.to_string(),
        }
    }

    /// Creates a document of this kind with `apiVersion` and `kind` filled in.
    fn document(metadata: DocumentMetadata, spec: Option<Self::Spec>) -> CrdDocument<Self::Spec> {
        CrdDocument {
            api_version: Some(Self::api_version()),
            kind: Some(Self::KIND.to_string()),
            metadata,
            spec,
        }
    }
}

/// The subset of a Kubernetes object that the provider reads and writes. Unknown fields, such as
/// `status` or the server-populated parts of `metadata`, are dropped when decoding.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdDocument<S> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: DocumentMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

/// The parts of `ObjectMeta` that make up a resource's identity and its user-facing annotations.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl DocumentMetadata {
    pub fn new<S1, S2>(name: S1, namespace: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            name: Some(name.into()),
            namespace: Some(namespace.into()),
            ..Default::default()
        }
    }
}

impl<S> CrdDocument<S>
where
    S: Serialize + DeserializeOwned,
{
    /// Decodes a JSON document as returned by the Kubernetes API.
    pub fn from_value(value: Value) -> Result<Self> {
        let kind = kind_of(&value);
        Ok(serde_json::from_value(value)
            .context(error::DocumentDeserializationSnafu { kind })?)
    }

    /// Encodes the document to JSON. Fields that were absent when decoding stay absent.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self).context(error::DocumentSerializationSnafu {
            kind: self.kind_or_unknown(),
        })?)
    }

    /// Returns this document's YAML representation as a String.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self).context(error::YamlSerializationSnafu {
            kind: self.kind_or_unknown(),
        })?)
    }

    fn kind_or_unknown(&self) -> String {
        self.kind.clone().unwrap_or_else(|| "unknown".to_string())
    }
}

fn kind_of(value: &Value) -> String {
    value
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

/// Declares a marker type implementing [`CrdKind`] for a `gateway.solo.io/v1` custom resource.
macro_rules! gateway_solo_io_v1_kind {
    ($(#[$meta:meta])* $name:ident, $spec:ty, $kind:expr, $plural:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl $crate::CrdKind for $name {
            const GROUP: &'static str = $crate::constants::GATEWAY_SOLO_IO;
            const VERSION: &'static str = $crate::constants::V1;
            const KIND: &'static str = $kind;
            const PLURAL: &'static str = $plural;
            type Spec = $spec;
        }
    };
}

pub(crate) use gateway_solo_io_v1_kind;
