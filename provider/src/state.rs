use crate::Diagnostics;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// The configuration of a data source or the provider, as Terraform sends it: an object keyed by
/// attribute name with `null` for unset attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    raw: Value,
}

impl Config {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Decodes the configuration into `T`. Decoding errors are added to `diagnostics` and `None`
    /// is returned.
    pub fn get<T>(&self, diagnostics: &mut Diagnostics) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match serde_json::from_value(self.raw.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                diagnostics.add_error(
                    "Unable to decode configuration",
                    format!("The configuration does not match the schema: {}", e),
                );
                None
            }
        }
    }
}

/// The state written by a read. It stays null until `set` succeeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    raw: Option<Value>,
}

impl State {
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    pub fn into_raw(self) -> Option<Value> {
        self.raw
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// Encodes `value` as the new state. On failure the previous state is kept and the returned
    /// diagnostics carry the error.
    pub fn set<T>(&mut self, value: &T) -> Diagnostics
    where
        T: Serialize,
    {
        let mut diagnostics = Diagnostics::default();
        match serde_json::to_value(value) {
            Ok(raw) => self.raw = Some(raw),
            Err(e) => diagnostics.add_error(
                "Unable to write state",
                format!("The state could not be encoded: {}", e),
            ),
        }
        diagnostics
    }
}
