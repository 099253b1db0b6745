//! Moves values between Kubernetes documents and Terraform state, guided by the schema.

use super::{AttributeKind, NestedAttributes};
use serde_json::{Map, Value};

impl NestedAttributes {
    /// Converts a document object to a state object. Every declared attribute is emitted, with
    /// `null` for fields the document does not have. Undeclared document fields are dropped.
    pub fn document_to_state(&self, document: &Value) -> Value {
        let mut state = Map::new();
        for (name, nested) in &self.0 {
            let value = document.get(nested.document_key.as_str());
            state.insert(name.clone(), nested.attribute.kind.document_to_state(value));
        }
        Value::Object(state)
    }

    /// Converts a state or configuration object to a document object. Null attributes are left
    /// out and attribute names are replaced by their document keys.
    pub fn state_to_document(&self, state: &Value) -> Value {
        let mut document = Map::new();
        for (name, nested) in &self.0 {
            if let Some(value) = nested.attribute.kind.state_to_document(state.get(name.as_str())) {
                document.insert(nested.document_key.clone(), value);
            }
        }
        Value::Object(document)
    }
}

impl AttributeKind {
    fn document_to_state(&self, value: Option<&Value>) -> Value {
        let value = match value {
            None | Some(Value::Null) => return Value::Null,
            Some(value) => value,
        };
        match (self, value) {
            (AttributeKind::SingleNested(nested), Value::Object(_)) => {
                nested.document_to_state(value)
            }
            (AttributeKind::ListNested(nested), Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .map(|item| nested.document_to_state(item))
                    .collect(),
            ),
            // map keys are data, not attribute names
            (AttributeKind::MapNested(nested), Value::Object(entries)) => Value::Object(
                entries
                    .iter()
                    .map(|(key, item)| (key.clone(), nested.document_to_state(item)))
                    .collect(),
            ),
            _ => value.clone(),
        }
    }

    fn state_to_document(&self, value: Option<&Value>) -> Option<Value> {
        let value = match value {
            None | Some(Value::Null) => return None,
            Some(value) => value,
        };
        let document = match (self, value) {
            (AttributeKind::SingleNested(nested), Value::Object(_)) => {
                nested.state_to_document(value)
            }
            (AttributeKind::ListNested(nested), Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .map(|item| nested.state_to_document(item))
                    .collect(),
            ),
            (AttributeKind::MapNested(nested), Value::Object(entries)) => Value::Object(
                entries
                    .iter()
                    .map(|(key, item)| (key.clone(), nested.state_to_document(item)))
                    .collect(),
            ),
            _ => value.clone(),
        };
        Some(document)
    }
}
