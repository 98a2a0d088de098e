use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Parsed contents of `config.yaml`.
///
/// No schema is imposed. Whatever well-formed YAML the file holds (mapping,
/// sequence, scalar) is kept as-is, and an empty file is the null document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument(Value);

impl ConfigDocument {
    /// Parse YAML into a document.
    ///
    /// Input is raw bytes, so text that is not valid UTF-8 (or a BOM-marked
    /// UTF-16 stream) is a parse error. Exactly one YAML document is accepted.
    /// Input with no document at all (empty, whitespace, or comments only)
    /// yields the null document; several `---` separated documents are
    /// rejected.
    pub fn parse(input: impl AsRef<[u8]>) -> Result<Self, serde_yaml::Error> {
        let mut documents = serde_yaml::Deserializer::from_slice(input.as_ref());
        let Some(first) = documents.next() else {
            return Ok(Self(Value::Null));
        };
        let value = Value::deserialize(first)?;
        if documents.next().is_some() {
            return Err(serde_yaml::Error::custom(
                "expected a single YAML document, found more than one",
            ));
        }
        Ok(Self(value))
    }

    pub const fn value(&self) -> &Value {
        &self.0
    }

    pub const fn is_null(&self) -> bool {
        matches!(self.0, Value::Null)
    }

    /// Look up a top-level key. `None` when the key is absent or the document
    /// is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_mapping()?.get(key)
    }

    /// Top-level keys that are strings, in file order.
    pub fn keys(&self) -> Vec<&str> {
        self.0
            .as_mapping()
            .map(|m| m.keys().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Deserialize the document into a caller-chosen type.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        serde_yaml::from_value(self.0.clone())
    }

    /// Render back to YAML. Comments and original formatting are not kept.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.0)
    }
}

impl From<Value> for ConfigDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
