use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use warden_core::{AppError, AppResult};

/// Plan or state object exchanged with the host, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceData(Map<String, Value>);

impl ResourceData {
    /// Creates an object with no attributes set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(attributes) => Ok(Self(attributes)),
            other => Err(AppError::Validation(format!(
                "resource data must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Encodes a typed model as resource data.
    pub fn from_model<T: Serialize>(model: &T) -> AppResult<Self> {
        let value = serde_json::to_value(model).map_err(|error| {
            AppError::Internal(format!("failed to encode resource data: {error}"))
        })?;

        Self::from_value(value)
    }

    /// Decodes resource data into a typed model.
    pub fn get<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_value(self.to_value()).map_err(|error| {
            AppError::Validation(format!("failed to decode resource data: {error}"))
        })
    }

    /// Returns one attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Sets one attribute value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Returns the data as a JSON object value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::ResourceData;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: Option<String>,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn rejects_non_object_values() {
        assert!(ResourceData::from_value(json!(["a"])).is_err());
    }

    #[test]
    fn model_roundtrip_through_attributes() {
        let data = ResourceData::from_model(&Sample {
            id: Some("rule_1".to_owned()),
            tags: vec!["x".to_owned()],
        });
        assert!(data.is_ok());

        let data = data.unwrap_or_default();
        assert_eq!(data.attribute("id"), Some(&json!("rule_1")));
        let decoded = data.get::<Sample>();
        assert_eq!(
            decoded.ok(),
            Some(Sample {
                id: Some("rule_1".to_owned()),
                tags: vec!["x".to_owned()],
            })
        );
    }

    #[test]
    fn decode_failure_is_validation_error() {
        let mut data = ResourceData::new();
        data.set_attribute("id", json!(42));

        assert!(data.get::<Sample>().is_err());
    }
}
