use serde_json::{Map, Value};

use super::{merge_extras, Fields, Model};
use crate::error::Result;

/// Error body returned by the manager for documented failure statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable description.
    pub message: String,
    /// Machine-readable code, e.g. `UnknownPipeline`.
    pub error_code: String,
    /// Structured context for the error; shape depends on `error_code`.
    pub details: Value,
    pub additional_properties: Map<String, Value>,
}

impl Model for ErrorResponse {
    const NAME: &'static str = "ErrorResponse";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let message = fields.required("message")?;
        let error_code = fields.required("error_code")?;
        let details = fields.required("details")?;
        Ok(Self {
            message,
            error_code,
            details,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("message".to_string(), Value::String(self.message.clone()));
        map.insert(
            "error_code".to_string(),
            Value::String(self.error_code.clone()),
        );
        map.insert("details".to_string(), self.details.clone());
        merge_extras(&mut map, &self.additional_properties);
        map
    }

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_details_are_kept() {
        let value = json!({"message": "m", "error_code": "E", "details": null});
        let err = ErrorResponse::from_value(value.clone()).unwrap();
        assert_eq!(err.details, Value::Null);
        assert_eq!(err.to_value(), value);
    }
}
