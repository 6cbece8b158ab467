use serde_json::{Map, Value};

use super::{merge_extras, Fields, Model};
use crate::error::Result;

/// Request to issue a new API key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewApiKeyRequest {
    /// Key name, unique per tenant. Example: `my-api-key`.
    pub name: String,
    pub additional_properties: Map<String, Value>,
}

impl NewApiKeyRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            additional_properties: Map::new(),
        }
    }
}

impl Model for NewApiKeyRequest {
    const NAME: &'static str = "NewApiKeyRequest";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let name = fields.required("name")?;
        Ok(Self {
            name,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
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

/// Response to a successful API key creation.
///
/// The manager never returns `api_key` again, so callers must store it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApiKeyResponse {
    /// Generated key, e.g. `apikey:v5y5QNtlPNVMwkmNjKwFU8bbIu5lMge3...`.
    pub api_key: String,
    pub api_key_id: String,
    pub name: String,
    pub additional_properties: Map<String, Value>,
}

impl Model for NewApiKeyResponse {
    const NAME: &'static str = "NewApiKeyResponse";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let api_key = fields.required("api_key")?;
        let api_key_id = fields.required("api_key_id")?;
        let name = fields.required("name")?;
        Ok(Self {
            api_key,
            api_key_id,
            name,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("api_key".to_string(), Value::String(self.api_key.clone()));
        map.insert(
            "api_key_id".to_string(),
            Value::String(self.api_key_id.clone()),
        );
        map.insert("name".to_string(), Value::String(self.name.clone()));
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
