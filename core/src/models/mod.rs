//! Request and response bodies of the pipeline-manager API.
//!
//! # Design
//! Every DTO is a struct of declared fields plus an ordered
//! `additional_properties` map holding any JSON keys outside the declared
//! schema. Decoding checks that required keys are present; ids are kept as
//! strings and counts as `u64`, so values are never format- or range-checked.
//! The one other failure is a value of a JSON kind the field cannot hold at
//! all (an object where a string is declared), reported as
//! [`ApiError::InvalidField`]. Unknown keys survive a decode/encode round
//! trip in their original order.
//!
//! The [`Model`] trait carries the codec entry points and the map-like
//! accessors for the extras bag. Declared fields are plain struct fields
//! and are never reachable through those accessors.

mod api_key;
mod connector;
mod error_response;
mod pipeline;

pub use api_key::{NewApiKeyRequest, NewApiKeyResponse};
pub use connector::{
    ConnectorConfig, FormatConfig, NewConnectorRequest, NewConnectorResponse, TransportConfig,
};
pub use error_response::ErrorResponse;
pub use pipeline::PipelineConfig;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

pub trait Model: Sized {
    /// Schema name used in decode errors.
    const NAME: &'static str;

    fn from_map(map: Map<String, Value>) -> Result<Self>;

    fn to_map(&self) -> Map<String, Value>;

    fn additional_properties(&self) -> &Map<String, Value>;

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value>;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(ApiError::DeserializationError(format!(
                "{}: expected a JSON object, found {}",
                Self::NAME,
                kind(&other)
            ))),
        }
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| ApiError::DeserializationError(format!("{}: {e}", Self::NAME)))?;
        Self::from_value(value)
    }

    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    /// Keys of the extras bag, in insertion order.
    fn additional_keys(&self) -> Vec<&str> {
        self.additional_properties()
            .keys()
            .map(String::as_str)
            .collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.additional_properties().get(key)
    }

    fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.additional_properties_mut().insert(key.into(), value)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.additional_properties_mut().shift_remove(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.additional_properties().contains_key(key)
    }
}

/// Consumes a decoded JSON object field by field; what is left over becomes
/// the extras bag.
pub(crate) struct Fields {
    model: &'static str,
    map: Map<String, Value>,
}

impl Fields {
    pub(crate) fn new(model: &'static str, map: Map<String, Value>) -> Self {
        Self { model, map }
    }

    pub(crate) fn required<T: DeserializeOwned>(&mut self, field: &'static str) -> Result<T> {
        let value = self
            .map
            .shift_remove(field)
            .ok_or(ApiError::MissingField {
                model: self.model,
                field,
            })?;
        self.convert(field, value)
    }

    /// Absent and `null` both decode to `None`.
    pub(crate) fn optional<T: DeserializeOwned>(&mut self, field: &'static str) -> Result<Option<T>> {
        match self.map.shift_remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.convert(field, value).map(Some),
        }
    }

    /// Free-form optional field: absent is `None`, an explicit `null` is
    /// kept as `Some(Value::Null)` so it encodes back unchanged.
    pub(crate) fn optional_value(&mut self, field: &'static str) -> Option<Value> {
        self.map.shift_remove(field)
    }

    /// A declared field that is itself a [`Model`].
    pub(crate) fn required_model<M: Model>(&mut self, field: &'static str) -> Result<M> {
        let value = self
            .map
            .shift_remove(field)
            .ok_or(ApiError::MissingField {
                model: self.model,
                field,
            })?;
        M::from_value(value)
    }

    pub(crate) fn into_extras(self) -> Map<String, Value> {
        self.map
    }

    fn convert<T: DeserializeOwned>(&self, field: &'static str, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| ApiError::InvalidField {
            model: self.model,
            field,
            message: e.to_string(),
        })
    }
}

/// Append extras after the declared fields; declared fields win on collision.
pub(crate) fn merge_extras(map: &mut Map<String, Value>, extras: &Map<String, Value>) {
    for (key, value) in extras {
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
