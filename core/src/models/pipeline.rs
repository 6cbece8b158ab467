use serde_json::{Map, Value};

use super::{merge_extras, Fields, Model};
use crate::error::Result;

/// Expanded pipeline configuration: runtime settings plus the full
/// definitions of every attached input and output connector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineConfig {
    /// Input endpoint name to endpoint definition.
    pub inputs: Map<String, Value>,
    /// Output endpoint name to endpoint definition.
    pub outputs: Map<String, Value>,
    pub name: Option<String>,
    pub storage_location: Option<String>,
    pub workers: Option<u64>,
    pub cpu_profiler: Option<bool>,
    pub min_batch_size_records: Option<u64>,
    pub max_buffering_delay_usecs: Option<u64>,
    pub additional_properties: Map<String, Value>,
}

impl Model for PipelineConfig {
    const NAME: &'static str = "PipelineConfig";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let inputs = fields.required("inputs")?;
        let outputs = fields.required("outputs")?;
        let name = fields.optional("name")?;
        let storage_location = fields.optional("storage_location")?;
        let workers = fields.optional("workers")?;
        let cpu_profiler = fields.optional("cpu_profiler")?;
        let min_batch_size_records = fields.optional("min_batch_size_records")?;
        let max_buffering_delay_usecs = fields.optional("max_buffering_delay_usecs")?;
        Ok(Self {
            inputs,
            outputs,
            name,
            storage_location,
            workers,
            cpu_profiler,
            min_batch_size_records,
            max_buffering_delay_usecs,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("inputs".to_string(), Value::Object(self.inputs.clone()));
        map.insert("outputs".to_string(), Value::Object(self.outputs.clone()));
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(location) = &self.storage_location {
            map.insert("storage_location".to_string(), Value::String(location.clone()));
        }
        if let Some(workers) = self.workers {
            map.insert("workers".to_string(), Value::from(workers));
        }
        if let Some(profiler) = self.cpu_profiler {
            map.insert("cpu_profiler".to_string(), Value::Bool(profiler));
        }
        if let Some(records) = self.min_batch_size_records {
            map.insert("min_batch_size_records".to_string(), Value::from(records));
        }
        if let Some(delay) = self.max_buffering_delay_usecs {
            map.insert("max_buffering_delay_usecs".to_string(), Value::from(delay));
        }
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
