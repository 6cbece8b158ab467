use serde_json::{Map, Value};

use super::{merge_extras, Fields, Model};
use crate::error::Result;

/// Transport half of a connector: which adapter moves the bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    /// Adapter name, e.g. `kafka` or `file`.
    pub name: String,
    /// Adapter-specific settings, passed through untouched. An explicit
    /// `null` is kept as `Some(Value::Null)`.
    pub config: Option<Value>,
    pub additional_properties: Map<String, Value>,
}

impl TransportConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: None,
            additional_properties: Map::new(),
        }
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

impl Model for TransportConfig {
    const NAME: &'static str = "TransportConfig";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let name = fields.required("name")?;
        let config = fields.optional_value("config");
        Ok(Self {
            name,
            config,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        named_config_map(&self.name, &self.config, &self.additional_properties)
    }

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

/// Format half of a connector: how records are encoded on the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Format name, e.g. `csv` or `json`.
    pub name: String,
    pub config: Option<Value>,
    pub additional_properties: Map<String, Value>,
}

impl FormatConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: None,
            additional_properties: Map::new(),
        }
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

impl Model for FormatConfig {
    const NAME: &'static str = "FormatConfig";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let name = fields.required("name")?;
        let config = fields.optional_value("config");
        Ok(Self {
            name,
            config,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        named_config_map(&self.name, &self.config, &self.additional_properties)
    }

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

fn named_config_map(
    name: &str,
    config: &Option<Value>,
    extras: &Map<String, Value>,
) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("name".to_string(), Value::String(name.to_string()));
    if let Some(config) = config {
        map.insert("config".to_string(), config.clone());
    }
    merge_extras(&mut map, extras);
    map
}

/// A transport plus a format.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    pub transport: TransportConfig,
    pub format: FormatConfig,
    /// Backpressure threshold for input connectors.
    pub max_buffered_records: Option<u64>,
    pub additional_properties: Map<String, Value>,
}

impl ConnectorConfig {
    pub fn new(transport: TransportConfig, format: FormatConfig) -> Self {
        Self {
            transport,
            format,
            max_buffered_records: None,
            additional_properties: Map::new(),
        }
    }
}

impl Model for ConnectorConfig {
    const NAME: &'static str = "ConnectorConfig";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let transport = fields.required_model("transport")?;
        let format = fields.required_model("format")?;
        let max_buffered_records = fields.optional("max_buffered_records")?;
        Ok(Self {
            transport,
            format,
            max_buffered_records,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("transport".to_string(), self.transport.to_value());
        map.insert("format".to_string(), self.format.to_value());
        if let Some(max) = self.max_buffered_records {
            map.insert("max_buffered_records".to_string(), Value::from(max));
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

/// Request to create a new connector.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConnectorRequest {
    pub name: String,
    pub description: String,
    pub config: ConnectorConfig,
    pub additional_properties: Map<String, Value>,
}

impl NewConnectorRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            config,
            additional_properties: Map::new(),
        }
    }
}

impl Model for NewConnectorRequest {
    const NAME: &'static str = "NewConnectorRequest";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let name = fields.required("name")?;
        let description = fields.required("description")?;
        let config = fields.required_model("config")?;
        Ok(Self {
            name,
            description,
            config,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        map.insert("config".to_string(), self.config.to_value());
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

/// Response to a connector creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConnectorResponse {
    pub connector_id: String,
    pub additional_properties: Map<String, Value>,
}

impl Model for NewConnectorResponse {
    const NAME: &'static str = "NewConnectorResponse";

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut fields = Fields::new(Self::NAME, map);
        let connector_id = fields.required("connector_id")?;
        Ok(Self {
            connector_id,
            additional_properties: fields.into_extras(),
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "connector_id".to_string(),
            Value::String(self.connector_id.clone()),
        );
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
