use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a discovered hardware part.
///
/// Values outside the known set parse to `Unknown` so a single odd entry in
/// an analysis payload does not reject the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareType {
    Processor,
    Memory,
    Communication,
    Sensor,
    Actuator,
    Power,
    Storage,
    Interface,
    Display,
    Unknown,
}

impl HardwareType {
    pub const ALL: [HardwareType; 9] = [
        HardwareType::Processor,
        HardwareType::Memory,
        HardwareType::Communication,
        HardwareType::Sensor,
        HardwareType::Actuator,
        HardwareType::Power,
        HardwareType::Storage,
        HardwareType::Interface,
        HardwareType::Display,
    ];

    /// Exact, lowercase match against the wire names.
    pub fn parse(name: &str) -> HardwareType {
        HardwareType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or(HardwareType::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareType::Processor => "processor",
            HardwareType::Memory => "memory",
            HardwareType::Communication => "communication",
            HardwareType::Sensor => "sensor",
            HardwareType::Actuator => "actuator",
            HardwareType::Power => "power",
            HardwareType::Storage => "storage",
            HardwareType::Interface => "interface",
            HardwareType::Display => "display",
            HardwareType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical part found on the block diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HardwareRecord", into = "HardwareRecord")]
pub struct HardwareComponent {
    pub id: String,
    pub name: String,
    pub kind: HardwareType,
    /// The payload's `type` when it named no known category.
    pub unrecognized_type: Option<String>,
    pub connections: Vec<String>,
    /// Free-form key/value bag from the analysis; never interpreted here.
    pub specifications: serde_json::Map<String, serde_json::Value>,
}

/// Wire form of [`HardwareComponent`], with `type` kept as written.
#[derive(Serialize, Deserialize)]
struct HardwareRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    connections: Vec<String>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    specifications: serde_json::Map<String, serde_json::Value>,
}

impl From<HardwareRecord> for HardwareComponent {
    fn from(record: HardwareRecord) -> Self {
        let kind = HardwareType::parse(&record.kind);
        Self {
            id: record.id,
            name: record.name,
            kind,
            unrecognized_type: (kind == HardwareType::Unknown).then_some(record.kind),
            connections: record.connections,
            specifications: record.specifications,
        }
    }
}

impl From<HardwareComponent> for HardwareRecord {
    fn from(hw: HardwareComponent) -> Self {
        let kind = match hw.unrecognized_type {
            Some(raw) if hw.kind == HardwareType::Unknown => raw,
            _ => hw.kind.as_str().to_string(),
        };
        Self {
            id: hw.id,
            name: hw.name,
            kind,
            connections: hw.connections,
            specifications: hw.specifications,
        }
    }
}

impl HardwareComponent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: HardwareType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            unrecognized_type: None,
            connections: Vec::new(),
            specifications: serde_json::Map::new(),
        }
    }

    /// Type as reported by the analysis, e.g. `gpu` for an unknown part.
    pub fn type_name(&self) -> &str {
        match (&self.unrecognized_type, self.kind) {
            (Some(raw), HardwareType::Unknown) => raw.as_str(),
            _ => self.kind.as_str(),
        }
    }

    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }
}
