use serde::{Deserialize, Serialize};
use std::fmt;

/// Architectural tier of a software module.
///
/// Variant order is the stacking order used when emitting diagrams, top
/// (application) to bottom (kernel). It says nothing about which layer may
/// depend on which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Application,
    Service,
    Middleware,
    Driver,
    Hal,
    Kernel,
}

impl Layer {
    /// All layers in emission order.
    pub const ORDERED: [Layer; 6] = [
        Layer::Application,
        Layer::Service,
        Layer::Middleware,
        Layer::Driver,
        Layer::Hal,
        Layer::Kernel,
    ];

    /// Section heading used in the rendered diagram.
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Application => "Application Layer",
            Layer::Service => "Service Layer",
            Layer::Middleware => "Middleware Layer",
            Layer::Driver => "Driver Layer",
            Layer::Hal => "HAL Layer",
            Layer::Kernel => "OS/Kernel",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Application => "application",
            Layer::Service => "service",
            Layer::Middleware => "middleware",
            Layer::Driver => "driver",
            Layer::Hal => "hal",
            Layer::Kernel => "kernel",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the generated software architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareModule {
    pub id: String,
    pub name: String,
    pub layer: Layer,
    /// Ids of modules this one depends on. Not required to resolve.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Id of the hardware component a driver module wraps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_mapping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
}

impl SoftwareModule {
    pub fn new(id: impl Into<String>, name: impl Into<String>, layer: Layer) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer,
            dependencies: Vec::new(),
            interfaces: Vec::new(),
            hardware_mapping: None,
            description: None,
            responsibilities: Vec::new(),
        }
    }

    pub fn is_driver(&self) -> bool {
        self.layer == Layer::Driver
    }
}
