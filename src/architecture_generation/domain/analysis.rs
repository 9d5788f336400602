use super::{HardwareComponent, Requirement, SoftwareModule};
use serde::{Deserialize, Serialize};

/// Free-form architecture hints returned alongside the hardware inventory.
/// Informational only; the assembler does not read them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedArchitecture {
    #[serde(default)]
    pub layers: Vec<String>,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// What the analysis collaborator extracts from a diagram plus requirements text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub hardware_components: Vec<HardwareComponent>,
    #[serde(default)]
    pub suggested_architecture: SuggestedArchitecture,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// Assembled module graph plus its Mermaid rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareArchitecture {
    pub modules: Vec<SoftwareModule>,
    #[serde(rename = "mermaidDiagram")]
    pub diagram: String,
}

impl SoftwareArchitecture {
    pub fn module(&self, id: &str) -> Option<&SoftwareModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn module_ids(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.id.as_str()).collect()
    }

    /// Modules that `id` depends on or that depend on `id`, in module order.
    pub fn connected_modules(&self, id: &str) -> Vec<&SoftwareModule> {
        let Some(target) = self.module(id) else {
            return Vec::new();
        };
        self.modules
            .iter()
            .filter(|m| m.id != id)
            .filter(|m| target.dependencies.contains(&m.id) || m.dependencies.iter().any(|d| d == id))
            .collect()
    }
}

/// Stamp attached to every generated architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
}

impl ArchitectureMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, run_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}
