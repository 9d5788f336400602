pub mod analysis;
pub mod api_stub;
pub mod diagram;
pub mod diff_result;
pub mod hardware;
pub mod requirement;
pub mod software_module;

pub use analysis::{
    AnalysisResult, ArchitectureMetadata, SoftwareArchitecture, SuggestedArchitecture,
};
pub use api_stub::{GeneratedApi, ProgrammingLanguage};
pub use diagram::{Diagram, DiagramNode, Edge, EdgeStyle, NodeClass, NodeShape, Section};
pub use diff_result::DiffResult;
pub use hardware::{HardwareComponent, HardwareType};
pub use requirement::{apply_edits, Priority, Requirement, RequirementCategory, RequirementEdit};
pub use software_module::{Layer, SoftwareModule};
