mod analysis_validator;
mod architecture_assembler;
mod diagram_builder;
mod mermaid_writer;
mod metadata_generator;
mod requirement_differ;

pub use analysis_validator::AnalysisValidator;
pub use architecture_assembler::{ArchitectureAssembler, DanglingDependency};
pub use diagram_builder::{hardware_node_id, DiagramBuilder, MAX_DRIVERS_PER_GROUP, MAX_HARDWARE_PER_TYPE};
pub use mermaid_writer::{diagram_id, MermaidWriter};
pub use metadata_generator::MetadataGenerator;
pub use requirement_differ::RequirementDiffer;
