//! hw2sw - hardware block diagrams to layered software architectures
//!
//! This library turns a hardware inventory (usually extracted from a block
//! diagram by an LLM) into a fixed, layered software architecture with a
//! Mermaid rendering, and compares revisions of the generated requirements.
//! It follows a hexagonal layout.
//!
//! # Architecture
//!
//! - **Domain Layer** (`architecture_generation`): data model, driver mapping
//!   policy, assembler, diagram builder, requirement differ
//! - **Application Layer** (`application`): use cases, DTOs, prompts, factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, console, formatters, LLM client
//! - **Shared** (`shared`): error types and the crate-wide `Result`
//!
//! # Example
//!
//! ```
//! use hw2sw::prelude::*;
//!
//! let hardware = vec![
//!     HardwareComponent::new("hw1", "Accelerometer", HardwareType::Sensor),
//!     HardwareComponent::new("mcu", "STM32", HardwareType::Processor),
//! ];
//! let architecture = ArchitectureAssembler::assemble(&hardware);
//!
//! let driver = architecture.module("drv_hw1").unwrap();
//! assert_eq!(driver.dependencies, vec!["hal_io".to_string()]);
//! assert!(architecture.module("drv_mcu").is_none());
//! assert!(architecture.diagram.starts_with("graph LR"));
//!
//! let old: Vec<Requirement> = Vec::new();
//! let new = vec![Requirement::new("R1", RequirementCategory::Functional, "boot fast", Priority::High)
//!     .with_related_modules(["app_main"])];
//! let diff = RequirementDiffer::diff(&old, &new);
//! assert_eq!(diff.impacted_modules, vec!["app_main".to_string()]);
//! println!("{}", RequirementDiffer::summarize(&diff));
//! ```

pub mod adapters;
pub mod application;
pub mod architecture_generation;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, SummaryStyler};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MermaidFormatter};
    pub use crate::adapters::outbound::network::OpenAiClient;
    pub use crate::application::dto::{
        AnalyzeRequest, ApiRequest, ApiResponse, ArchitectureResponse, AssembleRequest,
        CompareRequest, CompareResponse, DiffFormat, OutputFormat,
    };
    pub use crate::application::use_cases::{
        AnalyzeDiagramUseCase, AssembleArchitectureUseCase, CompareRequirementsUseCase,
        GenerateApiUseCase,
    };
    pub use crate::architecture_generation::domain::{
        apply_edits, AnalysisResult, ArchitectureMetadata, DiffResult, GeneratedApi,
        HardwareComponent, HardwareType, Layer, Priority, ProgrammingLanguage, Requirement,
        RequirementCategory, RequirementEdit, SoftwareArchitecture, SoftwareModule,
    };
    pub use crate::architecture_generation::policies::{DriverBinding, DriverMapping, HalPort};
    pub use crate::architecture_generation::services::{
        AnalysisValidator, ArchitectureAssembler, MermaidWriter, MetadataGenerator,
        RequirementDiffer,
    };
    pub use crate::ports::outbound::{
        ArchitectureFormatter, CompletionClient, CompletionRequest, DocumentReader, ImageAttachment,
        OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ConverterError, ExitCode};
    pub use crate::shared::Result;
}
