/// Use cases module containing application business logic orchestration
mod analyze_diagram;
mod assemble_architecture;
mod compare_requirements;
mod generate_api;
mod input;

pub use analyze_diagram::AnalyzeDiagramUseCase;
pub use assemble_architecture::AssembleArchitectureUseCase;
pub use compare_requirements::CompareRequirementsUseCase;
pub use generate_api::{GenerateApiUseCase, MAX_CONCURRENT_REQUESTS};
