/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analyze_request;
mod api_request;
mod api_response;
mod architecture_response;
mod compare_request;
mod compare_response;
mod output_format;

pub use analyze_request::{AnalyzeRequest, AssembleRequest};
pub use api_request::ApiRequest;
pub use api_response::ApiResponse;
pub use architecture_response::ArchitectureResponse;
pub use compare_request::CompareRequest;
pub use compare_response::CompareResponse;
pub use output_format::{DiffFormat, OutputFormat};

/// Token budget of the hardware analysis completion
pub const DEFAULT_ANALYSIS_MAX_TOKENS: u32 = 4000;
/// Token budget of one API stub completion
pub const DEFAULT_API_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
