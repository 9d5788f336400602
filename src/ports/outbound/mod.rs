/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (LLM service, file system, console).
pub mod completion_client;
pub mod document_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use completion_client::{image_media_type, CompletionClient, CompletionRequest, ImageAttachment};
pub use document_reader::DocumentReader;
pub use formatter::ArchitectureFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
