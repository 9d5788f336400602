/// Mock implementations for testing
mod mock_completion_client;
mod mock_document_reader;
mod mock_progress_reporter;

pub use mock_completion_client::MockCompletionClient;
pub use mock_document_reader::MockDocumentReader;
pub use mock_progress_reporter::MockProgressReporter;
