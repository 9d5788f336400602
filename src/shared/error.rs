use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs use these to tell a requirement change apart from a real failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - command completed, no requirement changes flagged
    Success = 0,
    /// `diff --check` found added, modified or removed requirements
    ChangesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (LLM error, network error, file I/O error, invalid input, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ChangesDetected => write!(f, "Changes Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for architecture generation.
#[derive(Debug, Error)]
pub enum ConverterError {
    #[error("Missing required fields: {fields}\n\n💡 Hint: Run the command with --help to see which inputs it needs")]
    MissingInput { fields: String },

    #[error("Invalid analysis result: {reason}\n\n💡 Hint: Fix the analysis payload upstream before assembling an architecture")]
    InvalidAnalysis { reason: String },

    #[error("Invalid requirement list ({side}): {reason}")]
    InvalidRequirements { side: String, reason: String },

    #[error("LLM request failed: {details}\n\n💡 Hint: {hint}")]
    LlmRequest { details: String, hint: String },

    #[error("LLM returned an unusable response: {details}")]
    LlmResponse { details: String },

    #[error("Module not found: {module_id}\n\n💡 Hint: Available modules: {available}")]
    ModuleNotFound { module_id: String, available: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse {what}: {path}\nDetails: {details}")]
    ParseError {
        what: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}")]
    SecurityError { path: PathBuf, reason: String },
}
