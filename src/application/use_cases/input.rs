use crate::ports::outbound::DocumentReader;
use crate::shared::error::ConverterError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads `path` through the reader and decodes it as JSON.
/// `what` names the document in parse errors.
pub(crate) fn load_json<T, DR>(reader: &DR, path: &Path, what: &str) -> Result<T>
where
    T: DeserializeOwned,
    DR: DocumentReader,
{
    let text = reader.read_text(path)?;
    serde_json::from_str(&text).map_err(|e| {
        ConverterError::ParseError {
            what: what.to_string(),
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
