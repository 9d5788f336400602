use crate::architecture_generation::domain::ArchitectureMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service stamping generated architectures.
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh run id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool producing the architecture
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ArchitectureMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        ArchitectureMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Generates metadata for this binary, using the compile-time version
    pub fn generate_default_metadata() -> ArchitectureMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = MetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.run_id().starts_with("urn:uuid:"));
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = MetadataGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "hw2sw");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let metadata = MetadataGenerator::generate_metadata("t", "1");
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_run_ids_are_unique() {
        let a = MetadataGenerator::generate_metadata("t", "1");
        let b = MetadataGenerator::generate_metadata("t", "1");
        assert_ne!(a.run_id(), b.run_id());
    }
}
