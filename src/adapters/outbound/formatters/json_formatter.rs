use crate::application::dto::ArchitectureResponse;
use crate::ports::outbound::ArchitectureFormatter;
use crate::shared::Result;

/// JsonFormatter adapter writing the full architecture document
///
/// The document holds metadata, the analysis payload and the assembled
/// architecture. It is the input format of `diff --architecture` and
/// `generate-api`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchitectureFormatter for JsonFormatter {
    fn format(&self, response: &ArchitectureResponse) -> Result<String> {
        let mut json = serde_json::to_string_pretty(response)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture_generation::domain::{
        AnalysisResult, ArchitectureMetadata, HardwareComponent, HardwareType,
    };
    use crate::architecture_generation::services::ArchitectureAssembler;

    #[test]
    fn test_document_layout() {
        let analysis = AnalysisResult {
            hardware_components: vec![HardwareComponent::new("hw1", "Accelerometer", HardwareType::Sensor)],
            ..Default::default()
        };
        let architecture = ArchitectureAssembler::assemble(&analysis.hardware_components);
        let response = ArchitectureResponse::new(
            analysis,
            architecture,
            ArchitectureMetadata::new(
                "2026-01-01T00:00:00+00:00".to_string(),
                "hw2sw".to_string(),
                "0.3.0".to_string(),
                "urn:uuid:abcd".to_string(),
            ),
        );

        let output = JsonFormatter::new().format(&response).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["metadata"]["toolName"], "hw2sw");
        assert_eq!(value["metadata"]["runId"], "urn:uuid:abcd");
        assert_eq!(value["analysis"]["hardwareComponents"][0]["type"], "sensor");
        assert!(value["architecture"]["mermaidDiagram"]
            .as_str()
            .unwrap()
            .starts_with("graph LR"));
        let modules = value["architecture"]["modules"].as_array().unwrap();
        assert!(modules.iter().any(|m| m["hardwareMapping"] == "hw1"));
    }

    #[test]
    fn test_document_reads_back() {
        let response = ArchitectureResponse::new(
            AnalysisResult::default(),
            ArchitectureAssembler::assemble(&[]),
            ArchitectureMetadata::new(
                "t".to_string(),
                "hw2sw".to_string(),
                "0.3.0".to_string(),
                "r".to_string(),
            ),
        );
        let output = JsonFormatter::new().format(&response).unwrap();
        let parsed: ArchitectureResponse = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, response);
    }
}
