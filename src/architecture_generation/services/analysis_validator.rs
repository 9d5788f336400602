use crate::architecture_generation::domain::{AnalysisResult, HardwareComponent, Requirement};
use crate::architecture_generation::services::hardware_node_id;
use crate::shared::error::ConverterError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// AnalysisValidator service guarding the assembler and differ inputs.
///
/// Structural problems (empty or duplicate ids, version 0) are rejected.
/// Two hardware ids that sanitize to one diagram node count as duplicates.
/// Connections pointing at unknown hardware are only logged.
pub struct AnalysisValidator;

impl AnalysisValidator {
    pub fn validate(analysis: &AnalysisResult) -> Result<()> {
        Self::validate_hardware(&analysis.hardware_components)?;
        Self::validate_requirements("analysis", &analysis.requirements)?;
        Ok(())
    }

    pub fn validate_hardware(hardware: &[HardwareComponent]) -> Result<()> {
        let mut seen = HashSet::new();
        let mut nodes: HashMap<String, &str> = HashMap::new();
        for (index, hw) in hardware.iter().enumerate() {
            if hw.id.trim().is_empty() {
                return Err(ConverterError::InvalidAnalysis {
                    reason: format!("hardware component #{} has an empty id", index + 1),
                }
                .into());
            }
            if !seen.insert(hw.id.as_str()) {
                return Err(ConverterError::InvalidAnalysis {
                    reason: format!("duplicate hardware id '{}'", hw.id),
                }
                .into());
            }
            let node = hardware_node_id(&hw.id);
            if let Some(other) = nodes.get(&node) {
                return Err(ConverterError::InvalidAnalysis {
                    reason: format!(
                        "hardware ids '{}' and '{}' map to the same diagram node '{}'",
                        other, hw.id, node
                    ),
                }
                .into());
            }
            nodes.insert(node, hw.id.as_str());
        }

        for hw in hardware {
            for target in &hw.connections {
                if !seen.contains(target.as_str()) {
                    tracing::warn!(
                        hardware = %hw.id,
                        connection = %target,
                        "connection points at unknown hardware"
                    );
                }
            }
        }
        Ok(())
    }

    /// `side` names the list in error messages ("old", "new", "analysis").
    pub fn validate_requirements(side: &str, requirements: &[Requirement]) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, req) in requirements.iter().enumerate() {
            let reason = if req.id.trim().is_empty() {
                Some(format!("requirement #{} has an empty id", index + 1))
            } else if !seen.insert(req.id.as_str()) {
                Some(format!("duplicate requirement id '{}'", req.id))
            } else if req.version == 0 {
                Some(format!("requirement '{}' has version 0", req.id))
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(ConverterError::InvalidRequirements {
                    side: side.to_string(),
                    reason,
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture_generation::domain::{HardwareType, Priority, RequirementCategory};

    fn req(id: &str) -> Requirement {
        Requirement::new(id, RequirementCategory::Functional, "d", Priority::Low)
    }

    #[test]
    fn test_valid_analysis() {
        let analysis = AnalysisResult {
            hardware_components: vec![
                HardwareComponent::new("mcu", "MCU", HardwareType::Processor).with_connections(["imu"]),
                HardwareComponent::new("imu", "IMU", HardwareType::Sensor),
            ],
            requirements: vec![req("R1"), req("R2")],
            ..Default::default()
        };
        assert!(AnalysisValidator::validate(&analysis).is_ok());
    }

    #[test]
    fn test_dangling_connection_is_tolerated() {
        let hardware = vec![HardwareComponent::new("mcu", "MCU", HardwareType::Processor)
            .with_connections(["ghost"])];
        assert!(AnalysisValidator::validate_hardware(&hardware).is_ok());
    }

    #[test]
    fn test_duplicate_hardware_id() {
        let hardware = vec![
            HardwareComponent::new("a", "A", HardwareType::Sensor),
            HardwareComponent::new("a", "A again", HardwareType::Memory),
        ];
        let err = AnalysisValidator::validate_hardware(&hardware).unwrap_err();
        assert!(err.to_string().contains("duplicate hardware id 'a'"));
    }

    #[test]
    fn test_ids_sharing_a_diagram_node_rejected() {
        let hardware = vec![
            HardwareComponent::new("imu-1", "IMU A", HardwareType::Sensor),
            HardwareComponent::new("imu_1", "IMU B", HardwareType::Sensor),
        ];
        let err = AnalysisValidator::validate_hardware(&hardware).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConverterError>(),
            Some(ConverterError::InvalidAnalysis { .. })
        ));
        assert!(err
            .to_string()
            .contains("'imu-1' and 'imu_1' map to the same diagram node 'hw_imu_1'"));
    }

    #[test]
    fn test_hardware_id_matching_a_module_id_is_accepted() {
        let hardware = vec![
            HardwareComponent::new("kernel_io", "IO Expander", HardwareType::Interface),
            HardwareComponent::new("end", "Endpoint", HardwareType::Communication),
        ];
        assert!(AnalysisValidator::validate_hardware(&hardware).is_ok());
    }

    #[test]
    fn test_empty_hardware_id() {
        let hardware = vec![HardwareComponent::new("  ", "A", HardwareType::Sensor)];
        let err = AnalysisValidator::validate_hardware(&hardware).unwrap_err();
        assert!(err.to_string().contains("empty id"));
    }

    #[test]
    fn test_duplicate_requirement_id() {
        let err = AnalysisValidator::validate_requirements("new", &[req("R1"), req("R1")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("(new)"));
        assert!(message.contains("duplicate requirement id 'R1'"));
    }

    #[test]
    fn test_zero_version_rejected() {
        let mut r = req("R1");
        r.version = 0;
        let err = AnalysisValidator::validate_requirements("old", &[r]).unwrap_err();
        assert!(err.to_string().contains("version 0"));
    }

    #[test]
    fn test_error_downcasts_to_converter_error() {
        let err = AnalysisValidator::validate_requirements("old", &[req("")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConverterError>(),
            Some(ConverterError::InvalidRequirements { .. })
        ));
    }
}
