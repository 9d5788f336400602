/// Prompt asking the model to read a hardware block diagram.
///
/// The JSON shape embedded here is the `AnalysisResult` wire format.
pub fn analysis_prompt(system_requirements: &str) -> String {
    format!(
        r#"You are an expert system architect. Analyze this hardware block diagram and the provided system requirements to generate a software architecture.

System Requirements:
{requirements}

Please identify:
1. All hardware components (processors, memory, interfaces, sensors, etc.)
2. Their connections and communication protocols
3. Suggest a layered software architecture
4. Generate testable software requirements

Return the analysis in the following JSON format:
{{
  "hardwareComponents": [
    {{
      "id": "unique_id",
      "name": "component_name",
      "type": "processor|memory|communication|sensor|actuator|power|storage|interface|display",
      "connections": ["connected_component_ids"],
      "specifications": {{}}
    }}
  ],
  "suggestedArchitecture": {{
    "layers": ["application", "service", "driver", "hal", "kernel"],
    "modules": ["module_names"],
    "interfaces": ["interface_names"]
  }},
  "requirements": [
    {{
      "id": "REQ_001",
      "category": "functional|performance|interface|safety|security",
      "description": "requirement description",
      "testable": true,
      "priority": "high|medium|low",
      "relatedModules": ["module_ids"],
      "version": 1
    }}
  ]
}}
"#,
        requirements = system_requirements.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_requirements() {
        let prompt = analysis_prompt("  Must log IMU data at 100 Hz\n");
        assert!(prompt.contains("System Requirements:\nMust log IMU data at 100 Hz\n"));
    }

    #[test]
    fn test_describes_wire_shape() {
        let prompt = analysis_prompt("x");
        for key in ["hardwareComponents", "suggestedArchitecture", "relatedModules", "\"version\": 1"] {
            assert!(prompt.contains(key), "missing {}", key);
        }
        assert!(!prompt.contains("{{"));
    }
}
