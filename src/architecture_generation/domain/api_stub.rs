use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target languages for generated API stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgrammingLanguage {
    TypeScript,
    Python,
    C,
    Java,
}

impl ProgrammingLanguage {
    pub const ALL: [ProgrammingLanguage; 4] = [
        ProgrammingLanguage::TypeScript,
        ProgrammingLanguage::Python,
        ProgrammingLanguage::C,
        ProgrammingLanguage::Java,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgrammingLanguage::TypeScript => "typescript",
            ProgrammingLanguage::Python => "python",
            ProgrammingLanguage::C => "c",
            ProgrammingLanguage::Java => "java",
        }
    }
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProgrammingLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(ProgrammingLanguage::TypeScript),
            "python" | "py" => Ok(ProgrammingLanguage::Python),
            "c" => Ok(ProgrammingLanguage::C),
            "java" => Ok(ProgrammingLanguage::Java),
            _ => Err(format!(
                "Invalid language: {}. Please specify 'typescript', 'python', 'c' or 'java'",
                s
            )),
        }
    }
}

/// An LLM-written API stub for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedApi {
    pub module_id: String,
    pub module_name: String,
    pub language: ProgrammingLanguage,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_language_from_str_aliases() {
        assert_eq!(
            ProgrammingLanguage::from_str("TS").unwrap(),
            ProgrammingLanguage::TypeScript
        );
        assert_eq!(
            ProgrammingLanguage::from_str("py").unwrap(),
            ProgrammingLanguage::Python
        );
        assert_eq!(ProgrammingLanguage::from_str("C").unwrap(), ProgrammingLanguage::C);
    }

    #[test]
    fn test_language_from_str_invalid() {
        let err = ProgrammingLanguage::from_str("cobol").unwrap_err();
        assert!(err.contains("Invalid language"));
        assert!(err.contains("cobol"));
    }

    #[test]
    fn test_language_round_trips_through_display() {
        for lang in ProgrammingLanguage::ALL {
            assert_eq!(ProgrammingLanguage::from_str(&lang.to_string()).unwrap(), lang);
        }
    }
}
