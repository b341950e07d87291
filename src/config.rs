use crate::error::{ConfigError, KmpError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

// =============================================================================
// Demo cases
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCase {
    pub name: String,
    pub text: String,
    pub pattern: String,
    #[serde(default)]
    pub ignore_case: bool,
}

impl DemoCase {
    pub fn new(name: impl Into<String>, text: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            pattern: pattern.into(),
            ignore_case: false,
        }
    }

    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

// =============================================================================
// Demo configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub log_level: String,
    pub color: bool,
    /// Byte limit for the bounded failure-function rendering.
    pub max_format_len: usize,
    pub failure_patterns: Vec<String>,
    pub cases: Vec<DemoCase>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
            max_format_len: 256,
            failure_patterns: ["ABABCABAB", "AAAA", "ABCDABCD", "AABAACAABAA"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            cases: vec![
                DemoCase::new("basic search", "ABABDABACDABABCABCABCABCABC", "ABABCAB"),
                DemoCase::new("multiple matches", "AABAACAADAABAABA", "AABA"),
                DemoCase::new("reusable matcher", "banana", "ana"),
                DemoCase::new(
                    "case-insensitive",
                    "The quick brown fox jumps over the lazy dog",
                    "THE",
                )
                .ignoring_case(),
                DemoCase::new("overlapping", "AAAAA", "AA"),
                DemoCase::new("first match", "hello world", "world"),
                DemoCase::new("not found", "hello world", "xyz"),
                DemoCase::new("empty text", "", "pattern"),
                DemoCase::new("pattern longer than text", "hi", "hello"),
            ],
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads by extension (`.toml` / `.json`), sniffing the content otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tracing_level()?;

        for case in &self.cases {
            if case.pattern.is_empty() {
                return Err(ConfigError::invalid_case(&case.name, KmpError::EmptyPattern));
            }
        }

        for (idx, pattern) in self.failure_patterns.iter().enumerate() {
            if pattern.is_empty() {
                return Err(ConfigError::invalid_case(
                    format!("failure_patterns[{idx}]"),
                    KmpError::EmptyPattern,
                ));
            }
        }

        Ok(())
    }

    pub fn tracing_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_TOML: &str = r#"
log_level = "debug"
color = false

[[cases]]
name = "dna"
text = "GATTACAGATTACA"
pattern = "ATTA"

[[cases]]
name = "shouting"
text = "Hello HELLO hello"
pattern = "hello"
ignore_case = true
"#;

    #[test]
    fn test_default_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracing_level().unwrap(), Level::WARN);
        assert!(!config.cases.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let config = DemoConfig::from_toml_str(SAMPLE_TOML).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.color);
        assert_eq!(config.cases.len(), 2);
        assert!(!config.cases[0].ignore_case);
        assert!(config.cases[1].ignore_case);
        // unspecified fields fall back to defaults
        assert_eq!(config.max_format_len, 256);
        assert_eq!(config.failure_patterns.len(), 4);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"cases": [{"name": "n", "text": "aaa", "pattern": "aa"}]}"#;
        let config = DemoConfig::from_json_str(json).unwrap();
        assert_eq!(config.cases, vec![DemoCase::new("n", "aaa", "aa")]);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let toml = r#"
[[cases]]
name = "blank"
text = "abc"
pattern = ""
"#;
        let err = DemoConfig::from_toml_str(toml).unwrap_err();
        match err {
            ConfigError::InvalidCase { name, source } => {
                assert_eq!(name, "blank");
                assert_eq!(source, KmpError::EmptyPattern);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_failure_pattern_rejected() {
        let toml = r#"failure_patterns = ["AB", ""]"#;
        let err = DemoConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("failure_patterns[1]"));
    }

    #[test]
    fn test_unknown_log_level() {
        let err = DemoConfig::from_toml_str(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            DemoConfig::from_toml_str("cases = 3"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            DemoConfig::from_json_str("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SAMPLE_TOML.as_bytes()).unwrap();
        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.cases[0].name, "dna");
    }

    #[test]
    fn test_load_sniffs_json_without_extension() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"color": false}}"#).unwrap();
        let config = DemoConfig::load(file.path()).unwrap();
        assert!(!config.color);
        assert_eq!(config.cases, DemoConfig::default().cases);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
