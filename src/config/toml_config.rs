use crate::config::EngineSettings;
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub engine: EngineSettings,
    pub data: Option<DataConfig>,
    pub logging: Option<LoggingConfig>,
    pub audit: Option<AuditConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    pub enabled: bool,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EngineError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ENGINE_LIMIT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.engine.validate()?;

        if let Some(data) = &self.data {
            validate_path("data.path", &data.path)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validate_one_of("logging.format", format, &["compact", "json"])?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        if let Some(audit) = &self.audit {
            if audit.enabled {
                let path = audit
                    .path
                    .as_deref()
                    .ok_or_else(|| EngineError::MissingConfigError {
                        field: "audit.path".to_string(),
                    })?;
                validate_path("audit.path", path)?;
            }
        }

        Ok(())
    }

    pub fn data_path(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.path.as_str())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|format| format == "json")
            .unwrap_or(false)
    }

    /// 啟用稽核時回傳紀錄檔路徑
    pub fn audit_path(&self) -> Option<&str> {
        self.audit
            .as_ref()
            .filter(|audit| audit.enabled)
            .and_then(|audit| audit.path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[engine]
limit = 3
weight = 10
top_areas = 2
default_institutions = ["Universidad A", "Universidad B"]

[data]
path = "data/catalog.toml"

[logging]
level = "debug"
format = "json"

[audit]
enabled = true
path = "./assessments.jsonl"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.engine.limit, 3);
        assert_eq!(config.engine.weight, 10);
        assert_eq!(config.data_path(), Some("data/catalog.toml"));
        assert!(config.json_logging());
        assert_eq!(config.audit_path(), Some("./assessments.jsonl"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.engine, EngineSettings::default());
        assert_eq!(config.data_path(), None);
        assert_eq!(config.audit_path(), None);
        assert!(!config.json_logging());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ENGINE_WEIGHT", "20");

        let toml_content = r#"
[engine]
weight = ${TEST_ENGINE_WEIGHT}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.engine.weight, 20);

        std::env::remove_var("TEST_ENGINE_WEIGHT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[engine]\nlimit = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[audit]\nenabled = true\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(EngineError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = TomlConfig::from_toml_str("[engine\nlimit = 3");
        assert!(matches!(
            result,
            Err(EngineError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[engine]\nlimit = 7\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.engine.limit, 7);
    }
}
