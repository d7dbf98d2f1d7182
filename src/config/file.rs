use crate::domain::ports::AppConfig;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind_addr: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub seed_demo_data: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unknown variables
    // are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl AppConfig for FileConfig {
    fn bind_addr(&self) -> &str {
        self.server.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    fn database_url(&self) -> &str {
        // validate() guarantees the URL is present before the config is used.
        self.database.url.as_deref().unwrap_or("")
    }

    fn seed_demo_data(&self) -> bool {
        self.database.seed_demo_data.unwrap_or(true)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        let url = validation::validate_required_field("database.url", &self.database.url)?;
        validation::validate_url("database.url", url, &["sqlite"])?;
        if let Some(bind_addr) = &self.server.bind_addr {
            validation::validate_bind_addr("server.bind_addr", bind_addr)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[server]
bind_addr = "127.0.0.1:8080"

[database]
url = "sqlite:inn.db?mode=rwc"
seed_demo_data = false
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_url(), "sqlite:inn.db?mode=rwc");
        assert!(!config.seed_demo_data());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_when_sections_are_sparse() {
        let toml_content = r#"
[database]
url = "sqlite:inn.db?mode=rwc"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_addr(), DEFAULT_BIND_ADDR);
        assert!(config.seed_demo_data());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_INN_DB_URL", "sqlite:from-env.db?mode=rwc");

        let toml_content = r#"
[database]
url = "${TEST_INN_DB_URL}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.database_url(), "sqlite:from-env.db?mode=rwc");

        std::env::remove_var("TEST_INN_DB_URL");
    }

    #[test]
    fn test_validation_rejects_missing_or_foreign_url() {
        let missing = FileConfig::from_toml_str("[database]\n").unwrap();
        assert!(missing.validate().is_err());

        let foreign = FileConfig::from_toml_str(
            "[database]\nurl = \"postgres://localhost/inn\"\n",
        )
        .unwrap();
        assert!(foreign.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
bind_addr = "0.0.0.0:4000"

[database]
url = "sqlite:file-test.db?mode=rwc"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
    }
}
