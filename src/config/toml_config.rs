use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("invalid regex"));

/// A batch conversion job read from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    fn format_str(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }
}

impl ConfigProvider for TomlConfig {
    fn steps(&self) -> &[String] {
        &self.pipeline.steps
    }

    fn inputs(&self) -> &[String] {
        &self.input.values
    }

    fn output_format(&self) -> OutputFormat {
        self.format_str().parse().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_non_empty_list("pipeline.steps", &self.pipeline.steps)?;
        validation::validate_conversion_names("pipeline.steps", &self.pipeline.steps)?;
        validation::validate_output_format("output.format", self.format_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CaseError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[pipeline]
name = "db-columns"
steps = ["camel-to-snake", "to-upper-case"]

[input]
values = ["helloWorld", "userId"]

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "db-columns");
        assert_eq!(config.steps(), ["camel-to-snake", "to-upper-case"]);
        assert_eq!(config.inputs().len(), 2);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let toml_content = r#"
[pipeline]
name = "minimal"
steps = ["camelToTitle"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.inputs().is_empty());
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CASE_CONVERT_TEST_VALUE", "fromEnvironment");

        let toml_content = r#"
[pipeline]
name = "env"
steps = ["camel-to-kebab"]

[input]
values = ["${CASE_CONVERT_TEST_VALUE}", "${CASE_CONVERT_UNSET_VALUE}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.values[0], "fromEnvironment");
        assert_eq!(config.input.values[1], "${CASE_CONVERT_UNSET_VALUE}");

        std::env::remove_var("CASE_CONVERT_TEST_VALUE");
    }

    #[test]
    fn test_config_validation() {
        let unknown_step = r#"
[pipeline]
name = "bad"
steps = ["camel-to-snake", "snake-to-shout"]
"#;
        let config = TomlConfig::from_toml_str(unknown_step).unwrap();
        assert!(config.validate().is_err());

        let no_steps = r#"
[pipeline]
name = "empty"
steps = []
"#;
        let config = TomlConfig::from_toml_str(no_steps).unwrap();
        assert!(config.validate().is_err());

        let bad_format = r#"
[pipeline]
name = "fmt"
steps = ["to-lower-case"]

[output]
format = "yaml"
"#;
        let config = TomlConfig::from_toml_str(bad_format).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[pipeline\nname = ").unwrap_err();
        assert!(matches!(err, CaseError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"
steps = ["kebab-to-camel"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");

        assert!(matches!(
            TomlConfig::from_file("/nonexistent/job.toml"),
            Err(CaseError::IoError(_))
        ));
    }
}
