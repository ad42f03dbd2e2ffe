use crate::domain::model::{Canvas, FormInputs, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InputField, PythagorasError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const DEFAULT_OUTPUT_PATH: &str = "./output";
const MAX_CANVAS_SIDE: u32 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub triangle: TriangleConfig,
    pub triplets: TripletsConfig,
    pub canvas: CanvasConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// A field value that may be written as a TOML number or as text such as
/// `"2,5"`. Text is validated the same way as typed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn to_text(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Text(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleConfig {
    pub a: Option<FieldValue>,
    pub b: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripletsConfig {
    pub max_sum: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PythagorasError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| PythagorasError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unknown
    /// variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Checks the whole file, including the starting field values.
    pub fn validate_config(&self) -> Result<()> {
        self.validate_settings()?;

        if let Some(max_sum) = &self.triplets.max_sum {
            let text = max_sum.to_text();
            validation::parse_max_sum(&text).map_err(|e| {
                PythagorasError::InvalidConfigValueError {
                    field: "triplets.max_sum".to_string(),
                    value: text.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        let legs = [
            ("triangle.a", InputField::LegA, &self.triangle.a),
            ("triangle.b", InputField::LegB, &self.triangle.b),
        ];
        for (key, field, value) in legs {
            if let Some(value) = value {
                let text = value.to_text();
                validation::parse_leg(field, &text).map_err(|e| {
                    PythagorasError::InvalidConfigValueError {
                        field: key.to_string(),
                        value: text.clone(),
                        reason: e.to_string(),
                    }
                })?;
            }
        }

        Ok(())
    }

    /// Checks output and canvas settings only. Field values are left to the
    /// session, which reports them as input errors.
    pub fn validate_settings(&self) -> Result<()> {
        validation::validate_path("output.path", self.output_path())?;

        if let Some(width) = self.canvas.width {
            validation::validate_range("canvas.width", width, 1, MAX_CANVAS_SIDE)?;
        }
        if let Some(height) = self.canvas.height {
            validation::validate_range("canvas.height", height, 1, MAX_CANVAS_SIDE)?;
        }

        if let Some(formats) = &self.output.formats {
            for format in formats {
                format.parse::<OutputFormat>().map_err(|reason| {
                    PythagorasError::InvalidConfigValueError {
                        field: "output.formats".to_string(),
                        value: format.clone(),
                        reason,
                    }
                })?;
            }
        }

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl ConfigProvider for TomlConfig {
    fn form_inputs(&self) -> FormInputs {
        let defaults = FormInputs::default();
        FormInputs {
            a: self.triangle.a.as_ref().map_or(defaults.a, FieldValue::to_text),
            b: self.triangle.b.as_ref().map_or(defaults.b, FieldValue::to_text),
            max_sum: self
                .triplets
                .max_sum
                .as_ref()
                .map_or(defaults.max_sum, FieldValue::to_text),
        }
    }

    fn canvas(&self) -> Canvas {
        Canvas::new(
            self.canvas.width.unwrap_or(Canvas::DEFAULT_WIDTH),
            self.canvas.height.unwrap_or(Canvas::DEFAULT_HEIGHT),
        )
    }

    /// Unknown names are dropped here; `validate` reports them.
    fn output_formats(&self) -> Vec<OutputFormat> {
        match &self.output.formats {
            Some(formats) => formats.iter().filter_map(|f| f.parse().ok()).collect(),
            None => vec![OutputFormat::Csv],
        }
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
    fn test_parse_full_config() {
        let toml_content = r#"
[triangle]
a = 5
b = "12,5"

[triplets]
max_sum = 60

[canvas]
width = 800
height = 600

[output]
path = "./results"
formats = ["csv", "json"]

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let inputs = config.form_inputs();

        assert_eq!(inputs.a, "5");
        assert_eq!(inputs.b, "12,5");
        assert_eq!(inputs.max_sum, "60");
        assert_eq!(config.canvas(), Canvas::new(800, 600));
        assert_eq!(config.output_path(), "./results");
        assert_eq!(
            config.output_formats(),
            vec![OutputFormat::Csv, OutputFormat::Json]
        );
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.form_inputs(), FormInputs::default());
        assert_eq!(config.canvas(), Canvas::default());
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_formats(), vec![OutputFormat::Csv]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_float_leg() {
        let config = TomlConfig::from_toml_str("[triangle]\na = 2.5\n").unwrap();
        assert_eq!(config.form_inputs().a, "2.5");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PYTHAGORAS_TEST_OUTPUT", "/tmp/pythagoras-out");

        let toml_content = r#"
[output]
path = "${PYTHAGORAS_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/pythagoras-out");

        std::env::remove_var("PYTHAGORAS_TEST_OUTPUT");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let config =
            TomlConfig::from_toml_str("[output]\npath = \"${PYTHAGORAS_SURELY_UNSET}\"\n").unwrap();
        assert_eq!(config.output_path(), "${PYTHAGORAS_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let invalid = [
            "[canvas]\nwidth = 0\n",
            "[canvas]\nheight = 20000\n",
            "[output]\nformats = [\"xml\"]\n",
            "[output]\npath = \"\"\n",
            "[triplets]\nmax_sum = 0\n",
            "[triplets]\nmax_sum = \"viele\"\n",
            "[triangle]\na = -3\n",
        ];
        for content in invalid {
            let config = TomlConfig::from_toml_str(content).unwrap();
            assert!(config.validate().is_err(), "expected error for {:?}", content);
        }
    }

    #[test]
    fn test_settings_check_ignores_field_values() {
        let config = TomlConfig::from_toml_str("[triplets]\nmax_sum = \"abc\"\n").unwrap();
        assert!(config.validate_settings().is_ok());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("triplets.max_sum"));
    }

    #[test]
    fn test_leg_error_keeps_config_key() {
        let config = TomlConfig::from_toml_str("[triangle]\nb = \"x\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("triangle.b"));
        assert!(err.to_string().contains("Invalid number for b"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[canvas\nwidth = 1").unwrap_err();
        assert!(matches!(err, PythagorasError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[triplets]\nmax_sum = 24\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.form_inputs().max_sum, "24");
    }
}
