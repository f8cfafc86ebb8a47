#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use self::toml_config::{TomlConfig, OUTPUT_FORMATS};

/// Effective settings after merging the optional TOML file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_format: String,
    pub stolen_plates: Vec<String>,
    pub verbose: bool,
}

impl Settings {
    /// Command-line values win over the file; extra plates are appended to the configured ones.
    pub fn merge(
        file: Option<&TomlConfig>,
        format_override: Option<&str>,
        verbose_flag: bool,
        extra_plates: &[String],
    ) -> Self {
        let output_format = format_override
            .or_else(|| file.map(|f| f.output_format()))
            .unwrap_or("plain")
            .to_string();

        let mut stolen_plates: Vec<String> = file
            .map(|f| f.stolen_plates().to_vec())
            .unwrap_or_default();
        stolen_plates.extend(extra_plates.iter().cloned());

        Self {
            output_format,
            stolen_plates,
            verbose: verbose_flag || file.map(|f| f.verbose()).unwrap_or(false),
        }
    }

    pub fn is_json(&self) -> bool {
        self.output_format == "json"
    }
}

impl ConfigProvider for Settings {
    fn output_format(&self) -> &str {
        &self.output_format
    }

    fn stolen_plates(&self) -> &[String] {
        &self.stolen_plates
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_one_of("format", &self.output_format, &OUTPUT_FORMATS)
    }
}
