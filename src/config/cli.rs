use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::Operation;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-calc")]
#[command(about = "Type-checked four-function calculator and stolen licence plate lookup")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: plain or json (overrides the config file)
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Apply an arithmetic operation to two operands
    Calc {
        /// add, subtract, multiply or divide
        operation: Operation,

        /// Left operand, parsed as JSON (bare words are treated as text)
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Right operand, parsed as JSON (bare words are treated as text)
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Check a licence plate against the stolen vehicle registry
    Plate {
        plate: String,

        /// Additional stolen plates, comma separated
        #[arg(long, value_delimiter = ',')]
        stolen: Vec<String>,
    },
}

impl CliConfig {
    /// Loads the config file when given and merges it with the command-line flags.
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let extra_plates: &[String] = match &self.command {
            Command::Plate { stolen, .. } => stolen,
            Command::Calc { .. } => &[],
        };

        let settings = Settings::merge(
            file.as_ref(),
            self.format.as_deref(),
            self.verbose,
            extra_plates,
        );
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
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
    fn test_parse_calc_command() {
        let cli = CliConfig::try_parse_from(["small-calc", "calc", "add", "2", "6"]).unwrap();
        match cli.command {
            Command::Calc { operation, a, b } => {
                assert_eq!(operation, Operation::Add);
                assert_eq!(a, "2");
                assert_eq!(b, "6");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_operands_are_not_flags() {
        let cli =
            CliConfig::try_parse_from(["small-calc", "calc", "subtract", "-2", "-3.5"]).unwrap();
        assert!(matches!(cli.command, Command::Calc { ref a, .. } if a == "-2"));
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert!(CliConfig::try_parse_from(["small-calc", "calc", "modulo", "2", "6"]).is_err());
    }

    #[test]
    fn test_settings_merge_file_and_flags() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"json\"\n[registry]\nstolen_plates = [\"ABC123\"]\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "small-calc",
            "--config",
            path.as_str(),
            "plate",
            "GHI789",
            "--stolen",
            "DEF456,GHI789",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert!(settings.is_json());
        assert_eq!(settings.stolen_plates, vec!["ABC123", "DEF456", "GHI789"]);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::try_parse_from([
            "small-calc",
            "--config",
            "/definitely/not/here.toml",
            "calc",
            "add",
            "1",
            "2",
        ])
        .unwrap();
        assert!(cli.settings().is_err());
    }
}
