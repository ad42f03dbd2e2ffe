pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::{FieldValue, TomlConfig};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pythagoras")]
#[command(about = "Draw right triangles and list Pythagorean triplets")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory for saved drawings and tables
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List Pythagorean triplets with x + y + z <= max-sum
    Triplets {
        #[arg(long, allow_hyphen_values = true)]
        max_sum: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the table in every configured output format
        #[arg(long)]
        save: bool,
    },
    /// Compute and lay out a right triangle from its legs
    Triangle {
        #[arg(short = 'a', allow_hyphen_values = true)]
        a: Option<String>,

        #[arg(short = 'b', allow_hyphen_values = true)]
        b: Option<String>,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// Also write triangle.svg
        #[arg(long)]
        save: bool,
    },
    /// Prompt for commands on stdin (default)
    Interactive,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command line values win over the configuration file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(path) = &self.output_path {
            config.output.path = Some(path.clone());
        }

        match &self.command {
            Some(Command::Triplets {
                max_sum: Some(max_sum),
                ..
            }) => {
                config.triplets.max_sum = Some(FieldValue::Text(max_sum.clone()));
            }
            Some(Command::Triangle {
                a, b, width, height, ..
            }) => {
                if let Some(a) = a {
                    config.triangle.a = Some(FieldValue::Text(a.clone()));
                }
                if let Some(b) = b {
                    config.triangle.b = Some(FieldValue::Text(b.clone()));
                }
                if width.is_some() {
                    config.canvas.width = *width;
                }
                if height.is_some() {
                    config.canvas.height = *height;
                }
            }
            _ => {}
        }
    }

    /// Checks the file as loaded, then layers the command line on top.
    /// Field values given on the command line are left to the session so
    /// they fail as input errors, not configuration errors.
    pub fn resolve(&self, mut config: TomlConfig) -> Result<TomlConfig> {
        config.validate()?;
        self.apply_overrides(&mut config);
        config.validate_settings()?;
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
