pub mod toml_config;

pub use toml_config::DatasetConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "relmap")]
#[command(about = "Transformation utilities for rosters and usage maps")]
pub struct CliConfig {
    /// TOML dataset file with [usage] and [groups] tables
    #[arg(long)]
    pub input: String,

    /// Operations to run: total-hours, full-names, invert (default: all)
    #[arg(long, value_delimiter = ',')]
    pub ops: Vec<String>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        Ok(())
    }
}
