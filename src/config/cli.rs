use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "case-convert")]
#[command(about = "Convert identifiers between casing conventions")]
pub struct CliConfig {
    /// Strings to convert. Read line by line from stdin when omitted.
    pub inputs: Vec<String>,

    /// Conversion to apply; repeat to chain several in order.
    #[arg(short = 'c', long = "conversion")]
    pub conversions: Vec<String>,

    /// `text` (default) or `json`. Overrides the job file's format.
    #[arg(long)]
    pub format: Option<String>,

    /// TOML job file providing steps, inputs and format. Positional inputs
    /// replace the job's inputs.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "List available conversions and exit")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn steps(&self) -> &[String] {
        &self.conversions
    }

    fn inputs(&self) -> &[String] {
        &self.inputs
    }

    fn output_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}

impl CliConfig {
    /// Command-line inputs win over the provider's when any were given.
    pub fn resolve_inputs(&self, provider: &dyn ConfigProvider) -> Vec<String> {
        if self.inputs.is_empty() {
            provider.inputs().to_vec()
        } else {
            self.inputs.clone()
        }
    }

    /// An explicit `--format` wins over the provider's.
    pub fn resolve_format(&self, provider: &dyn ConfigProvider) -> OutputFormat {
        match self.format {
            Some(_) => self.output_format(),
            None => provider.output_format(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validation::validate_output_format("--format", format)?;
        }

        // The job file brings its own steps.
        if self.list || self.config.is_some() {
            return Ok(());
        }

        validation::validate_non_empty_list("--conversion", &self.conversions)?;
        validation::validate_conversion_names("--conversion", &self.conversions)
    }
}
