use anyhow::Context;
use case_convert::core::ConfigProvider;
use case_convert::utils::{logger, validation::Validate};
use case_convert::{render, CaseError, CliConfig, Conversion, ConversionPipeline, TomlConfig};
use clap::Parser;
use std::io::BufRead;
use std::path::Path;

/// Configuration problems exit with 2, whichever front they came from.
fn exit_on_config_error(e: CaseError) -> ! {
    tracing::error!("Configuration validation failed: {}", e);
    eprintln!("❌ {}", e);
    std::process::exit(2);
}

fn load_job(path: &Path) -> case_convert::Result<TomlConfig> {
    let job = TomlConfig::from_file(path)?;
    job.validate()?;
    tracing::info!("Loaded job '{}' from {}", job.pipeline.name, path.display());
    Ok(job)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_on_config_error(e);
    }

    if config.list {
        for conversion in Conversion::ALL {
            println!("{}", conversion);
        }
        return Ok(());
    }

    let job = match &config.config {
        Some(path) => Some(load_job(path).unwrap_or_else(|e| exit_on_config_error(e))),
        None => None,
    };
    let provider: &dyn ConfigProvider = match &job {
        Some(job) => job,
        None => &config,
    };

    let pipeline = ConversionPipeline::from_names(provider.steps())?;

    let mut inputs = config.resolve_inputs(provider);
    if inputs.is_empty() {
        tracing::debug!("No inputs given, reading stdin");
        for line in std::io::stdin().lock().lines() {
            inputs.push(line.context("failed to read stdin")?);
        }
    }

    let records = pipeline.run(inputs);
    println!("{}", render(&records, config.resolve_format(provider))?);

    Ok(())
}
