//! The `convert` command: read a WSDL file, run the conversion pipeline,
//! write the result.

use crate::cli::SpecFormat;
use crate::core::ExhumeError;
use crate::soap::{convert_soap_to_rest, AuthStrategy, ConversionOptions, TargetFramework};
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

pub struct ConvertConfig {
    pub wsdl: PathBuf,
    pub format: SpecFormat,
    pub output: Option<PathBuf>,
    pub auth: AuthStrategy,
    pub target: TargetFramework,
    pub service_name: Option<String>,
    pub no_examples: bool,
}

pub fn run(config: ConvertConfig) -> Result<()> {
    let wsdl = crate::io::read_file(&config.wsdl)
        .with_context(|| format!("failed to read {}", config.wsdl.display()))?;
    if wsdl.trim().is_empty() {
        return Err(ExhumeError::Input("WSDL file is empty".to_string()).into());
    }

    let options = ConversionOptions {
        generate_stubs: false,
        target_framework: config.target,
        auth_strategy: config.auth,
        service_name: config.service_name,
        include_examples: !config.no_examples,
    };

    let result = convert_soap_to_rest(&wsdl, &options)?;
    info!(
        "converted {} operations, {} complex types",
        result.endpoints.len(),
        result.complex_types.len()
    );
    for warning in &result.warnings {
        warn!("{warning}");
    }

    let rendered = match config.format {
        SpecFormat::Json => serde_json::to_string_pretty(&result)?,
        SpecFormat::Yaml => serde_yaml::to_string(&result.open_api_spec)?,
    };

    match &config.output {
        Some(path) => crate::io::write_file(path, &rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}
