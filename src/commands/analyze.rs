//! The `analyze` command: collect artifacts, run the analysis pipeline,
//! write the report.

use crate::analysis::analyze_artifacts;
use crate::core::ExhumeError;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::walker::collect_artifacts;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
}

pub fn run(config: AnalyzeConfig) -> Result<()> {
    let artifacts = collect_artifacts(&config.path, config.extensions.as_deref())
        .with_context(|| format!("failed to read {}", config.path.display()))?;

    if artifacts.is_empty() {
        return Err(ExhumeError::Input(format!(
            "no analyzable files found under {}",
            config.path.display()
        ))
        .into());
    }

    info!("analyzing {} files", artifacts.len());
    let report = analyze_artifacts(&artifacts);

    let mut writer = open_writer(config.output.as_deref(), config.format)?;
    writer.write_report(&report)?;
    Ok(())
}

fn open_writer(
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<Box<dyn crate::io::output::OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(create_writer(file, format))
        }
        None => Ok(create_writer(std::io::stdout(), format)),
    }
}
