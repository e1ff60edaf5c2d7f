pub mod output;
pub mod walker;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use walker::collect_artifacts;

use crate::core::ExhumeResult;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> ExhumeResult<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> ExhumeResult<()> {
    fs::write(path, content)?;
    Ok(())
}
