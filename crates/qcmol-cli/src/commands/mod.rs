pub mod convert;
pub mod info;
pub mod normalize;

use crate::error::{CliError, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub(crate) fn read_input(path: &Path) -> Result<String> {
    info!("Loading input structure from {:?}", path);
    std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Writes `content` to `path`, or to standard output when no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Wrote output to {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
