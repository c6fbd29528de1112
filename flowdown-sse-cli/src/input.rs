use crate::error::{CliError, CliResult};
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where the stream comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum InputSource {
    /// A captured response body on disk.
    File(PathBuf),
    /// From stdin (piped).
    Stdin,
}

/// Resolve the input source: `-f <path>` > piped stdin. `-f -` forces stdin.
pub fn resolve_input(file_flag: Option<&Path>) -> CliResult<InputSource> {
    match file_flag {
        Some(path) if path == Path::new("-") => Ok(InputSource::Stdin),
        Some(path) => Ok(InputSource::File(path.to_path_buf())),
        None if !io::stdin().is_terminal() => Ok(InputSource::Stdin),
        None => Err(CliError::Usage(format!(
            "no input provided\n  {} use -f for a file, or pipe the stream via stdin",
            colored::Colorize::bold(colored::Colorize::cyan("help:"))
        ))),
    }
}

/// Open the resolved input source for streaming reads.
pub fn open_input(source: &InputSource) -> CliResult<Box<dyn Read>> {
    match source {
        InputSource::File(path) => {
            let file = File::open(path)
                .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?;
            Ok(Box::new(file))
        }
        InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
    }
}
