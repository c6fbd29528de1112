use colored::Colorize;
use flowdown_sse::SseError;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Framing failed (buffer overflow, read error).
    Sse(SseError),
    /// Unreadable input.
    Input(String),
    /// Event could not be written.
    Output(String),
    /// Argument / usage errors.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Sse(SseError::BufferOverflow { .. }) => write!(
                f,
                "{} {}\n  {} raise --max-buffer-bytes, or pass 0 to disable the limit",
                "error:".red().bold(),
                self.source_message(),
                "help:".cyan().bold(),
            ),
            CliError::Sse(_) => write!(f, "{} {}", "error:".red().bold(), self.source_message()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Output(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl CliError {
    fn source_message(&self) -> String {
        match self {
            CliError::Sse(e) => e.to_string(),
            CliError::Input(msg) | CliError::Output(msg) | CliError::Usage(msg) => msg.clone(),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<SseError> for CliError {
    fn from(e: SseError) -> Self {
        match e {
            // Only reachable through bad flag values.
            SseError::Config(msg) => CliError::Usage(msg),
            other => CliError::Sse(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(format!("JSON encode error: {e}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(exit_code(&err))
}

fn exit_code(err: &CliError) -> i32 {
    match err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
