use clap::{Parser, ValueEnum};
use flowdown_sse::{FramerConfig, DEFAULT_MAX_BUFFER_BYTES, DEFAULT_READ_CHUNK_SIZE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sse-frame",
    about = "Split a Server-Sent Events stream into events",
    version
)]
pub struct Cli {
    /// Read the stream from a file instead of stdin ("-" for stdin)
    #[arg(long = "input", short = 'f')]
    pub input: Option<PathBuf>,

    /// Bytes read per chunk
    #[arg(long, env = "SSE_FRAME_CHUNK_SIZE", default_value_t = DEFAULT_READ_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Maximum size of an unterminated record in bytes (0 = unbounded)
    #[arg(
        long,
        env = "SSE_FRAME_MAX_BUFFER_BYTES",
        default_value_t = DEFAULT_MAX_BUFFER_BYTES
    )]
    pub max_buffer_bytes: usize,

    /// Decode an unterminated final record instead of discarding it
    #[arg(long)]
    pub flush_on_close: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

/// How decoded events are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Canonical `field: value` lines, one blank line after each event
    Text,
}

impl Cli {
    /// Framer settings from the command line. Validation happens when the
    /// reader is built.
    pub fn framer_config(&self) -> FramerConfig {
        let limit = match self.max_buffer_bytes {
            0 => None,
            n => Some(n),
        };
        FramerConfig::new()
            .with_max_buffer_bytes(limit)
            .with_flush_on_close(self.flush_on_close)
            .with_read_chunk_size(self.chunk_size)
    }
}
