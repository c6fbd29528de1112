mod cli;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::Cli;
use error::{exit_with_error, CliResult};
use flowdown_sse::EventReader;
use std::io::{self, BufWriter, ErrorKind, Write};

fn init_tracing(cli: &Cli) {
    // --quiet → "off"; --verbose → RUST_LOG or "info"; default → "warn" so
    // lossy UTF-8 and buffer-limit warnings still reach stderr.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Errors go to stderr; piping stdout into `jq` keeps them colored.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let source = input::resolve_input(cli.input.as_deref())?;
    let reader = input::open_input(&source)?;
    let events = EventReader::with_config(reader, cli.framer_config())?;

    tracing::debug!(?source, format = ?cli.format, "Framing stream");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut count = 0usize;
    for event in events {
        let rendered = output::format_event(&event?, cli.format)?;
        match out.write_all(rendered.as_bytes()) {
            Ok(()) => count += 1,
            // Downstream of the pipe went away (`sse-frame ... | head`).
            Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }

    match out.flush() {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
        result => result?,
    }

    tracing::info!(events = count, "Stream finished");
    Ok(())
}
