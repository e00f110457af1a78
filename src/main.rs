use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rowstore::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory single-table record store
#[derive(Parser, Debug)]
#[command(name = "rowstore", version)]
struct Args {
    /// Read commands from a file instead of stdin
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Prompt printed before each command
    #[arg(long, default_value = "db > ", env = "ROWSTORE_PROMPT")]
    prompt: String,

    /// Do not print the prompt (for scripting)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

struct ReplConfig {
    prompt: String,
    quiet: bool,
}

impl From<&Args> for ReplConfig {
    fn from(args: &Args) -> Self {
        Self {
            prompt: args.prompt.clone(),
            quiet: args.quiet,
        }
    }
}

struct InputBuffer<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> InputBuffer<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Returns `false` at end of input. Bytes that are not UTF-8 are
    /// replaced rather than ending the session.
    fn read_input(&mut self) -> io::Result<bool> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(false);
        }
        self.buffer = String::from_utf8_lossy(&raw).trim().to_string();
        Ok(true)
    }
}

// Non-SQL statements like .exit are called “meta-commands”.
enum MetaCommand {
    Exit,
}

impl MetaCommand {
    fn parse(input: &str) -> Option<MetaCommand> {
        match input {
            ".exit" => Some(MetaCommand::Exit),
            _ => None,
        }
    }
}

fn print_prompt(out: &mut impl Write, config: &ReplConfig) -> io::Result<()> {
    if !config.quiet {
        write!(out, "{}", config.prompt)?;
        out.flush()?;
    }
    Ok(())
}

fn run_repl(input: impl BufRead, out: &mut impl Write, config: &ReplConfig) -> Result<()> {
    let mut db = Database::new();
    let mut input_buffer = InputBuffer::new(input);

    loop {
        print_prompt(out, config)?;
        if !input_buffer.read_input().context("failed to read command")? {
            break;
        }

        let line = input_buffer.buffer.as_str();
        if line.is_empty() {
            continue;
        }
        match MetaCommand::parse(line) {
            Some(MetaCommand::Exit) => break,
            None => writeln!(out, "{}", db.submit(line))?,
        }
    }

    info!(rows = db.table().len(), "session closed");
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("rowstore=debug")
        } else {
            EnvFilter::new("rowstore=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ReplConfig::from(&args);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run_repl(BufReader::new(file), &mut out, &config)
        }
        None => run_repl(io::stdin().lock(), &mut out, &config),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
