use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use zcode_reconcile::config::{load_settings, ScanSettings, SettingsError};
use zcode_reconcile::kernel::scan::ScanSession;
use zcode_reconcile::kernel::ReconcileBatch;
use zcode_reconcile::models::{BufferSnapshot, Region, TextSource};

mod logging;

const USAGE: &str = "usage: zcode-reconcile [--settings <path>] <command>

commands:
  select <file> <offset>   double-click selection at a char offset
  hint <file> <offset>     parameter hint anchor for an invocation
  block <file> <offset>    innermost {...} block around an offset
  replay <edits.jsonl>     coalesce a log of edits, one region per line";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Select { file: PathBuf, offset: usize },
    Hint { file: PathBuf, offset: usize },
    Block { file: PathBuf, offset: usize },
    Replay { edits: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cli {
    settings: Option<PathBuf>,
    command: Command,
}

fn parse_args<I>(args: I) -> Result<Cli, String>
where
    I: IntoIterator<Item = String>,
{
    let mut settings = None;
    let mut rest = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--settings" {
            let path = args.next().ok_or("--settings needs a path")?;
            settings = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--settings=") {
            settings = Some(PathBuf::from(path));
        } else {
            rest.push(arg);
        }
    }

    let parse_offset = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|_| format!("invalid offset: {value}"))
    };

    let words: Vec<&str> = rest.iter().map(String::as_str).collect();
    let command = match words.as_slice() {
        ["select", file, offset] => Command::Select {
            file: PathBuf::from(*file),
            offset: parse_offset(*offset)?,
        },
        ["hint", file, offset] => Command::Hint {
            file: PathBuf::from(*file),
            offset: parse_offset(*offset)?,
        },
        ["block", file, offset] => Command::Block {
            file: PathBuf::from(*file),
            offset: parse_offset(*offset)?,
        },
        ["replay", edits] => Command::Replay {
            edits: PathBuf::from(*edits),
        },
        [] => return Err("missing command".to_string()),
        [name, ..] => return Err(format!("unknown command or wrong arguments: {name}")),
    };

    Ok(Cli { settings, command })
}

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Settings(SettingsError),
    Replay { line: usize, source: serde_json::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "{err}"),
            CliError::Settings(err) => write!(f, "{err}"),
            CliError::Replay { line, source } => write!(f, "edit log line {line}: {source}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Settings(err)
    }
}

fn open_session(file: &Path, settings: &ScanSettings) -> Result<ScanSession, CliError> {
    let text = std::fs::read_to_string(file)?;
    Ok(ScanSession::new(BufferSnapshot::from_text(&text), settings))
}

/// Feeds every edit through one batch and writes each flushed region.
fn replay<R: BufRead, W: Write>(edits: R, out: &mut W) -> Result<usize, CliError> {
    let mut batch = ReconcileBatch::new();
    let mut flushed = 0usize;
    for (idx, line) in edits.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let edit: Region = serde_json::from_str(&line).map_err(|source| CliError::Replay {
            line: idx + 1,
            source,
        })?;
        if let Some(region) = batch.record_region(edit) {
            writeln!(out, "flush {region}")?;
            flushed += 1;
        }
    }
    if let Some(region) = batch.take() {
        writeln!(out, "flush {region}")?;
        flushed += 1;
    }
    Ok(flushed)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => ScanSettings::default(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Select { file, offset } => {
            let session = open_session(&file, &settings)?;
            let span = session.select_at(offset);
            let text = session
                .snapshot()
                .slice(span.offset, span.len)
                .unwrap_or_default();
            writeln!(out, "{} {} {:?}", span.offset, span.len, text)?;
        }
        Command::Hint { file, offset } => {
            let session = open_session(&file, &settings)?;
            match session.call_context_anchor(offset) {
                Some(anchor) => writeln!(out, "{anchor}")?,
                None => writeln!(out, "none")?,
            }
        }
        Command::Block { file, offset } => {
            let session = open_session(&file, &settings)?;
            match session.surrounding_block(offset) {
                Some(span) => writeln!(out, "{} {}", span.offset, span.len)?,
                None => writeln!(out, "none")?,
            }
        }
        Command::Replay { edits } => {
            let reader = io::BufReader::new(std::fs::File::open(&edits)?);
            let flushed = replay(reader, &mut out)?;
            tracing::info!(path = %edits.display(), flushed, "edit log replayed");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let _logging = logging::init();

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
