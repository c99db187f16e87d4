//! # kwic
//!
//! KWIC listing binary. Reads lines from a file or stdin into a source
//! storage, lets a [`CircularShifter`] maintain the shift index, optionally
//! deletes source lines, and prints the index.

#![deny(unsafe_code)]

mod listing;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use kwic_core::logging;
use kwic_settings::{KwicSettings, load_settings, load_settings_from_path};
use kwic_shift::{CircularShifter, audit};
use kwic_storage::{LineStorage, input};
use tracing::{info, warn};

/// Keyword-in-context index of the input lines.
#[derive(Parser, Debug)]
#[command(name = "kwic", about = "Print every circular shift of the input lines")]
struct Cli {
    /// Input file (defaults to stdin).
    input: Option<PathBuf>,

    /// Settings file (defaults to `~/.kwic/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Delete the source line at this index after loading (repeatable).
    /// Indices refer to the original numbering.
    #[arg(long = "delete", value_name = "INDEX")]
    deletes: Vec<usize>,

    /// Check the shift index against the source and fail if they disagree.
    #[arg(long)]
    verify: bool,

    /// Print shifts in generation order instead of sorting them.
    #[arg(long)]
    unsorted: bool,

    /// Log filter directive (overrides settings; `RUST_LOG` wins over both).
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn resolve_settings(&self) -> Result<KwicSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings_from_path(path)
                .with_context(|| format!("Failed to load settings: {}", path.display()))?,
            None => load_settings().context("Failed to load settings")?,
        };
        if let Some(level) = &self.log_level {
            settings.logging.level.clone_from(level);
        }
        if self.unsorted {
            settings.output.sort = false;
        }
        Ok(settings)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("kwic: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let settings = cli.resolve_settings()?;
    logging::init_subscriber(&settings.logging.level);

    let shifts = LineStorage::new().into_shared();
    let mut source = LineStorage::new();
    CircularShifter::subscribe_to(&mut source, shifts.clone());

    let added = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            input::read_into(BufReader::new(file), &mut source)?
        }
        None => input::read_into(io::stdin().lock(), &mut source)?,
    };
    info!(lines = added, shifts = shifts.read().line_count(), "input loaded");

    // Highest index first so earlier deletes don't renumber later ones.
    let mut deletes = cli.deletes.clone();
    deletes.sort_unstable();
    deletes.dedup();
    for index in deletes.into_iter().rev() {
        let removed = source
            .delete_line(index)
            .with_context(|| format!("Failed to delete source line {index}"))?;
        info!(index, line = %removed, "deleted source line");
    }

    if cli.verify {
        let report = audit(&source, &shifts.read());
        if !report.is_consistent() {
            warn!(
                missing = report.missing_count(),
                surplus = report.surplus_count(),
                "shift index inconsistent"
            );
            eprintln!(
                "kwic: shift index inconsistent ({} missing, {} surplus)",
                report.missing_count(),
                report.surplus_count()
            );
            return Ok(ExitCode::FAILURE);
        }
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for row in listing::render(&shifts.read(), &settings.output) {
        writeln!(out, "{row}")?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
