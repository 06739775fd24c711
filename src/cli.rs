// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use crate::config::consts::{DEFAULT_DOCUMENT_FILE, DEFAULT_LOG_FILE, DEFAULT_WORKBOOK_FILE};
use crate::config::options::RunOptions;
use crate::progress::Progress;
use crate::runner::RunSummary;
use crate::section::Category;

/// Update index.html sections from a spreadsheet (one worksheet per section).
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "index_updater", version)]
pub struct Args {
    /// Spreadsheet to read [default: ./library_update_this_file.xlsx]
    pub workbook: Option<PathBuf>,

    /// HTML page to patch in place [default: ./index.html]
    pub document: Option<PathBuf>,

    /// Report what would change without writing the page
    #[arg(long)]
    pub dry_run: bool,

    /// Regex for the author name to emphasise (case-insensitive)
    #[arg(long, value_name = "REGEX")]
    pub highlight: Option<String>,

    /// Append a run log (`--log` alone uses ./index_updater.log; `--log=FILE` picks the file)
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_LOG_FILE
    )]
    pub log: Option<PathBuf>,

    /// Echo log lines to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        RunOptions {
            workbook: absolute(self.workbook.as_deref().unwrap_or(Path::new(DEFAULT_WORKBOOK_FILE))),
            document: absolute(self.document.as_deref().unwrap_or(Path::new(DEFAULT_DOCUMENT_FILE))),
            dry_run: self.dry_run,
            highlight: self.highlight.clone(),
        }
    }
}

fn absolute(p: &Path) -> PathBuf {
    std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf())
}

/// Prints status and per-sheet lines when verbose, skipped sections always.
struct ConsoleProgress {
    verbose: bool,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        if self.verbose {
            println!("{msg}");
        }
    }
    fn sheet_done(&mut self, title: &str, category: Category) {
        if self.verbose {
            println!("  {title} → {category:?}");
        }
    }
    fn section_skipped(&mut self, section: &str) {
        eprintln!("Warning: section \"{section}\" not found in page; left unchanged");
    }
}

pub fn run() -> color_eyre::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> color_eyre::Result<()> {
    let started = Instant::now();
    if let Some(path) = &args.log {
        crate::log::init(path);
    }
    crate::log::mirror_stderr(args.verbose);

    let opts = args.to_options();
    let mut progress = ConsoleProgress { verbose: args.verbose };
    let summary = crate::runner::run(&opts, Some(&mut progress))
        .inspect_err(|e| loge!("Run failed: {e}"))
        .wrap_err_with(|| format!("updating {}", opts.document.display()))?;

    logf!(
        "Run: sheets={} applied={} skipped={}",
        summary.sheets_seen,
        summary.applied.len(),
        summary.skipped.len()
    );
    println!("{}", outcome_line(&opts, &summary));
    println!("Execution time: {:.2} seconds", started.elapsed().as_secs_f64());
    Ok(())
}

/// One line saying what happened to the page.
fn outcome_line(opts: &RunOptions, summary: &RunSummary) -> String {
    let (doc, book) = (opts.document.display(), opts.workbook.display());
    if summary.written.is_some() {
        format!("Updated {doc} from {book}")
    } else if opts.dry_run && summary.changed {
        format!("Dry run: {doc} would be updated from {book} (not written)")
    } else if opts.dry_run {
        format!("Dry run: {doc} already matches {book}")
    } else {
        format!("{doc} already up to date with {book}")
    }
}
