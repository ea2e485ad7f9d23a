use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dbfix_patch::boilerplate::TARGET_FILES;
use dbfix_patch::{PatchSummary, patch_file};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "dbfix",
    version,
    about = "Splices database connection setup and teardown into the API route handlers."
)]
struct Cli {
    /// Directory the relative handler paths are resolved against (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,
}

fn main() -> ExitCode {
    // Stdout carries only the per-file report lines; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let summary = run(&cli.repo_root);
    info!(fixed = summary.fixed, failed = summary.failed, "run complete");

    // Per-file failures are reported on stdout and never fail the run.
    ExitCode::from(0)
}

/// Patch every target in order, one report line per file. A failure on one
/// file does not stop the remaining files.
fn run(repo_root: &Utf8Path) -> PatchSummary {
    let mut summary = PatchSummary::default();
    for rel in TARGET_FILES {
        match patch_file(repo_root, Utf8Path::new(rel)) {
            Ok(()) => {
                println!("Fixed {rel}");
                summary.fixed += 1;
            }
            Err(e) => {
                println!("Error processing {rel}: {e}");
                summary.failed += 1;
            }
        }
    }
    summary
}
