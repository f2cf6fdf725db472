/// The Big IDEA:
/// After the generator models stopped receiving their credit state as
/// props (the credit store is read directly now), every model invocation
/// still carried three dead attribute lines: the credit count, the
/// loading flag and the refresh callback. Editing ten files by hand is
/// error prone, so this tool walks the fixed list of model files and
/// deletes exactly those three lines wherever they appear, reporting
/// one outcome per file. Files that are already clean are left alone.
use anyhow::Result;
use clap::Parser;

use remove_credits_props::builders::reporter::{ConsoleReporter, OutcomeReporter};
use remove_credits_props::core::engine::StripEngine;

#[derive(Parser)]
#[command(name = "remove-credits-props")]
#[command(about = "Removes the dead credits props from the generator model files")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let engine = StripEngine::with_builtin_targets()?;
    let reporter = ConsoleReporter::new();

    // The engine yields outcomes lazily; the driver only iterates and
    // reports. Per-file failures are outcomes, not errors, so the batch
    // always runs to completion and the process exits successfully.
    for outcome in engine.run() {
        reporter.report(&outcome);
    }
    reporter.finish();

    Ok(())
}
