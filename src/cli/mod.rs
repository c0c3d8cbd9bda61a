// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, asks for anything missing, then hands a BuildConfig to
// Layer 2. No glossary logic lives here.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod prompt;

use anyhow::Result;
use clap::Parser;
use std::io;

use commands::BuildArgs;
use crate::application::build_use_case::{BuildSummary, BuildUseCase};
use crate::infra::{config_file::save_config, line_io::LineReader};

/// Command line for the glossary generator.
#[derive(Parser, Debug)]
#[command(
    name = "glossary",
    version,
    about = "Turn a term/definition text file into cross-linked HTML glossary pages."
)]
pub struct Cli {
    #[command(flatten)]
    pub build: BuildArgs,
}

impl Cli {
    /// Resolve the build config, run the build, report the result.
    pub fn run(self) -> Result<()> {
        let save_to = self.build.save_config.clone();

        let mut stdin  = LineReader::new(io::stdin().lock(), "<stdin>");
        let mut stdout = io::stdout();
        let cfg = self
            .build
            .into_config(|question| prompt::ask(question, &mut stdin, &mut stdout))?;

        if let Some(path) = save_to {
            save_config(path, &cfg)?;
        }

        let use_case = BuildUseCase::new(cfg);
        let summary  = use_case.execute()?;
        report(&summary, use_case.config().dry_run);
        Ok(())
    }
}

fn report(summary: &BuildSummary, dry_run: bool) {
    let verb = if dry_run { "Would write" } else { "Wrote" };
    println!(
        "{} {} term pages and the index ({} entries, {} links).",
        verb, summary.pages, summary.entries, summary.links
    );
    if summary.truncated > 0 {
        println!("{} term(s) had no definition.", summary.truncated);
    }
    if summary.duplicates > 0 {
        println!("{} term(s) were defined more than once; the last definition was kept.", summary.duplicates);
    }
}
