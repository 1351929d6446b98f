//! Check a single text

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

use arabic_quality::config;
use arabic_quality::core::models::CheckOptions;
use arabic_quality::core::services::run_quality_check_with;
use arabic_quality::output::{OutputMode, ReportOutput};

/// Arguments of the `check` command
#[derive(Debug, Default)]
pub struct CheckArgs {
    /// Text given on the command line
    pub text: Option<String>,
    /// File to read the text from
    pub file: Option<PathBuf>,
    /// Override for the minimum word count
    pub min_words: Option<usize>,
    /// Override for the maximum word count
    pub max_words: Option<usize>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Fail when any issue is found
    pub strict: bool,
}

/// Run every check over one text and print the report
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<()> {
    let text = read_input(args)?;
    let options = resolve_options(args)?;

    let report = run_quality_check_with(&text, &options);
    ReportOutput::new(&text, &report).render(mode);

    if args.strict && !report.passed() {
        anyhow::bail!("{} issue(s) detected", report.issues_found());
    }

    Ok(())
}

fn read_input(args: &CheckArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

fn resolve_options(args: &CheckArgs) -> anyhow::Result<CheckOptions> {
    let cwd = std::env::current_dir()?;
    let mut options = config::discover(args.config.as_deref(), &cwd)?;
    options.length = options.length.with_overrides(args.min_words, args.max_words)?;
    log::debug!(
        "length bounds: {}..={}",
        options.length.min_words,
        options.length.max_words
    );
    Ok(options)
}
