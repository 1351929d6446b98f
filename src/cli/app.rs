//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use arabic_quality::output::OutputMode;

/// arabic-quality - Surface quality checks for Arabic training text
#[derive(Parser, Debug)]
#[command(
    name = "arabic-quality",
    version,
    about = "Surface quality checks for Arabic training text",
    long_about = "Audit short Arabic texts before using them as AI training data.\n\n\
                  Reports Latin script mixing, consecutive repeated words,\n\
                  word count outside bounds, and unusual characters."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a text (argument, file, or stdin)
    Check {
        /// Text to check
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Minimum number of words
        #[arg(long)]
        min_words: Option<usize>,

        /// Maximum number of words
        #[arg(long)]
        max_words: Option<usize>,

        /// Config file (defaults to .arabic-quality.toml, then ~/.arabic-quality/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Run the checks over built-in sample texts
    Demo,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check {
            text,
            file,
            min_words,
            max_words,
            config,
            strict,
        }) => commands::check(
            &commands::CheckArgs {
                text,
                file,
                min_words,
                max_words,
                config,
                strict,
            },
            output_mode,
        ),
        Some(Command::Demo) => commands::demo(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": arabic_quality::VERSION
                    })
                );
            } else {
                println!("arabic-quality v{}", arabic_quality::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": arabic_quality::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("arabic-quality v{}", arabic_quality::VERSION);
                println!("\nRun 'arabic-quality --help' for usage");
                println!("Run 'arabic-quality demo' to see sample reports");
            }
            Ok(())
        },
    }
}
