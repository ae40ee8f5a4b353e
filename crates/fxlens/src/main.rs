use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fxlens::extract::generate_follow_up_questions;
use fxlens::extract::prompts::{PREDEFINED_PROMPTS, STARTER_QUESTIONS};
use fxlens::models::{FxLensConfig, LogFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fxlens",
    about = "Extract sentiment, trade ideas and follow-up questions from forex commentary"
)]
struct Cli {
    /// Path to configuration file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Produce a full analysis report as JSON
    Analyze {
        /// Read input from a file instead of stdin
        #[arg(short, long)]
        input: Option<String>,

        /// Input is an AnalysisResult JSON document rather than plain text
        #[arg(long)]
        news: bool,

        /// Seed for the signal-strength fallback (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Suggest follow-up questions for an assistant answer
    FollowUp {
        /// Read input from a file instead of stdin
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the predefined analysis prompts and starter questions
    Prompts,
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read input: {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => fxlens::load_config(path)
            .with_context(|| format!("Failed to load config: {path}"))?,
        None => FxLensConfig::default(),
    };

    init_tracing(config.logging.format);

    let output = match cli.command {
        Command::Analyze {
            input,
            news,
            seed,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let mut analyzer = fxlens::build_analyzer(&config, seed);
            let report = fxlens::analyze_input(&mut analyzer, &raw, news)
                .context("Failed to decode AnalysisResult JSON")?;
            fxlens::render_json(&report, pretty || config.output.pretty)?
        }
        Command::FollowUp { input } => {
            let raw = read_input(input.as_deref())?;
            fxlens::render_json(&generate_follow_up_questions(&raw), config.output.pretty)?
        }
        Command::Prompts => {
            let catalog = serde_json::json!({
                "prompts": PREDEFINED_PROMPTS,
                "starter_questions": STARTER_QUESTIONS,
            });
            fxlens::render_json(&catalog, config.output.pretty)?
        }
    };

    println!("{output}");

    Ok(())
}
