//! Policy Simplifier CLI
//!
//! Reads one insurance policy (PDF, or plain text with `--text`), runs the
//! analysis pipeline and writes `simplified_text.txt`, `analysis_report.txt`
//! and `visualization_input.json` into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use policy_engine::{DirectorySink, PipelineConfig, PipelineOutput, PolicyEngine};
use shared_types::{Category, PolicyDocument};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for the policy CLI
#[derive(Parser, Debug)]
#[command(name = "policy-cli")]
#[command(about = "Summarize an insurance policy document")]
struct Args {
    /// Policy document to analyze
    input: PathBuf,

    /// Directory for the generated artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Pipeline configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat the input as UTF-8 text instead of PDF
    #[arg(long)]
    text: bool,

    /// Override the policy name printed in the summary
    #[arg(long)]
    policy_name: Option<String>,

    /// Override the policy type printed in the summary
    #[arg(long)]
    policy_type: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> anyhow::Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(name) = &args.policy_name {
        config.summary.policy_name = name.clone();
    }
    if let Some(kind) = &args.policy_type {
        config.summary.policy_type = kind.clone();
    }
    Ok(config)
}

fn load_document(path: &Path, as_text: bool) -> anyhow::Result<PolicyDocument> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if as_text {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()))?;
        let (pages, text_content) = shared_pdf::split_pages(&text);
        return Ok(PolicyDocument {
            id: filename.clone(),
            filename,
            pages,
            text_content,
            created_at: 0,
        });
    }

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read PDF: {}", path.display()))?;
    shared_pdf::extract_document(&bytes, &filename)
        .with_context(|| format!("Failed to extract text from {}", path.display()))
}

fn run(args: &Args) -> anyhow::Result<PipelineOutput> {
    let engine = PolicyEngine::with_config(load_config(args)?)?;

    info!("Processing {}", args.input.display());
    let document = load_document(&args.input, args.text)?;
    let text = document.raw_text();
    info!(
        "Read {} pages, {} characters of text",
        document.pages,
        text.len()
    );

    let output = engine.process(&text);
    for category in Category::ALL {
        info!(
            "{}: {} matches",
            category.title(),
            output.analysis.count(category)
        );
    }

    let mut sink = DirectorySink::new(&args.output_dir);
    output
        .write_to(&mut sink)
        .with_context(|| format!("Failed to write artifacts to {}", args.output_dir.display()))?;
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let output = run(&args)?;
    info!(
        "Done: {} coverage amounts, artifacts in {}",
        output.analysis.coverage_amounts.len(),
        args.output_dir.display()
    );
    Ok(())
}
