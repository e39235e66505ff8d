use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clinote", about = "Clinical note structuring and validation")]
struct Cli {
    /// Read the visit note from a file instead of the embedded sample.
    #[arg(long)]
    note: Option<PathBuf>,

    /// Write tracing diagnostics to stderr (RUST_LOG controls the filter).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = clinote_core::Config::load()?;

    let note = match &cli.note {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read note from {}", path.display()))?,
        None => clinote::SAMPLE_NOTE.to_string(),
    };

    let extractor = clinote::build_extractor(&config)?;
    let report = clinote::run(&config, extractor.as_ref(), &note)?;

    println!("Status: {}", report.result.status());
    println!("Saved structured output to: {}", report.output_path.display());
    if !report.result.is_valid() {
        println!("See {} for details.", report.error_log_path.display());
    }

    Ok(())
}
