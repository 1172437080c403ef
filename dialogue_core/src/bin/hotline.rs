use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use dialogue_core::cli::{HotlineCli, OutputFormat};
use dialogue_core::{run_dialogues, Config, JsonTranscript, TextTranscript, TranscriptWriter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = HotlineCli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout().lock();
    let mut transcript: Box<dyn TranscriptWriter> = match cli.format {
        OutputFormat::Text => Box::new(TextTranscript::new(stdout)),
        OutputFormat::Json => Box::new(JsonTranscript::new(stdout)),
    };

    run_dialogues(&config, input, transcript.as_mut()).context("dialogue run aborted")?;
    Ok(())
}
