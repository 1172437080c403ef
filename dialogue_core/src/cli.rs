use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The classic transcript.
    Text,
    /// One JSON object per dialogue.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "hotline")]
#[command(bin_name = "hotline")]
#[command(about = "Answers questions about short dialogues", long_about = None)]
pub struct HotlineCli {
    /// Dialogue script to read. Reads standard input when omitted.
    pub input: Option<PathBuf>,

    /// TOML file overriding the lexicon or the fixed answers.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl HotlineCli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
