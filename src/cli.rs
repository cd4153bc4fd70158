//! Command-line interface definition using clap.

use clap::Parser;

use crate::config::OutputConfig;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "clean_chat.json";

/// Strip a Telegram chat export down to messages, replies and reactions.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatclean")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatclean result.json
    chatclean result.json clean.json
    chatclean result.json clean.min.json --compact")]
pub struct Args {
    /// Path to the Telegram export (result.json)
    pub input: String,

    /// Path to output file
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    pub compact: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the output configuration from the flags.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new().with_pretty(!self.compact)
    }
}
