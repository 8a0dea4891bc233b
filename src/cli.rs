use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "linkfmt")]
#[command(about = "Link and comment normalization for story rows", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the nearest linkfmt.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the registrable domain of a link
    Domain {
        /// Absolute URL
        link: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tag a link with a referrer for known publishing platforms
    Referrer {
        /// Absolute URL
        link: String,

        /// Referrer identity, e.g. a wallet address
        #[arg(long)]
        identity: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Shorten a comment for a preview
    Truncate {
        /// Comment text (read from stdin when omitted)
        text: Option<String>,

        /// Maximum preview length in characters
        #[arg(long)]
        max_length: Option<usize>,

        /// Maximum length of a single word
        #[arg(long)]
        word_max_length: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how long ago an instant was, abbreviated
    Ago {
        /// Unix seconds or an RFC 3339 timestamp
        instant: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build story rows from a JSON array of stories
    Rows {
        /// Stories file (read from stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
