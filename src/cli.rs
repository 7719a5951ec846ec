//! Command-line interface.

use clap::{ArgAction, Parser, ValueEnum};
use cs_core::mime::ContentTypeOverride;
use std::path::PathBuf;

/// Where the resulting URL goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputTarget {
    /// Copy the public URL back to the clipboard
    #[default]
    Clipboard,
    /// Print `{"public_url": ..., "gcs_uri": ...}` as JSON
    Stdout,
}

/// Upload clipboard content to object storage under a content-derived name.
#[derive(Debug, Parser)]
#[command(name = "clipstash", version, about)]
pub struct Cli {
    /// Where to output the resulting URL
    #[arg(short, long, value_enum, default_value_t = OutputTarget::Clipboard)]
    pub output: OutputTarget,

    /// Upload Markdown files as plain text instead of rendering them to HTML
    #[arg(long)]
    pub raw_markdown: bool,

    /// Content type to store instead of the one derived from the extension
    #[arg(long, value_name = "TYPE/SUBTYPE")]
    pub content_type: Option<ContentTypeOverride>,

    /// dotenv file to read configuration from
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
