use clap::{Args, Subcommand};
use sms_split::EncodingMode;
use std::path::PathBuf;

/// Where the message comes from
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Message text (reads --file or stdin if not provided)
    pub text: Option<String>,

    /// Read the message from a file
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for splitting a message into segments
#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Encoding: auto, gsm7 or ucs2 (default from settings)
    #[arg(short = 'e', long)]
    pub encoding: Option<EncodingMode>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show each character's bytes
    #[arg(short = 'b', long)]
    pub bytes: bool,

    /// Show each segment's payload as hex
    #[arg(long)]
    pub hex: bool,
}

/// Arguments for showing the encoding a message would use
#[derive(Args, Debug)]
pub struct EncodingArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for encoding a message character by character
#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Encoding: auto, gsm7 or ucs2 (default from settings)
    #[arg(short = 'e', long)]
    pub encoding: Option<EncodingMode>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for listing a message's characters
#[derive(Args, Debug)]
pub struct CharsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective settings and where they came from
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the settings files that are checked, in priority order
    Paths,
}
