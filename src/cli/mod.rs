mod args;
mod global;
mod handlers;
mod input;

use clap::{Parser, Subcommand};
use sms_split::{Config, InputError, Plain, SettingsError, UnknownEncodingError};
use std::path::PathBuf;

use args::{CharsArgs, ConfigAction, EncodeArgs, EncodingArgs, SplitArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "sms-split")]
#[command(version)]
#[command(about = "Split text into SMS segments using the GSM 7-bit alphabet or UCS-2", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a message into SMS segments
    Split(SplitArgs),

    /// Print the encoding a message needs (gsm7 or ucs2)
    Encoding(EncodingArgs),

    /// Show the bytes of every character
    Encode(EncodeArgs),

    /// List the characters and codepoints of a message
    Chars(CharsArgs),

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> i32 {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.global.log_level())
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let use_color = cli.global.use_color();
    match dispatch(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", render_error(e.as_ref(), use_color));
            1
        }
    }
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let explicit = cli
        .global
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).into_owned()));
    let config = Config::load_with_overrides(explicit.as_deref())?;

    match cli.command {
        Commands::Split(args) => handlers::split::handle(args, &cli.global, &config),
        Commands::Encoding(args) => handlers::encoding::handle(args, &cli.global),
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Chars(args) => handlers::chars::handle(args, &cli.global, &config),
        Commands::Config { action } => handlers::config::handle(action, &config),
    }
}

/// Renders an error for stderr, without colour when it is disabled.
fn render_error(e: &(dyn std::error::Error + 'static), use_color: bool) -> String {
    if let Some(e) = e.downcast_ref::<SettingsError>() {
        return if use_color { e.to_string() } else { Plain(e).to_string() };
    }
    if let Some(e) = e.downcast_ref::<InputError>() {
        return if use_color { e.to_string() } else { Plain(e).to_string() };
    }
    if let Some(e) = e.downcast_ref::<UnknownEncodingError>() {
        return if use_color { e.to_string() } else { Plain(e).to_string() };
    }

    if use_color {
        format!("\x1b[1;31merror:\x1b[0m {}", e)
    } else {
        format!("error: {}", e)
    }
}
