use crate::cli::{args::EncodeArgs, global::GlobalArgs, input::read_message};
use sms_split::{Config, EncodedBytes, LogicalCharacter, OutputFormat, decode, format_codepoint};
use serde::Serialize;

use super::{bytes_label, char_label};

#[derive(Serialize)]
struct EncodedChar<'a> {
    character: &'a LogicalCharacter,
    bytes: &'a EncodedBytes,
}

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_message(&args.input, global.max_size)?;
    let mode = args.encoding.unwrap_or(config.settings.default_encoding);

    let chars = decode(&text);
    let encoding = mode.resolve(&chars);
    let encoded: Vec<EncodedBytes> = chars.iter().map(|c| encoding.encode_char(c)).collect();

    if args.json || config.settings.output == OutputFormat::Json {
        let characters: Vec<EncodedChar> = chars
            .iter()
            .zip(&encoded)
            .map(|(character, bytes)| EncodedChar { character, bytes })
            .collect();
        let output = serde_json::json!({
            "encoding": encoding,
            "characters": characters,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("encoding: {}", encoding);
    for (c, bytes) in chars.iter().zip(&encoded) {
        println!(
            "{:<8} {:<9} {}",
            char_label(c),
            format_codepoint(c.codepoint()),
            bytes_label(bytes)
        );
    }

    Ok(())
}
