use crate::cli::{args::CharsArgs, global::GlobalArgs, input::read_message};
use sms_split::{Config, OutputFormat, alphabet, decode, format_codepoint};

use super::char_label;

pub fn handle(
    args: CharsArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_message(&args.input, global.max_size)?;
    let chars = decode(&text);

    if args.json || config.settings.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&chars)?);
        return Ok(());
    }

    for (i, c) in chars.iter().enumerate() {
        let units: Vec<String> = c.code_units().iter().map(|u| format!("{:04x}", u)).collect();
        let gsm = if alphabet::contains(c.codepoint()) {
            "gsm"
        } else {
            "-"
        };
        println!(
            "{:>4}  {:<8} {:<9} {:<10} {}",
            i,
            char_label(c),
            format_codepoint(c.codepoint()),
            units.join(" "),
            gsm
        );
    }

    Ok(())
}
