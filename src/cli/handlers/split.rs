use crate::cli::{args::SplitArgs, global::GlobalArgs, input::read_message};
use sms_split::{Config, OutputFormat, SplitResult, format_codepoint, split};

use super::{bytes_label, char_label};

pub fn handle(
    args: SplitArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_message(&args.input, global.max_size)?;
    let mode = args.encoding.unwrap_or(config.settings.default_encoding);
    let result = split(&text, mode);

    if args.json || config.settings.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let show_bytes = args.bytes || config.settings.show_bytes;
    print!("{}", render_text(&result, show_bytes, args.hex));
    Ok(())
}

fn render_text(result: &SplitResult, show_bytes: bool, show_hex: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "encoding: {} (requested {})\n",
        result.encoding, result.requested
    ));
    out.push_str(&format!("segments: {}\n", result.segment_count()));
    out.push_str(&format!("characters: {}\n", result.char_count));
    out.push_str(&format!("bytes: {}\n", result.byte_count));

    if !result.unencodable.is_empty() {
        let list: Vec<String> = result
            .unencodable
            .iter()
            .map(|u| {
                format!(
                    "{} ({}) at {}",
                    char_label(&u.character),
                    format_codepoint(u.character.codepoint()),
                    u.index
                )
            })
            .collect();
        out.push_str(&format!("not encodable: {}\n", list.join(", ")));
    }

    let limit = if result.is_concatenated() {
        result.limits.multi
    } else {
        result.limits.single
    };
    let total = result.segment_count();

    for (i, segment) in result.segments.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "segment {}/{}: {} characters, {}/{} bytes\n",
            i + 1,
            total,
            segment.char_count(),
            segment.byte_len,
            limit
        ));
        out.push_str(&format!("  {:?}\n", segment.to_text()));

        if show_bytes {
            for (c, bytes) in segment.iter() {
                out.push_str(&format!(
                    "    {:<8} {:<9} {}\n",
                    char_label(c),
                    format_codepoint(c.codepoint()),
                    bytes_label(bytes)
                ));
            }
        }

        if show_hex {
            out.push_str(&format!("  payload: {}\n", hex::encode(segment.payload())));
        }
    }

    out
}
