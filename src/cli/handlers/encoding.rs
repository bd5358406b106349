use crate::cli::{args::EncodingArgs, global::GlobalArgs, input::read_message};
use sms_split::select_encoding;

pub fn handle(args: EncodingArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_message(&args.input, global.max_size)?;
    println!("{}", select_encoding(&text));
    Ok(())
}
