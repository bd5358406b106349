use crate::cli::args::ConfigAction;
use sms_split::Config;

pub fn handle(action: ConfigAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => handle_show(json, config),
        ConfigAction::Paths => handle_paths(),
    }
}

fn handle_show(json: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    let settings = &config.settings;
    println!("default_encoding = {}", settings.default_encoding);
    println!("show_bytes = {}", settings.show_bytes);
    println!(
        "output = {}",
        match settings.output {
            sms_split::OutputFormat::Text => "text",
            sms_split::OutputFormat::Json => "json",
        }
    );
    println!();
    println!("Loaded from: {}", config.sources.join(", "));

    Ok(())
}

fn handle_paths() -> Result<(), Box<dyn std::error::Error>> {
    for path in Config::override_paths() {
        let status = if path.exists() { "found" } else { "missing" };
        println!("{} ({})", path.display(), status);
    }
    Ok(())
}
