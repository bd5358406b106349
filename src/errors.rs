use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading settings files.
#[derive(Debug)]
pub enum SettingsError {
    /// The file exists but could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// The file is not valid settings TOML
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

impl SettingsError {
    fn fmt_report(&self, f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write_header(f, use_color, &format!("cannot read settings file {:?}", path))?;
                writeln!(f)?;
                writeln!(f, "  {}", source)?;
                writeln!(f)?;
                write_hint(f, use_color, "check that the file exists and is readable")
            }
            SettingsError::Parse { path, source } => {
                let location = match path {
                    Some(path) => format!("{:?}", path),
                    None => "built-in settings".to_string(),
                };
                write_header(f, use_color, &format!("invalid settings in {}", location))?;
                writeln!(f)?;
                writeln!(f, "  {}", source.to_string().trim_end())?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "valid keys under [settings]: default_encoding, show_bytes, output",
                )
            }
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_report(f, should_use_color())
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

/// Errors raised while reading message input.
#[derive(Debug)]
pub enum InputError {
    /// Input bytes are not UTF-8 text
    InvalidUtf8 { valid_up_to: usize },
    /// Input is larger than the configured maximum
    TooLarge { size: usize, limit: usize },
    /// Input could not be read
    Io { source: std::io::Error },
}

impl InputError {
    fn fmt_report(&self, f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
        match self {
            InputError::InvalidUtf8 { valid_up_to } => {
                write_header(
                    f,
                    use_color,
                    &format!("input is not valid UTF-8 (first bad byte at offset {})", valid_up_to),
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "convert the message to UTF-8 before splitting it")
            }
            InputError::TooLarge { size, limit } => {
                write_header(
                    f,
                    use_color,
                    &format!("input is {} bytes, limit is {} bytes", size, limit),
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "raise the limit with --max-size (0 = unlimited)")
            }
            InputError::Io { source } => {
                write_header(f, use_color, &format!("cannot read input: {}", source))
            }
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_report(f, should_use_color())
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(source: std::io::Error) -> Self {
        InputError::Io { source }
    }
}

/// Error when an encoding name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncodingError {
    pub name: String,
    pub suggestion: Option<String>,
}

/// Names accepted for `EncodingMode`, primary spellings first.
pub const ENCODING_NAMES: &[&str] = &["auto", "gsm7", "ucs2", "gsm", "utf16"];

impl UnknownEncodingError {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let available: Vec<String> = ENCODING_NAMES.iter().map(|s| s.to_string()).collect();
        let suggestion = find_closest_name(&name, &available);
        Self { name, suggestion }
    }

    fn fmt_report(&self, f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
        write_header(f, use_color, &format!("unknown encoding '{}'", self.name))?;
        writeln!(f)?;
        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
            write!(f, "      ")?;
        }
        write!(f, "valid encodings: auto, gsm7, ucs2")
    }
}

impl fmt::Display for UnknownEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_report(f, should_use_color())
    }
}

impl std::error::Error for UnknownEncodingError {}

/// Renders any of the crate's errors without ANSI colour codes.
pub struct Plain<'a, E>(pub &'a E);

impl fmt::Display for Plain<'_, SettingsError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_report(f, false)
    }
}

impl fmt::Display for Plain<'_, InputError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_report(f, false)
    }
}

impl fmt::Display for Plain<'_, UnknownEncodingError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_report(f, false)
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        writeln!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        writeln!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Edit distance between two names, keeping a single row of the table
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Find the closest matching name, if any is within a couple of edits
pub fn find_closest_name(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("gsm7", "gsm7"), 0);
        assert_eq!(levenshtein_distance("gsm", "gsm7"), 1);
        assert_eq!(levenshtein_distance("usc2", "ucs2"), 2);
        assert_eq!(levenshtein_distance("", "auto"), 4);
        assert_eq!(levenshtein_distance("utf8", ""), 4);
        assert_eq!(levenshtein_distance("gsm", "ucs2"), 3);
    }

    #[test]
    fn test_find_closest_name() {
        let names: Vec<String> = ENCODING_NAMES.iter().map(|s| s.to_string()).collect();
        assert_eq!(find_closest_name("gsm8", &names), Some("gsm7".to_string()));
        assert_eq!(find_closest_name("ucs", &names), Some("ucs2".to_string()));
        assert_eq!(find_closest_name("shift_jis", &names), None);
        assert_eq!(find_closest_name("x", &[]), None);
    }

    #[test]
    fn test_unknown_encoding_display() {
        let err = UnknownEncodingError::new("usc2");
        let display = Plain(&err).to_string();

        assert!(display.contains("unknown encoding 'usc2'"));
        assert!(display.contains("did you mean 'ucs2'?"));
        assert!(display.contains("valid encodings: auto, gsm7, ucs2"));
    }

    #[test]
    fn test_input_too_large_display() {
        let err = InputError::TooLarge {
            size: 2048,
            limit: 1024,
        };
        let display = Plain(&err).to_string();

        assert!(display.contains("input is 2048 bytes, limit is 1024 bytes"));
        assert!(display.contains("hint: raise the limit with --max-size"));
        assert!(!display.contains("\x1b["));
    }

    #[test]
    fn test_invalid_utf8_display() {
        let err = InputError::InvalidUtf8 { valid_up_to: 3 };
        assert!(Plain(&err).to_string().contains("offset 3"));
    }
}
