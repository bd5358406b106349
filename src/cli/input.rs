use crate::cli::args::InputArgs;
use sms_split::InputError;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Reads the message from the positional text, `--file`, or stdin.
///
/// Text read from a file or stdin loses one trailing newline, which is
/// usually an artifact of `echo` or an editor rather than part of the
/// message. Positional text is taken verbatim.
pub fn read_message(args: &InputArgs, max_size: usize) -> Result<String, InputError> {
    if let Some(text) = &args.text {
        check_size(text.len(), max_size)?;
        return Ok(text.clone());
    }

    let data = if let Some(file_path) = &args.file {
        let path = PathBuf::from(shellexpand::tilde(&file_path.to_string_lossy()).into_owned());
        let size = fs::metadata(&path)?.len() as usize;
        check_size(size, max_size)?;
        log::debug!("reading message from {:?}", path);
        fs::read(&path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        check_size(buffer.len(), max_size)?;
        buffer
    };

    let text = String::from_utf8(data).map_err(|e| InputError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    Ok(strip_trailing_newline(text))
}

fn check_size(size: usize, max_size: usize) -> Result<(), InputError> {
    if max_size > 0 && size > max_size {
        return Err(InputError::TooLarge {
            size,
            limit: max_size,
        });
    }
    Ok(())
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("hi\n".to_string()), "hi");
        assert_eq!(strip_trailing_newline("hi\r\n".to_string()), "hi");
        assert_eq!(strip_trailing_newline("hi\n\n".to_string()), "hi\n");
        assert_eq!(strip_trailing_newline("hi".to_string()), "hi");
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(10, 0).is_ok());
        assert!(check_size(10, 10).is_ok());
        assert!(matches!(
            check_size(11, 10),
            Err(InputError::TooLarge { size: 11, limit: 10 })
        ));
    }

    #[test]
    fn test_positional_text_verbatim() {
        let args = InputArgs {
            text: Some("hello\n".to_string()),
            file: None,
        };
        assert_eq!(read_message(&args, 0).unwrap(), "hello\n");
    }
}
