//! Mapping failures to exit codes.

use jokebox_core::JokeboxError;

use crate::constants::exit_codes;

/// Exit code for an error bubbling out of a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<JokeboxError>() {
        Some(JokeboxError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(JokeboxError::InvalidInput(_)) | Some(JokeboxError::Validation(_)) => {
            exit_codes::INVALID_INPUT
        }
        Some(JokeboxError::Network(_)) => exit_codes::NETWORK,
        _ => 1,
    }
}

/// Follow-up suggestion printed under the error message, if any.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<JokeboxError>()? {
        JokeboxError::NotFound(_) => {
            Some("Run `jokebox random` or `jokebox search <TERM>` first, then rate by ID.")
        }
        JokeboxError::Network(_) => Some("Check your connection or set JOKEBOX_API_URL."),
        JokeboxError::ClipboardUnavailable(_) => Some("Try `--target whatsapp` or `--target link`."),
        _ => None,
    }
}

pub fn exit_with_hint(code: i32, message: &str, hint: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("Hint: {}", hint);
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_error_kind() {
        let not_found = anyhow::Error::new(JokeboxError::NotFound("x".into()));
        let invalid = anyhow::Error::new(JokeboxError::Validation("x".into()));
        let network = anyhow::Error::new(JokeboxError::Network("x".into()));
        let other = anyhow::anyhow!("boom");

        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);
        assert_eq!(exit_code_for(&network), exit_codes::NETWORK);
        assert_eq!(exit_code_for(&other), 1);
    }

    #[test]
    fn test_hint_only_for_known_kinds() {
        let clipboard = anyhow::Error::new(JokeboxError::ClipboardUnavailable("x".into()));
        assert!(hint_for(&clipboard).is_some_and(|h| h.contains("whatsapp")));
        assert!(hint_for(&anyhow::anyhow!("boom")).is_none());
    }
}
