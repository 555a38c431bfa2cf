// ---------------------------------------------------------------------------
// SettingsError: failures while reading the console settings file
// ---------------------------------------------------------------------------

use std::fmt;

#[derive(Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    Io(std::io::Error),
    /// The file is not valid settings JSON.
    Parse(String),
    /// The file parsed but a value is out of range.
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {e}"),
            SettingsError::Parse(msg) => write!(f, "Parse error: {msg}"),
            SettingsError::Invalid(msg) => write!(f, "Invalid setting: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_io() {
        let err = SettingsError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }

    #[test]
    fn test_display_invalid() {
        let err = SettingsError::Invalid("clock_interval_secs must be positive".to_string());
        let msg = format!("{err}");
        assert!(msg.starts_with("Invalid setting"), "got: {msg}");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_source_only_for_io() {
        let io = SettingsError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert!(std::error::Error::source(&io).is_some());
        let parse = SettingsError::Parse("x".into());
        assert!(std::error::Error::source(&parse).is_none());
    }
}
