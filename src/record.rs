use serde::Deserialize;
use std::fmt;

/// A single submitted log record. Both fields are optional on the wire and
/// default to empty strings; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_level_and_message() {
        let record = LogRecord {
            level: "ERROR".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(record.to_string(), "[ERROR] disk full");
    }

    #[test]
    fn empty_fields_still_format() {
        let record = LogRecord::default();
        assert_eq!(record.to_string(), "[] ");
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let record: LogRecord = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(record.level, "");
        assert_eq!(record.message, "hi");
        assert_eq!(record.to_string(), "[] hi");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record: LogRecord =
            serde_json::from_str(r#"{"level":"INFO","message":"ok","extra":42}"#).unwrap();
        assert_eq!(record.level, "INFO");
        assert_eq!(record.message, "ok");
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(serde_json::from_str::<LogRecord>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<LogRecord>("\"hello\"").is_err());
        assert!(serde_json::from_str::<LogRecord>("not json").is_err());
    }

    #[test]
    fn level_is_not_validated() {
        let record: LogRecord =
            serde_json::from_str(r#"{"level":"whatever","message":"m"}"#).unwrap();
        assert_eq!(record.to_string(), "[whatever] m");
    }
}
