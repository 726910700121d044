use serde::Serialize;
use thiserror::Error;

/// Raised when the inputs to a membership check are malformed.
///
/// Carries the offending emails and/or known domains in the order they were
/// supplied. A list is only attached when it is non-empty, so callers can
/// branch on `invalid_emails()` / `invalid_domains()` directly.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct WorkFriendsError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_domains: Option<Vec<String>>,
}

impl WorkFriendsError {
    /// Builds the error for rejected emails and/or known domains.
    ///
    /// Message format: `Validation failed - N invalid email(s) - M invalid domain(s)`,
    /// with each clause present only when its list is non-empty.
    pub fn invalid_input(invalid_emails: Vec<String>, invalid_domains: Vec<String>) -> Self {
        let mut message = String::from("Validation failed");
        if !invalid_emails.is_empty() {
            message.push_str(&format!(" - {} invalid email(s)", invalid_emails.len()));
        }
        if !invalid_domains.is_empty() {
            message.push_str(&format!(" - {} invalid domain(s)", invalid_domains.len()));
        }

        Self {
            message,
            invalid_emails: Some(invalid_emails).filter(|list| !list.is_empty()),
            invalid_domains: Some(invalid_domains).filter(|list| !list.is_empty()),
        }
    }

    pub fn no_valid_emails() -> Self {
        Self {
            message: "No valid emails provided".to_string(),
            invalid_emails: None,
            invalid_domains: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn invalid_emails(&self) -> Option<&[String]> {
        self.invalid_emails.as_deref()
    }

    pub fn invalid_domains(&self) -> Option<&[String]> {
        self.invalid_domains.as_deref()
    }

    /// Machine-readable code used by the REST and GraphQL layers.
    pub fn code(&self) -> &'static str {
        if self.invalid_emails.is_none() && self.invalid_domains.is_none() {
            "NO_VALID_EMAILS"
        } else {
            "VALIDATION_FAILED"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_counts_emails_only() {
        let err = WorkFriendsError::invalid_input(vec!["a".into(), "b".into()], vec![]);
        assert_eq!(err.message(), "Validation failed - 2 invalid email(s)");
        assert_eq!(err.invalid_emails(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(err.invalid_domains(), None);
        assert_eq!(err.code(), "VALIDATION_FAILED");
    }

    #[test]
    fn message_counts_domains_only() {
        let err = WorkFriendsError::invalid_input(vec![], vec!["invalid".into()]);
        assert_eq!(err.message(), "Validation failed - 1 invalid domain(s)");
        assert_eq!(err.invalid_emails(), None);
        assert_eq!(err.invalid_domains(), Some(&["invalid".to_string()][..]));
    }

    #[test]
    fn message_counts_both() {
        let err = WorkFriendsError::invalid_input(vec!["x".into()], vec!["y".into(), "z".into()]);
        assert_eq!(
            err.to_string(),
            "Validation failed - 1 invalid email(s) - 2 invalid domain(s)"
        );
    }

    #[test]
    fn no_valid_emails_carries_no_lists() {
        let err = WorkFriendsError::no_valid_emails();
        assert_eq!(err.to_string(), "No valid emails provided");
        assert!(err.invalid_emails().is_none());
        assert!(err.invalid_domains().is_none());
        assert_eq!(err.code(), "NO_VALID_EMAILS");
    }

    #[test]
    fn serialization_omits_missing_lists() {
        let err = WorkFriendsError::invalid_input(vec!["bad".into()], vec![]);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["message"], "Validation failed - 1 invalid email(s)");
        assert_eq!(json["invalid_emails"][0], "bad");
        assert!(json.get("invalid_domains").is_none());
    }
}
