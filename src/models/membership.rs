use crate::error::WorkFriendsError;
use crate::membership::KnownDomains;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct WorkFriendsRequest {
    pub emails: Vec<String>,
    /// A single domain or a list of domains.
    #[serde(default)]
    pub known_domains: Option<KnownDomains>,
}

/// Error envelope shared by the REST endpoints.
///
/// `invalid_emails` / `invalid_domains` are omitted unless the request carried
/// malformed entries of that kind.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_emails: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_domains: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            invalid_emails: None,
            invalid_domains: None,
        }
    }
}

impl From<&WorkFriendsError> for ErrorResponse {
    fn from(err: &WorkFriendsError) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.message().to_string(),
            invalid_emails: err.invalid_emails().map(<[String]>::to_vec),
            invalid_domains: err.invalid_domains().map(<[String]>::to_vec),
        }
    }
}
