use crate::error::WorkFriendsError;
use crate::membership::{KnownDomains, MatchMode, classify};
use async_graphql::{Enum, Object, SimpleObject};
use tracing::info;

/// How membership was decided
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MembershipMode {
    /// No emails were supplied
    Empty,
    /// Matched against the supplied known domains
    KnownDomains,
    /// All emails had to share one domain
    AutoDetect,
}

impl From<MatchMode> for MembershipMode {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Empty => MembershipMode::Empty,
            MatchMode::KnownDomains => MembershipMode::KnownDomains,
            MatchMode::AutoDetect => MembershipMode::AutoDetect,
        }
    }
}

/// Malformed input reported by a membership check
#[derive(SimpleObject, Clone, Debug)]
pub struct MembershipError {
    /// VALIDATION_FAILED or NO_VALID_EMAILS
    pub code: String,
    pub message: String,
    /// Malformed emails, in input order
    pub invalid_emails: Option<Vec<String>>,
    /// Malformed known domains, in input order
    pub invalid_domains: Option<Vec<String>>,
}

impl From<WorkFriendsError> for MembershipError {
    fn from(err: WorkFriendsError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message().to_string(),
            invalid_emails: err.invalid_emails().map(<[String]>::to_vec),
            invalid_domains: err.invalid_domains().map(<[String]>::to_vec),
        }
    }
}

/// Either a decision or the validation error, never both
#[derive(SimpleObject, Debug)]
pub struct WorkFriendsResult {
    pub work_friends: Option<bool>,
    pub mode: Option<MembershipMode>,
    pub error: Option<MembershipError>,
}

#[derive(Default)]
pub struct MembershipQuery;

#[Object]
impl MembershipQuery {
    /// Decides whether all `emails` belong to one organization, optionally
    /// restricted to `knownDomains`.
    async fn work_friends(
        &self,
        emails: Vec<String>,
        known_domains: Option<Vec<String>>,
    ) -> WorkFriendsResult {
        match classify(&emails, known_domains.map(KnownDomains::Many)) {
            Ok(membership) => {
                info!(emails = emails.len(), work_friends = membership.work_friends, "graphql work-friends");
                WorkFriendsResult {
                    work_friends: Some(membership.work_friends),
                    mode: Some(membership.mode.into()),
                    error: None,
                }
            }
            Err(err) => WorkFriendsResult {
                work_friends: None,
                mode: None,
                error: Some(err.into()),
            },
        }
    }
}
