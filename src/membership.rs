use crate::error::WorkFriendsError;
use crate::validation::syntax::{email_domain, is_valid_domain, is_valid_email};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use utoipa::ToSchema;

/// Organization domain(s) supplied by the caller.
///
/// Accepts either a single domain or a list; in JSON this is
/// `"worktionary.com"` or `["worktionary.com", "worktionary.ai"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum KnownDomains {
    One(String),
    Many(Vec<String>),
}

impl KnownDomains {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            KnownDomains::One(domain) => vec![domain],
            KnownDomains::Many(domains) => domains,
        }
    }
}

impl From<&str> for KnownDomains {
    fn from(domain: &str) -> Self {
        KnownDomains::One(domain.to_string())
    }
}

impl From<String> for KnownDomains {
    fn from(domain: String) -> Self {
        KnownDomains::One(domain)
    }
}

impl From<Vec<String>> for KnownDomains {
    fn from(domains: Vec<String>) -> Self {
        KnownDomains::Many(domains)
    }
}

impl From<Vec<&str>> for KnownDomains {
    fn from(domains: Vec<&str>) -> Self {
        KnownDomains::Many(domains.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KnownDomains {
    fn from(domains: [&str; N]) -> Self {
        KnownDomains::Many(domains.iter().map(|d| d.to_string()).collect())
    }
}

/// How membership was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchMode {
    /// Inputs were empty; nothing to compare.
    Empty,
    /// Every email had to match one of the caller's domains.
    KnownDomains,
    /// All emails had to share a single domain.
    AutoDetect,
}

/// Outcome of a successful membership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Membership {
    pub work_friends: bool,
    pub mode: MatchMode,
}

/// Decides whether `emails` belong to the same organization.
///
/// Returns `Ok(true)` when every email matches one of the `known_domains`
/// (case-insensitive), or, with no valid known domains, when all emails share
/// exactly one domain. An empty email list is trivially `Ok(true)`.
///
/// # Errors
/// [`WorkFriendsError`] listing every malformed email and known domain, in
/// input order.
///
/// # Examples
/// ```
/// use work_friends::membership::are_work_friends;
///
/// let emails = ["bob@worktionary.com", "advisor@worktionary.ai"];
/// assert_eq!(are_work_friends(&emails, Some(["worktionary.com", "worktionary.ai"].into())), Ok(true));
/// assert_eq!(are_work_friends(&emails, None), Ok(false));
/// assert!(are_work_friends(&["notanemail"], None).is_err());
/// ```
pub fn are_work_friends<S: AsRef<str>>(
    emails: &[S],
    known_domains: Option<KnownDomains>,
) -> Result<bool, WorkFriendsError> {
    classify(emails, known_domains).map(|membership| membership.work_friends)
}

/// Same as [`are_work_friends`], also reporting which mode decided the result.
pub fn classify<S: AsRef<str>>(
    emails: &[S],
    known_domains: Option<KnownDomains>,
) -> Result<Membership, WorkFriendsError> {
    if emails.is_empty() {
        return Ok(Membership {
            work_friends: true,
            mode: MatchMode::Empty,
        });
    }

    let (valid_emails, invalid_emails): (Vec<&str>, Vec<&str>) = emails
        .iter()
        .map(|email| email.as_ref())
        .partition(|email| is_valid_email(email));

    let (valid_domains, invalid_domains): (Vec<String>, Vec<String>) = known_domains
        .map(KnownDomains::into_vec)
        .unwrap_or_default()
        .into_iter()
        .partition(|domain| is_valid_domain(domain));

    debug!(
        valid_emails = valid_emails.len(),
        invalid_emails = invalid_emails.len(),
        valid_domains = valid_domains.len(),
        invalid_domains = invalid_domains.len(),
        "partitioned membership inputs"
    );

    if !invalid_emails.is_empty() || !invalid_domains.is_empty() {
        return Err(WorkFriendsError::invalid_input(
            invalid_emails.into_iter().map(str::to_string).collect(),
            invalid_domains,
        ));
    }

    if valid_emails.is_empty() {
        return Err(WorkFriendsError::no_valid_emails());
    }

    let email_domains: Vec<String> = valid_emails
        .iter()
        .filter_map(|email| email_domain(email))
        .collect();

    if !valid_domains.is_empty() {
        let known: Vec<String> = valid_domains.iter().map(|d| d.to_lowercase()).collect();
        let work_friends = email_domains.iter().all(|domain| known.contains(domain));
        debug!(work_friends, "matched against known domains");
        return Ok(Membership {
            work_friends,
            mode: MatchMode::KnownDomains,
        });
    }

    let distinct: HashSet<&str> = email_domains.iter().map(String::as_str).collect();
    let work_friends = distinct.len() == 1;
    debug!(distinct_domains = distinct.len(), work_friends, "auto-detected domain");
    Ok(Membership {
        work_friends,
        mode: MatchMode::AutoDetect,
    })
}

#[cfg(test)]
#[path = "membership_test.rs"]
mod membership_test;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_domain_emails_are_work_friends() {
        let emails = [
            "bob@worktionary.com",
            "sue@worktionary.com",
            "jim@worktionary.com",
        ];
        assert_eq!(are_work_friends(&emails, None), Ok(true));
    }

    #[test]
    fn different_domains_are_not_work_friends() {
        let emails = ["bob@worktionary.com", "external@gmail.com"];
        assert_eq!(are_work_friends(&emails, None), Ok(false));
    }

    #[test]
    fn empty_list_is_work_friends() {
        let emails: [&str; 0] = [];
        assert_eq!(are_work_friends(&emails, None), Ok(true));
        assert_eq!(
            classify(&emails, Some("not-a-domain".into())).map(|m| m.mode),
            Ok(MatchMode::Empty)
        );
    }

    #[test]
    fn single_email_is_work_friends() {
        assert_eq!(are_work_friends(&["bob@worktionary.com"], None), Ok(true));
    }

    #[test]
    fn all_emails_match_single_known_domain() {
        let emails = ["bob@worktionary.com", "sue@worktionary.com"];
        assert_eq!(are_work_friends(&emails, Some("worktionary.com".into())), Ok(true));
    }

    #[test]
    fn some_emails_miss_known_domain() {
        let emails = ["bob@worktionary.com", "external@gmail.com"];
        assert_eq!(are_work_friends(&emails, Some("worktionary.com".into())), Ok(false));
    }

    #[test]
    fn all_emails_match_one_of_multiple_known_domains() {
        let emails = ["bob@worktionary.com", "advisor@worktionary.ai"];
        assert_eq!(
            are_work_friends(&emails, Some(["worktionary.com", "worktionary.ai"].into())),
            Ok(true)
        );
        assert_eq!(
            are_work_friends(&emails, Some(["worktionary.com"].into())),
            Ok(false)
        );
    }

    #[test]
    fn known_domain_comparison_ignores_case() {
        let emails = ["Bob@WORKTIONARY.COM", "sue@worktionary.com"];
        assert_eq!(are_work_friends(&emails, Some("WORKTIONARY.COM".into())), Ok(true));
    }

    #[test]
    fn auto_detect_ignores_domain_case() {
        let emails = ["Bob@WORKTIONARY.COM", "sue@worktionary.com"];
        assert_eq!(are_work_friends(&emails, None), Ok(true));
    }

    #[test]
    fn invalid_emails_are_reported_in_order() {
        let emails = [
            "notanemail",
            "ok@domain.com",
            "@domain.com",
            "user@",
            "user@domain",
            "user@.com",
            "user@domain.",
            "user@@domain.com",
        ];
        let err = are_work_friends(&emails, None).unwrap_err();
        assert_eq!(
            err.invalid_emails().unwrap(),
            &[
                "notanemail",
                "@domain.com",
                "user@",
                "user@domain",
                "user@.com",
                "user@domain.",
                "user@@domain.com",
            ]
        );
        assert!(err.invalid_domains().is_none());
        assert_eq!(err.message(), "Validation failed - 7 invalid email(s)");
    }

    #[test]
    fn invalid_known_domain_fails_even_with_valid_emails() {
        let err = are_work_friends(
            &["user@domain.com"],
            Some(["valid.com", "invalid", "another.valid.com"].into()),
        )
        .unwrap_err();
        assert_eq!(err.invalid_domains().unwrap(), &["invalid"]);
        assert!(err.invalid_emails().is_none());
        assert_eq!(err.message(), "Validation failed - 1 invalid domain(s)");
    }

    #[test]
    fn both_kinds_of_invalid_input_are_reported() {
        let err = are_work_friends(&["bad", "user@domain.com"], Some("x".into())).unwrap_err();
        assert_eq!(err.invalid_emails().unwrap(), &["bad"]);
        assert_eq!(err.invalid_domains().unwrap(), &["x"]);
        assert_eq!(
            err.message(),
            "Validation failed - 1 invalid email(s) - 1 invalid domain(s)"
        );
    }

    #[test]
    fn owned_strings_are_accepted() {
        let emails = vec![
            "user1@company.com".to_string(),
            "user2@subsidiary.com".to_string(),
        ];
        let known = vec!["company.com".to_string(), "subsidiary.com".to_string()];
        assert_eq!(are_work_friends(&emails, Some(known.into())), Ok(true));
    }
}
