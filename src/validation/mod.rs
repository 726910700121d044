/// Structural checks for email addresses and organization domains.
///
/// These are simplified shape checks, not RFC 5322 parsing:
/// - an email is `local@domain` with a non-empty local part and a domain of
///   two or more non-empty dot-separated labels
/// - a domain contains a `.` and is longer than one byte
///
/// # Examples
/// ```
/// use work_friends::validation::syntax::{is_valid_domain, is_valid_email};
///
/// assert!(is_valid_email("user.name@domain.co.uk"));
/// assert!(!is_valid_email("user@domain"));
/// assert!(is_valid_domain("worktionary.com"));
/// ```
pub mod syntax;
