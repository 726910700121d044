/// Checks that an email address has the shape `local@domain`.
///
/// The address is valid when:
/// - splitting on `@` gives exactly two segments, both non-empty
/// - the domain splits on `.` into at least two labels, none of them empty
///
/// Case is left alone; only domain comparison in the classifier folds case.
///
/// # Examples
/// ```
/// use work_friends::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user+tag@domain.com"));
/// assert!(!is_valid_email("user@@domain.com"));
/// assert!(!is_valid_email("user@domain."));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local_part), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local_part.is_empty() || domain.is_empty() {
        return false;
    }

    is_valid_email_domain(domain)
}

/// Checks that a known organization domain is usable for matching.
///
/// Looser than the domain check applied inside [`is_valid_email`]: any string
/// longer than one byte that contains a `.` passes, so `".com"` and `"a."`
/// are accepted here while `user@.com` is rejected as an email.
///
/// # Examples
/// ```
/// use work_friends::validation::syntax::is_valid_domain;
///
/// assert!(is_valid_domain("worktionary.ai"));
/// assert!(!is_valid_domain("invalid"));
/// assert!(!is_valid_domain("."));
/// ```
pub fn is_valid_domain(domain: &str) -> bool {
    domain.contains('.') && domain.len() > 1
}

/// Returns the lowercased domain of an address (everything after the first `@`).
///
/// Only meaningful for addresses that passed [`is_valid_email`].
pub fn email_domain(email: &str) -> Option<String> {
    email
        .split_once('@')
        .map(|(_, domain)| domain.to_lowercase())
}

fn is_valid_email_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
