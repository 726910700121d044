use crate::validation::syntax;
use async_graphql::{Object, SimpleObject};

/// Result of a syntax check on one address
#[derive(SimpleObject)]
pub struct EmailSyntaxResult {
    /// The address exactly as supplied
    pub email: String,
    /// Whether it has the `local@domain.tld` shape
    pub is_valid: bool,
}

#[derive(Default)]
pub struct EmailQuery;

#[Object]
impl EmailQuery {
    /// Checks an address against the `local@domain.tld` shape rule.
    async fn validate_email(&self, email: String) -> EmailSyntaxResult {
        let is_valid = syntax::is_valid_email(&email);
        EmailSyntaxResult { email, is_valid }
    }
}
