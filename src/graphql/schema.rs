use super::email::EmailQuery;
use super::health::HealthQuery;
use super::membership::MembershipQuery;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query combining health, syntax and membership operations.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, EmailQuery, MembershipQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema served at `/api/v1/graphql`.
///
/// # Example
///
/// ```rust,no_run
/// use work_friends::graphql::schema::create_schema;
///
/// let schema = create_schema();
/// ```
pub fn create_schema() -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .finish()
}
