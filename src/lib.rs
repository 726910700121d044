pub mod config;
pub mod error;
pub mod graphql;
pub mod logger;
pub mod membership;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod validation;

pub use error::WorkFriendsError;
pub use membership::{KnownDomains, are_work_friends};
pub use validation::syntax::{is_valid_domain, is_valid_email};
