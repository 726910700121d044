pub mod email;
pub mod handlers;
pub mod health;
pub mod membership;
pub mod schema;
