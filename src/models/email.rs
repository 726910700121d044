use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

/// Body returned when an address passes the syntax check.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct EmailValidResponse {
    pub status: String,
    pub message: String,
}

impl EmailValidResponse {
    pub fn valid() -> Self {
        Self {
            status: "VALID".to_string(),
            message: "Email address is valid".to_string(),
        }
    }
}
