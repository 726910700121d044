use crate::models::health::HealthResponse;
use async_graphql::{Object, SimpleObject};

/// Service health as exposed over GraphQL.
#[derive(Debug, SimpleObject)]
pub struct Health {
    /// "UP" while the service is serving requests
    pub status: String,
    /// Crate version of the running build
    pub version: String,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            version: response.version,
            timestamp: response.timestamp,
        }
    }
}

#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self) -> Health {
        Health::from(HealthResponse::up())
    }
}
