use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("UP"), `version` and `timestamp`
pub mod health;

/// # Email Syntax Endpoint
///
/// Checks a single address against the `local@domain.tld` shape rule.
///
/// ## Responses
/// - **200 OK**: Address is well-formed
/// - **400 Bad Request**: Address is malformed (`INVALID_SYNTAX`)
pub mod email;

/// # Work Friends Endpoint
///
/// Decides whether a list of addresses belongs to one organization,
/// optionally against caller-supplied domains.
///
/// ## Responses
/// - **200 OK**: `{ "work_friends": bool, "mode": ... }`
/// - **400 Bad Request**: Malformed emails or domains, listed in the body
pub mod membership;

/// GraphQL endpoint and playground routes.
pub mod graphql;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path with the
/// GraphQL playground enabled.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/v1/health
/// POST /api/v1/validate-email
/// POST /api/v1/work-friends
/// POST /api/v1/graphql
/// GET  /api/v1/playground
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_api(cfg, true);
}

/// Same as [`configure`], with the playground toggled by `enable_playground`.
pub fn configure_api(cfg: &mut web::ServiceConfig, enable_playground: bool) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(membership::configure_routes)
            .configure(|cfg| graphql::configure_routes(cfg, enable_playground)),
    );
}
