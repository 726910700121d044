use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa::path` annotations on the REST
/// handlers and served through Swagger UI.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `POST /api/v1/validate-email`
/// - Membership: `POST /api/v1/work-friends`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::membership::work_friends,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::EmailValidResponse,
            crate::models::membership::WorkFriendsRequest,
            crate::models::membership::ErrorResponse,
            crate::membership::KnownDomains,
            crate::membership::Membership,
            crate::membership::MatchMode,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email address syntax checks"),
        (name = "Membership", description = "Same-organization checks over lists of addresses"),
        (name = "GraphQL", description = "GraphQL API exposing the same operations")
    ),
    info(
        description = "Decides whether email addresses belong to the same organization, over REST and GraphQL",
        title = "Work Friends API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
