use crate::models::email::{EmailRequest, EmailValidResponse};
use crate::models::membership::ErrorResponse;
use crate::validation::syntax;
use actix_web::{HttpResponse, Responder, post, web};
use tracing::info;

/// # Email Syntax Endpoint
///
/// Checks that the address is `local@domain` with a dotted domain of non-empty
/// labels. No DNS or deliverability checks are made, and the input is not
/// trimmed.
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email is well-formed", body = EmailValidResponse),
        (status = 400, description = "Email is malformed", body = ErrorResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(req: web::Json<EmailRequest>) -> impl Responder {
    if !syntax::is_valid_email(&req.email) {
        info!(outcome = "invalid", "validate-email");
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "INVALID_SYNTAX",
            "Email address has invalid syntax",
        ));
    }

    info!(outcome = "valid", "validate-email");
    HttpResponse::Ok().json(EmailValidResponse::valid())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email);
}
