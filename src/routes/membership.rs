use crate::membership::{Membership, classify};
use crate::models::membership::{ErrorResponse, WorkFriendsRequest};
use actix_web::{HttpResponse, Responder, post, web};
use tracing::{info, warn};

/// # Work Friends Endpoint
///
/// Decides whether every address belongs to the same organization.
///
/// - With `known_domains` (a string or a list), each address must match one
///   of them, ignoring case.
/// - Without, all addresses must share a single domain.
/// - An empty `emails` list is trivially `true`.
///
/// Malformed addresses or domains yield `400` with the offending entries
/// listed in input order.
///
/// ## Example Request
/// ```json
/// {
///   "emails": ["bob@worktionary.com", "advisor@worktionary.ai"],
///   "known_domains": ["worktionary.com", "worktionary.ai"]
/// }
/// ```
///
/// ## Example Error
/// ```json
/// {
///   "error": "VALIDATION_FAILED",
///   "message": "Validation failed - 1 invalid email(s)",
///   "invalid_emails": ["notanemail"]
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/work-friends",
    request_body = WorkFriendsRequest,
    responses(
        (status = 200, description = "Membership decided", body = Membership),
        (status = 400, description = "Malformed emails or domains", body = ErrorResponse)
    ),
    tag = "Membership"
)]
#[post("/work-friends")]
pub async fn work_friends(req: web::Json<WorkFriendsRequest>) -> impl Responder {
    let WorkFriendsRequest {
        emails,
        known_domains,
    } = req.into_inner();

    match classify(&emails, known_domains) {
        Ok(membership) => {
            info!(
                emails = emails.len(),
                work_friends = membership.work_friends,
                mode = ?membership.mode,
                "work-friends"
            );
            HttpResponse::Ok().json(membership)
        }
        Err(err) => {
            warn!(error = %err, "work-friends rejected input");
            HttpResponse::BadRequest().json(ErrorResponse::from(&err))
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(work_friends);
}
