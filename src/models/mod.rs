/// # Health Status Response
///
/// Operational status of the service with a timestamp and build version.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "version": "0.1.0",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Request and response bodies for single-address syntax checks.
pub mod email;

/// # Membership Payloads
///
/// Request body for the work-friends check and the error envelope returned
/// when inputs are malformed.
///
/// ## Example Request
/// ```json
/// { "emails": ["bob@worktionary.com"], "known_domains": "worktionary.com" }
/// ```
pub mod membership;
