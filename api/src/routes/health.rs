//! Liveness probe, unauthenticated, not part of the status-dashboard
//! domain itself but present for the container orchestrator to poll.
use pavex::http::StatusCode;

pub fn health() -> StatusCode {
    StatusCode::OK
}
