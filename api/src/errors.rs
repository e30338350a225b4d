//! Turns [`sd_core::CoreError`] into the wire-level error envelope:
//! `{"errMsg": "<message>"}` for every 4xx/5xx except the legacy v1
//! conflict body and the bare-body 403. The core crate never constructs
//! an HTTP response itself — this is the only place that does.
use pavex::response::{body::Json, Response};
use sd_core::CoreError;

#[derive(serde::Serialize)]
struct ErrorEnvelope<'a> {
    #[serde(rename = "errMsg")]
    err_msg: &'a str,
}

fn json_error(response: Response, message: &str) -> Response {
    match Json::new(ErrorEnvelope { err_msg: message }) {
        Ok(body) => response.set_typed_body(body),
        Err(_) => response.set_typed_body(format!("{{\"errMsg\":\"{message}\"}}")),
    }
}

/// Maps a [`CoreError`] to its HTTP response. Internal errors are logged
/// with structured `error.msg`/`error.error_chain` fields before the
/// generic 500 body is returned.
pub fn core_error_into_response(error: &CoreError) -> Response {
    match error {
        CoreError::Validation(message) => json_error(Response::bad_request(), message),
        CoreError::Unauthorized => json_error(Response::unauthorized(), "unauthorized"),
        CoreError::Forbidden => Response::forbidden(),
        CoreError::NotFound(message) => json_error(Response::not_found(), message),
        CoreError::VersionConflict => json_error(Response::conflict(), "version conflict"),
        CoreError::DuplicateIncident {
            existing_incident_id,
            existing_incident_title,
        } => {
            #[derive(serde::Serialize)]
            struct DuplicateIncidentBody<'a> {
                msg: &'a str,
                details: &'a str,
                existing_incident_id: i64,
                existing_incident_title: &'a str,
            }
            let body = DuplicateIncidentBody {
                msg: "incident already exists",
                details: "an open incident already covers this component at this impact",
                existing_incident_id: *existing_incident_id,
                existing_incident_title,
            };
            match Json::new(body) {
                Ok(body) => Response::conflict().set_typed_body(body),
                Err(_) => Response::internal_server_error(),
            }
        }
        CoreError::Store(e) => {
            tracing::error!(
                error.msg = %e,
                error.error_chain = ?e,
                "store operation failed"
            );
            json_error(Response::internal_server_error(), "internal error")
        }
    }
}
