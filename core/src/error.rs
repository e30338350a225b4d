//! Core error taxonomy. The `sd_api` crate is the only place that turns
//! these into HTTP status codes and `errMsg` bodies — the engine itself
//! never talks about transport.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A request failed one of the validation rules in / — maps to
    /// `400 Bad Request` with the message as `errMsg`.
    #[error("{0}")]
    Validation(String),

    /// The actor is not authorized to perform the requested mutation —
    /// maps to `403 Forbidden` with an empty body.
    #[error("forbidden")]
    Forbidden,

    /// No token was presented where one is required — maps to
    /// `401 Unauthorized`.
    #[error("unauthorized")]
    Unauthorized,

    /// The referenced event, update, or component does not exist — maps
    /// to `404 Not Found`.
    #[error("{0}")]
    NotFound(String),

    /// A maintenance patch carried a stale `version` — maps to
    /// `409 Conflict`.
    #[error("version conflict")]
    VersionConflict,

    /// The legacy v1 endpoint found an existing open incident that
    /// conflicts with the requested one — maps to `409 Conflict` with a
    /// structured body.
    #[error("incident already exists")]
    DuplicateIncident {
        existing_incident_id: i64,
        existing_incident_title: String,
    },

    /// The store reported a failure unrelated to any business rule —
    /// maps to `500 Internal Server Error`.
    #[error("store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;
