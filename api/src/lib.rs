//! The transport crate: parses HTTP requests, resolves the actor, and
//! dispatches into [`sd_core`]'s lifecycle engine. Everything
//! business-shaped lives in `sd_core`; this crate only ever adds the
//! ambient concerns a pavex service carries — routing, DI wiring,
//! configuration, logging, and the Postgres-backed [`store::SqlxEventStore`]
//!.
mod blueprint;
pub mod auth;
pub mod configuration;
pub mod errors;
pub mod routes;
pub mod schemas;
pub mod store;
pub mod telemetry;

pub use blueprint::api_blueprint;
