mod blueprint;
pub mod configuration;
pub mod jwt_auth;
pub mod routes;
pub mod schemas;
pub mod telemetry;

pub use blueprint::blueprint;
