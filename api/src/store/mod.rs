//! The production [`sd_core::store::EventStore`] implementation. The
//! engine crate only ever sees the trait; this module is where the
//! concrete Postgres backend lives.
pub mod sqlx_store;

pub use sqlx_store::SqlxEventStore;
