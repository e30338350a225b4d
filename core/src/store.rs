//! The persistence seam. The lifecycle engine never touches SQL directly —
//! it only calls [`EventStore`], so tests can substitute [`InMemoryStore`]
//! for a real database. The Postgres implementation
//! lives in `sd_api::store::sqlx_store` and wraps every [`EventStore::commit`]
//! call in one `sqlx::Transaction`, matching 's transactional boundary.
use crate::types::{Attribute, Component, Event, EventType, UpdateStatus};
use std::collections::HashMap;
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("version conflict")]
    VersionConflict,
    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Filters accepted by the list-events query.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<OffsetDateTime>,
    pub impact: Option<u8>,
    pub component_id: Option<i64>,
    pub system: Option<bool>,
    pub active: Option<bool>,
    pub event_type: Option<EventType>,
}

/// Describes the event(s) a single accepted request must create, as
/// specced out by the lifecycle engine. A `Changeset` is always applied
/// atomically by the store implementation.
#[derive(Debug, Default)]
pub struct Changeset {
    pub new_events: Vec<NewEventSpec>,
    pub patches: Vec<EventPatchSpec>,
}

#[derive(Debug)]
pub struct NewEventSpec {
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub contact_email: Option<String>,
    pub impact: u8,
    pub start_date: OffsetDateTime,
    pub end_date: Option<OffsetDateTime>,
    pub system: bool,
    pub created_by: String,
    pub components: Vec<i64>,
    pub first_updates: Vec<(UpdateStatus, String, OffsetDateTime)>,
}

/// A mutation of an already-existing event. `None` fields are left
/// unchanged; `clear_end_date` takes precedence over `set_end_date`.
#[derive(Debug, Default)]
pub struct EventPatchSpec {
    pub event_id: i64,
    pub set_title: Option<String>,
    pub set_description: Option<String>,
    pub set_contact_email: Option<String>,
    pub set_impact: Option<u8>,
    pub set_start_date: Option<OffsetDateTime>,
    pub set_end_date: Option<OffsetDateTime>,
    pub clear_end_date: bool,
    pub set_components: Option<Vec<i64>>,
    pub append_update: Option<(UpdateStatus, String, OffsetDateTime)>,
    /// In-place correction of a single already-recorded update's text
    /// (`update_id`, `new_text`). Unlike `append_update` this does not
    /// grow the updates list or change `status` — it exists purely to
    /// fix a typo in a past entry ( `PATCH.../updates/:updateId`).
    pub edit_update: Option<(i64, String)>,
    /// Required for maintenance patches; the store rejects with
    /// [`StoreError::VersionConflict`] if it doesn't match the stored
    /// `version` and leaves the row untouched.
    pub expected_version: Option<i64>,
}

#[derive(Debug, Default)]
pub struct ChangesetResult {
    /// Ids assigned to `Changeset::new_events`, in the same order.
    pub new_event_ids: Vec<i64>,
    /// The post-patch `version` for every patch that carried
    /// `expected_version`, keyed by `event_id`.
    pub new_versions: HashMap<i64, i64>,
}

/// The small set of queries and the single transactional write entry
/// point the lifecycle engine depends on.
pub trait EventStore: Send + Sync {
    async fn list_components(&self) -> Result<Vec<Component>, StoreError>;
    async fn get_component(&self, id: i64) -> Result<Option<Component>, StoreError>;
    async fn get_components(&self, ids: &[i64]) -> Result<Vec<Component>, StoreError>;
    async fn find_component_by_identity(
        &self,
        name: &str,
        attributes: &[Attribute],
    ) -> Result<Option<Component>, StoreError>;
    async fn insert_component(
        &self,
        name: String,
        attributes: Vec<Attribute>,
    ) -> Result<Component, StoreError>;

    async fn get_event(&self, id: i64) -> Result<Option<Event>, StoreError>;

    /// Every currently-open incident that includes at least one of
    /// `component_ids`. At most one such incident may cover any single
    /// component ( invariant), but distinct components in the slice
    /// may be covered by distinct incidents.
    async fn open_incidents_covering(&self, component_ids: &[i64]) -> Result<Vec<Event>, StoreError>;

    /// Closed incidents (of impact >= 1) that ever covered `component_id`,
    /// used by the availability calculator.
    async fn closed_incidents_for_component(&self, component_id: i64) -> Result<Vec<Event>, StoreError>;

    async fn list_events(
        &self,
        filter: &EventFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Event>, u64), StoreError>;

    /// Apply a changeset atomically. On a maintenance version conflict,
    /// no part of the changeset is applied.
    async fn commit(&self, changeset: Changeset) -> Result<ChangesetResult, StoreError>;
}

pub mod memory;
pub use memory::InMemoryStore;
