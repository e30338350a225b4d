//! An in-process [`EventStore`] used by the lifecycle engine's unit tests
//! in place of a real database connection.
use super::{Changeset, ChangesetResult, EventFilter, EventStore, StoreError};
use crate::types::{Attribute, Component, Event, EventUpdate};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    components: HashMap<i64, Component>,
    events: HashMap<i64, Event>,
    next_component_id: i64,
    next_event_id: i64,
}

pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore {
            inner: Mutex::new(Inner {
                components: HashMap::new(),
                events: HashMap::new(),
                next_component_id: 1,
                next_event_id: 1,
            }),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test helper: seed a component with a fixed id, bypassing
    /// `insert_component`'s auto-increment.
    pub fn seed_component(&self, id: i64, name: &str, attributes: Vec<Attribute>) {
        let mut inner = self.inner.lock().unwrap();
        inner.components.insert(
            id,
            Component {
                id,
                name: name.to_string(),
                attributes,
            },
        );
        inner.next_component_id = inner.next_component_id.max(id + 1);
    }
}

impl EventStore for InMemoryStore {
    async fn list_components(&self) -> Result<Vec<Component>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut out: Vec<_> = inner.components.values().cloned().collect();
        out.sort_by_key(|c| c.id);
        Ok(out)
    }

    async fn get_component(&self, id: i64) -> Result<Option<Component>, StoreError> {
        Ok(self.inner.lock().unwrap().components.get(&id).cloned())
    }

    async fn get_components(&self, ids: &[i64]) -> Result<Vec<Component>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(ids.iter().filter_map(|id| inner.components.get(id).cloned()).collect())
    }

    async fn find_component_by_identity(
        &self,
        name: &str,
        attributes: &[Attribute],
    ) -> Result<Option<Component>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .components
            .values()
            .find(|c| c.same_identity(name, attributes))
            .cloned())
    }

    async fn insert_component(
        &self,
        name: String,
        attributes: Vec<Attribute>,
    ) -> Result<Component, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_component_id;
        inner.next_component_id += 1;
        let component = Component { id, name, attributes };
        inner.components.insert(id, component.clone());
        Ok(component)
    }

    async fn get_event(&self, id: i64) -> Result<Option<Event>, StoreError> {
        Ok(self.inner.lock().unwrap().events.get(&id).cloned())
    }

    async fn open_incidents_covering(&self, component_ids: &[i64]) -> Result<Vec<Event>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut out: Vec<_> = inner
            .events
            .values()
            .filter(|e| {
                e.event_type == crate::types::EventType::Incident
                    && e.is_open()
                    && e.components.iter().any(|c| component_ids.contains(c))
            })
            .cloned()
            .collect();
        out.sort_by_key(|e| e.id);
        Ok(out)
    }

    async fn closed_incidents_for_component(&self, component_id: i64) -> Result<Vec<Event>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut out: Vec<_> = inner
            .events
            .values()
            .filter(|e| {
                e.event_type == crate::types::EventType::Incident
                    && !e.is_open()
                    && e.impact >= 1
                    && e.components.contains(&component_id)
            })
            .cloned()
            .collect();
        out.sort_by_key(|e| e.id);
        Ok(out)
    }

    async fn list_events(
        &self,
        filter: &EventFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Event>, u64), StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut matching: Vec<_> = inner
            .events
            .values()
            .filter(|e| matches_filter(e, filter))
            .cloned()
            .collect();
        matching.sort_by_key(|e| e.id);
        let total = matching.len() as u64;
        let page = page.max(1);
        let start = ((page - 1) as usize) * (limit as usize);
        let page_slice = matching.into_iter().skip(start).take(limit as usize).collect();
        Ok((page_slice, total))
    }

    async fn commit(&self, changeset: Changeset) -> Result<ChangesetResult, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        // Optimistic-concurrency pre-check: validate every expected
        // version before mutating anything, so a conflict leaves the
        // whole changeset un-applied (mirrors a rolled-back SQL tx).
        for patch in &changeset.patches {
            if let Some(expected) = patch.expected_version {
                let event = inner
                    .events
                    .get(&patch.event_id)
                    .ok_or_else(|| StoreError::NotFound(format!("event {}", patch.event_id)))?;
                if event.version != expected {
                    return Err(StoreError::VersionConflict);
                }
            }
        }

        let mut result = ChangesetResult::default();

        for spec in changeset.new_events {
            let id = inner.next_event_id;
            inner.next_event_id += 1;
            let updates = spec
                .first_updates
                .into_iter()
                .enumerate()
                .map(|(idx, (status, text, timestamp))| EventUpdate {
                    id: idx as i64,
                    status,
                    text,
                    timestamp,
                })
                .collect::<Vec<_>>();
            let status = updates.last().map(|u: &EventUpdate| u.status).unwrap_or(crate::types::UpdateStatus::Detected);
            let event = Event {
                id,
                event_type: spec.event_type,
                title: spec.title,
                description: spec.description,
                contact_email: spec.contact_email,
                impact: spec.impact,
                start_date: spec.start_date,
                end_date: spec.end_date,
                system: spec.system,
                created_by: spec.created_by,
                version: 1,
                status,
                components: spec.components,
                updates,
            };
            inner.events.insert(id, event);
            result.new_event_ids.push(id);
        }

        for patch in changeset.patches {
            let event = inner
                .events
                .get_mut(&patch.event_id)
                .ok_or_else(|| StoreError::NotFound(format!("event {}", patch.event_id)))?;
            if let Some(v) = patch.set_title {
                event.title = v;
            }
            if let Some(v) = patch.set_description {
                event.description = v;
            }
            if let Some(v) = patch.set_contact_email {
                event.contact_email = Some(v);
            }
            if let Some(v) = patch.set_impact {
                event.impact = v;
            }
            if let Some(v) = patch.set_start_date {
                event.start_date = v;
            }
            if patch.clear_end_date {
                event.end_date = None;
            } else if let Some(v) = patch.set_end_date {
                event.end_date = Some(v);
            }
            if let Some(v) = patch.set_components {
                event.components = v;
            }
            if let Some((status, text, timestamp)) = patch.append_update {
                let id = event.next_update_id();
                event.updates.push(EventUpdate {
                    id,
                    status,
                    text,
                    timestamp,
                });
                event.status = status;
            }
            if let Some((update_id, new_text)) = patch.edit_update {
                let update = event
                    .updates
                    .iter_mut()
                    .find(|u| u.id == update_id)
                    .ok_or_else(|| StoreError::NotFound(format!("update {update_id}")))?;
                update.text = new_text;
            }
            if patch.expected_version.is_some() {
                event.version += 1;
                result.new_versions.insert(event.id, event.version);
            }
        }

        Ok(result)
    }
}

fn matches_filter(event: &Event, filter: &EventFilter) -> bool {
    if let Some(start) = filter.start_date {
        if event.start_date < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if event.start_date > end {
            return false;
        }
    }
    if let Some(impact) = filter.impact {
        if event.impact != impact {
            return false;
        }
    }
    if let Some(component_id) = filter.component_id {
        if !event.components.contains(&component_id) {
            return false;
        }
    }
    if let Some(system) = filter.system {
        if event.system != system {
            return false;
        }
    }
    if let Some(active) = filter.active {
        if event.is_open() != active {
            return false;
        }
    }
    if let Some(event_type) = filter.event_type {
        if event.event_type != event_type {
            return false;
        }
    }
    true
}
