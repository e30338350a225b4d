//! The lifecycle engine: decides, for a create/patch/extract
//! request, which events are created, amended, closed, or have their
//! components reshuffled. This is the hard core of the service — it reads
//! and writes only through [`EventStore`], never through SQL directly.
use crate::error::{CoreError, CoreResult};
use crate::rbac;
use crate::store::{Changeset, EventPatchSpec, EventStore, NewEventSpec};
use crate::types::{Actor, Event, EventType, UpdateStatus};
use crate::vocabulary;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Input to [`create`]. Mirrors the incident-create request payload.
#[derive(Debug, Clone)]
pub struct CreateEventRequest {
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub contact_email: Option<String>,
    pub impact: u8,
    pub components: Vec<i64>,
    pub start_date: OffsetDateTime,
    pub end_date: Option<OffsetDateTime>,
    pub system: bool,
    /// Set when the request body carried an `updates` field at all — it
    /// must always be absent.
    pub updates_present: bool,
}

/// One entry of the create response vector, one per requested component.
#[derive(Debug, Clone)]
pub struct CreateResultEntry {
    pub component_id: i64,
    pub incident_id: Option<i64>,
    pub error: Option<String>,
}

/// Input to [`patch`]. Mirrors the patch request payload.
#[derive(Debug, Clone, Default)]
pub struct PatchEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub impact: Option<u8>,
    pub status: UpdateStatus,
    pub message: String,
    pub update_date: OffsetDateTime,
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<OffsetDateTime>,
    pub version: Option<i64>,
    pub components: Option<Vec<i64>>,
}

pub struct PatchOutcome {
    pub event: Event,
    /// Echoed back to the caller for maintenance patches.
    pub version: i64,
}

impl PatchEventRequest {
    pub fn status(&self) -> UpdateStatus {
        self.status
    }
}

fn validate_create(req: &CreateEventRequest) -> CoreResult<()> {
    if req.updates_present {
        return Err(CoreError::Validation(
                "event updates should be empty".to_string(),
        ));
    }
    if !vocabulary::impact_matches_type(req.event_type, req.impact) {
        return Err(CoreError::Validation(
                "impact must be 0 for type 'maintenance' or 'info' and gt 0 for 'incident'".to_string(),
        ));
    }
    match req.event_type {
        EventType::Incident => {
            if req.end_date.is_some() {
                return Err(CoreError::Validation(
                        "event end_date should be empty".to_string(),
                ));
            }
        }
        EventType::Maintenance => {
            if req.end_date.is_none() {
                return Err(CoreError::Validation(
                        "event end_date should not be empty".to_string(),
                ));
            }
            if req.start_date <= OffsetDateTime::now_utc() {
                return Err(CoreError::Validation(
                        "maintenance start_date must be in the future".to_string(),
                ));
            }
            match &req.contact_email {
                Some(email) if is_valid_email(email) => {}
                _ => {
                    return Err(CoreError::Validation(
                            "maintenance requires a valid contact_email".to_string(),
                    ))
                }
            }
            if req.description.trim().is_empty() {
                return Err(CoreError::Validation(
                        "maintenance requires a description".to_string(),
                ));
            }
        }
        EventType::Info => {
            if req.end_date.is_none() {
                return Err(CoreError::Validation(
                        "event end_date should not be empty".to_string(),
                ));
            }
        }
    }
    let mut seen = std::collections::HashSet::new();
    for id in &req.components {
        if !seen.insert(*id) {
            return Err(CoreError::Validation("duplicate component".to_string()));
        }
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn component_descriptor(store_component: &crate::types::Component) -> String {
    format!(
        "{} / region={}",
        store_component.name,
        store_component.region().unwrap_or("")
    )
}

/// Create (or route into an existing) event for one or more components
///.
pub async fn create<S: EventStore>(
    store: &S,
    actor: &Actor,
    req: CreateEventRequest,
    now: OffsetDateTime,
) -> CoreResult<Vec<CreateResultEntry>> {
    rbac::authorize_create(actor, req.event_type)?;
    validate_create(&req)?;

    let components = store.get_components(&req.components).await?;
    for id in &req.components {
        if !components.iter().any(|c| c.id == *id) {
            return Err(CoreError::Validation(format!(
                        "component does not exist, component_id: {id}"
            )));
        }
    }

    match req.event_type {
        EventType::Incident => create_incident(store, actor, &req, now).await,
        EventType::Maintenance => {
            let status = rbac::initial_maintenance_status(actor);
            let event_id = create_independent_event(store, actor, &req, status, now).await?;
            Ok(req
                .components
                .iter()
                .map(|c| CreateResultEntry {
                        component_id: *c,
                        incident_id: Some(event_id),
                        error: None,
                })
                .collect())
        }
        EventType::Info => {
            let event_id =
            create_independent_event(store, actor, &req, UpdateStatus::Planned, now).await?;
            Ok(req
                .components
                .iter()
                .map(|c| CreateResultEntry {
                        component_id: *c,
                        incident_id: Some(event_id),
                        error: None,
                })
                .collect())
        }
    }
}

async fn create_independent_event<S: EventStore>(
    store: &S,
    actor: &Actor,
    req: &CreateEventRequest,
    first_status: UpdateStatus,
    now: OffsetDateTime,
) -> CoreResult<i64> {
    let first_text = req.title.clone();
    let spec = NewEventSpec {
        event_type: req.event_type,
        title: req.title.clone(),
        description: req.description.clone(),
        contact_email: req.contact_email.clone(),
        impact: req.impact,
        start_date: req.start_date,
        end_date: req.end_date,
        system: req.system,
        created_by: actor.user_id.clone(),
        components: req.components.clone(),
        first_updates: vec![(first_status, first_text, now)],
    };
    let result = store
    .commit(Changeset {
            new_events: vec![spec],
            patches: vec![],
    })
    .await?;
    Ok(result.new_event_ids[0])
}

/// The three outcomes a requested component can have relative to an
/// already-open incident covering it (, resolved against the
/// worked examples in scenarios 5 and 6 — see DESIGN.md).
enum Disposition {
    /// No incident currently covers this component.
    Free,
    /// `E` is strictly more severe than the request: the component stays
    /// where it is, untouched.
    Stay(Event),
    /// The request is strictly more severe than `E`: `E`'s impact is
    /// raised in place.
    Raise(Event),
    /// The request matches `E`'s impact exactly: the component is moved
    /// off `E` into a newly created incident.
    Merge(Event),
}

async fn create_incident<S: EventStore>(
    store: &S,
    actor: &Actor,
    req: &CreateEventRequest,
    now: OffsetDateTime,
) -> CoreResult<Vec<CreateResultEntry>> {
    let covering = store.open_incidents_covering(&req.components).await?;
    let by_component: BTreeMap<i64, &Event> = req
    .components
    .iter()
    .filter_map(|id| {
            covering
            .iter()
            .find(|e| e.components.contains(id))
            .map(|e| (*id, e))
    })
    .collect();

    let mut dispositions = BTreeMap::new();
    for id in &req.components {
        let disposition = match by_component.get(id) {
            None => Disposition::Free,
            Some(e) => {
                if req.impact > e.impact {
                    Disposition::Raise((*e).clone())
                } else if req.impact == e.impact {
                    Disposition::Merge((*e).clone())
                } else {
                    Disposition::Stay((*e).clone())
                }
            }
        };
        dispositions.insert(*id, disposition);
    }

    // Components going into the (possibly unneeded) new incident: every
    // free component, plus every merged-in component, grouped by the
    // incident they are being pulled from (`None` for genuinely new).
    let mut new_incident_free: Vec<i64> = vec![];
    let mut new_incident_from: BTreeMap<i64, (Event, Vec<i64>)> = BTreeMap::new();
    let mut result_incident_of: BTreeMap<i64, i64> = BTreeMap::new();
    let mut raises: BTreeMap<i64, (Event, u8)> = BTreeMap::new();

    for (component_id, disposition) in dispositions {
        match disposition {
            Disposition::Free => new_incident_free.push(component_id),
            Disposition::Stay(e) => {
                result_incident_of.insert(component_id, e.id);
            }
            Disposition::Raise(e) => {
                raises.entry(e.id).or_insert((e.clone(), req.impact));
                result_incident_of.insert(component_id, e.id);
            }
            Disposition::Merge(e) => {
                new_incident_from
                .entry(e.id)
                .or_insert_with(|| (e.clone(), vec![]))
                .1
                .push(component_id);
            }
        }
    }

    let mut changeset = Changeset::default();

    // Raise in place: one SYSTEM update per raised incident.
    for (event_id, (event, new_impact)) in &raises {
        changeset.patches.push(EventPatchSpec {
                event_id: *event_id,
                set_impact: Some(*new_impact),
                append_update: Some((
                        UpdateStatus::System,
                        format!("impact changed from {} to {}", event.impact, new_impact),
                        now,
                )),
                ..Default::default()
        });
    }

    let has_new_incident = !new_incident_free.is_empty() || !new_incident_from.is_empty();

    let mut new_incident_components: Vec<i64> = new_incident_free.clone();
    for (_, ids) in new_incident_from.values() {
        new_incident_components.extend(ids.iter().copied());
    }
    new_incident_components.sort_unstable();

    if has_new_incident {
        let mut first_updates = vec![];
        if !new_incident_free.is_empty() {
            first_updates.push((
                    UpdateStatus::Detected,
                    "The incident is detected.".to_string(),
                    now,
            ));
        }
        let spec = NewEventSpec {
            event_type: EventType::Incident,
            title: req.title.clone(),
            description: req.description.clone(),
            contact_email: req.contact_email.clone(),
            impact: req.impact,
            start_date: req.start_date,
            end_date: None,
            system: req.system,
            created_by: actor.user_id.clone(),
            components: new_incident_components.clone(),
            first_updates,
        };
        changeset.new_events.push(spec);
    }

    // Components referenced by the whole batch, for building
    // human-readable descriptors in move texts.
    let component_rows = store.get_components(&new_incident_components).await?;
    let descriptor_of = |id: i64| -> String {
        component_rows
        .iter()
        .find(|c| c.id == id)
        .map(component_descriptor)
        .unwrap_or_else(|| format!("component {id}"))
    };

    // We don't yet know the new incident's id (assigned by the store),
    // so run the changeset in two passes when a merge is involved: first
    // commit to obtain the id, then issue the move/close patches.
    let commit_result = store.commit(changeset).await?;
    let new_event_id = if has_new_incident {
        Some(commit_result.new_event_ids[0])
    } else {
        None
    };

    // Raised/staying components already have their result recorded above;
    // merged components all resolve to the freshly created incident.
    if let Some(new_id) = new_event_id {
        for ids in new_incident_from.values().map(|(_, ids)| ids) {
            for id in ids {
                result_incident_of.insert(*id, new_id);
            }
        }
        for id in &new_incident_free {
            result_incident_of.insert(*id, new_id);
        }
    }

    if !new_incident_from.is_empty() {
        let new_id = new_event_id.expect("merge implies a new incident was created");
        let new_title = req.title.clone();
        let mut follow_up = Changeset::default();
        for (old_id, (old_event, moved_ids)) in &new_incident_from {
            let descriptors = moved_ids
            .iter()
            .map(|id| descriptor_of(*id))
            .collect::<Vec<_>>()
            .join(", ");
            let to_text = format!(
                "{descriptors} moved to <a href='/incidents/{new_id}'>{new_title}</a>"
            );
            let from_text = format!(
                "{descriptors} moved from <a href='/incidents/{old_id}'>{}</a>",
                old_event.title
            );
            let remaining: Vec<i64> = old_event
            .components
            .iter()
            .copied()
            .filter(|c| !moved_ids.contains(c))
            .collect();
            let now_empty = remaining.is_empty();
            let mut patch = EventPatchSpec {
                event_id: *old_id,
                set_components: Some(remaining),
                append_update: Some((UpdateStatus::System, to_text, now)),
                ..Default::default()
            };
            follow_up.patches.push(patch);
            if now_empty {
                patch = EventPatchSpec {
                    event_id: *old_id,
                    set_end_date: Some(now),
                    append_update: Some((
                            UpdateStatus::System,
                            format!("{descriptors}, Incident closed by system"),
                            now,
                    )),
                    ..Default::default()
                };
                follow_up.patches.push(patch);
            }
            follow_up.patches.push(EventPatchSpec {
                    event_id: new_id,
                    append_update: Some((UpdateStatus::System, from_text, now)),
                    ..Default::default()
            });
        }
        store.commit(follow_up).await?;
    }

    Ok(req
        .components
        .iter()
        .map(|id| CreateResultEntry {
                component_id: *id,
                incident_id: result_incident_of.get(id).copied(),
                error: None,
        })
        .collect())
}

/// Validate and apply a patch to an existing event.
pub async fn patch<S: EventStore>(
    store: &S,
    actor: &Actor,
    event_id: i64,
    req: PatchEventRequest,
) -> CoreResult<PatchOutcome> {
    let event = store
    .get_event(event_id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;

    rbac::authorize_patch(actor, &event, req.status())?;

    if req.start_date.is_some() && event.is_open() {
        return Err(CoreError::Validation(
                "can not change start date for open incident".to_string(),
        ));
    }

    if req.impact.is_some() && event.event_type != EventType::Incident {
        return Err(CoreError::Validation(
                "can not change impact to 0".to_string(),
        ));
    }
    if let Some(impact) = req.impact {
        if req.status() != UpdateStatus::ImpactChanged {
            return Err(CoreError::Validation(
                    "wrong status for changing impact".to_string(),
            ));
        }
        if !vocabulary::impact_matches_type(event.event_type, impact) {
            return Err(CoreError::Validation(
                    "impact must be 0 for type 'maintenance' or 'info' and gt 0 for 'incident'".to_string(),
            ));
        }
    }

    if !vocabulary::patch_is_legal(event.event_type, event.is_open(), event.status(), req.status()) {
        return Err(CoreError::Validation(format!(
                    "wrong status for {}",
                    event.event_type
        )));
    }

    if event.event_type == EventType::Maintenance {
        let expected = req.version.ok_or_else(|| {
                CoreError::Validation("version is required for maintenance patches".to_string())
        })?;
        if expected != event.version {
            return Err(CoreError::VersionConflict);
        }
    }

    let mut end_date = None;
    let mut clear_end_date = false;
    match req.status() {
        UpdateStatus::Resolved | UpdateStatus::Completed => {
            end_date = Some(req.end_date.unwrap_or(req.update_date));
        }
        UpdateStatus::Reopened => {
            clear_end_date = true;
        }
        _ => {
            if let Some(explicit) = req.end_date {
                end_date = Some(explicit);
            }
        }
    }

    let patch_spec = EventPatchSpec {
        event_id,
        set_title: req.title.clone(),
        set_description: req.description.clone(),
        set_impact: req.impact,
        set_start_date: req.start_date,
        set_end_date: end_date,
        clear_end_date,
        set_components: req.components.clone(),
        append_update: Some((req.status(), req.message.clone(), req.update_date)),
        expected_version: if event.event_type == EventType::Maintenance {
            req.version
        } else {
            None
        },
    };

    let result = store
    .commit(Changeset {
            new_events: vec![],
            patches: vec![patch_spec],
    })
    .await?;

    let updated = store
    .get_event(event_id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;
    let version = result
    .new_versions
    .get(&event_id)
    .copied()
    .unwrap_or(updated.version);

    Ok(PatchOutcome {
            event: updated,
            version,
    })
}

/// Split `components_to_move` off `event_id` into a freshly created event
/// of the same type and impact.
pub async fn extract<S: EventStore>(
    store: &S,
    actor: &Actor,
    event_id: i64,
    components_to_move: Vec<i64>,
    now: OffsetDateTime,
) -> CoreResult<i64> {
    let event = store
    .get_event(event_id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;

    rbac::authorize_extract(actor, &event)?;

    if components_to_move.is_empty() {
        return Err(CoreError::Validation(
                "components_to_move must not be empty".to_string(),
        ));
    }
    for id in &components_to_move {
        if !event.components.contains(id) {
            return Err(CoreError::Validation(format!(
                        "component does not exist, component_id: {id}"
            )));
        }
    }
    let remaining: Vec<i64> = event
    .components
    .iter()
    .copied()
    .filter(|c| !components_to_move.contains(c))
    .collect();
    if remaining.is_empty() {
        return Err(CoreError::Validation(
                "can not move all components to the new incident, keep at least one".to_string(),
        ));
    }

    let components = store.get_components(&components_to_move).await?;
    let descriptors = components
    .iter()
    .map(component_descriptor)
    .collect::<Vec<_>>()
    .join(", ");

    let spec = NewEventSpec {
        event_type: event.event_type,
        title: event.title.clone(),
        description: event.description.clone(),
        contact_email: event.contact_email.clone(),
        impact: event.impact,
        start_date: event.start_date,
        end_date: None,
        system: true,
        created_by: event.created_by.clone(),
        components: components_to_move.clone(),
        first_updates: vec![],
    };

    let commit_result = store
    .commit(Changeset {
            new_events: vec![spec],
            patches: vec![],
    })
    .await?;
    let new_id = commit_result.new_event_ids[0];

    let to_text = format!(
        "{descriptors} moved to <a href='/incidents/{new_id}'>{}</a>",
        event.title
    );
    let from_text = format!(
        "{descriptors} moved from <a href='/incidents/{event_id}'>{}</a>",
        event.title
    );

    store
    .commit(Changeset {
            new_events: vec![],
            patches: vec![
                EventPatchSpec {
                    event_id,
                    set_components: Some(remaining),
                    append_update: Some((UpdateStatus::System, to_text, now)),
                    ..Default::default()
                },
                EventPatchSpec {
                    event_id: new_id,
                    append_update: Some((UpdateStatus::System, from_text, now)),
                    ..Default::default()
                },
            ],
    })
    .await?;

    Ok(new_id)
}

/// Correct the text of a single already-recorded update in place (
/// `PATCH /v2/events/:id/updates/:updateId`). Gated the same way a
/// status patch to the parent event would be — this is a
/// narrower operation than [`patch`], so it carries no `version`
/// requirement and does not change `status` or append a new update.
pub async fn edit_update<S: EventStore>(
    store: &S,
    actor: &Actor,
    event_id: i64,
    update_id: i64,
    new_text: String,
) -> CoreResult<Event> {
    let event = store
    .get_event(event_id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;

    rbac::authorize_patch(actor, &event, event.status())?;

    if !event.updates.iter().any(|u| u.id == update_id) {
        return Err(CoreError::NotFound("update not found".to_string()));
    }

    store
    .commit(Changeset {
            new_events: vec![],
            patches: vec![EventPatchSpec {
                    event_id,
                    edit_update: Some((update_id, new_text)),
                    ..Default::default()
            }],
    })
    .await?;

    store
    .get_event(event_id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use crate::types::{Attribute, Role};
    use time::macros::datetime;

    fn operator() -> Actor {
        Actor {
            user_id: "op".into(),
            role: Role::Operator,
        }
    }

    fn creator(id: &str) -> Actor {
        Actor {
            user_id: id.into(),
            role: Role::Creator,
        }
    }

    fn admin() -> Actor {
        Actor {
            user_id: "adm".into(),
            role: Role::Admin,
        }
    }

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.seed_component(
            1,
            "Distributed Cache Service",
            vec![Attribute {
                    name: "region".into(),
                    value: "EU-NL".into(),
            }],
        );
        store.seed_component(
            2,
            "API Gateway",
            vec![Attribute {
                    name: "region".into(),
                    value: "EU-NL".into(),
            }],
        );
        store
    }

    fn incident_req(components: Vec<i64>, impact: u8) -> CreateEventRequest {
        CreateEventRequest {
            event_type: EventType::Incident,
            title: "Something is on fire".into(),
            description: "investigating".into(),
            contact_email: None,
            impact,
            components,
            start_date: datetime!(2026-01-01 00:00 UTC),
            end_date: None,
            system: false,
            updates_present: false,
        }
    }

    #[tokio::test]
    async fn two_equal_impact_incidents_merge_and_close_the_first() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);

        let first = create(&store, &operator(), incident_req(vec![1, 2], 1), now)
        .await
        .unwrap();
        let first_id = first[0].incident_id.unwrap();

        let second = create(&store, &operator(), incident_req(vec![1, 2], 1), now)
        .await
        .unwrap();
        let second_id = second[0].incident_id.unwrap();

        assert_ne!(first_id, second_id);
        assert_eq!(second[0].incident_id, second[1].incident_id);

        let closed = store.get_event(first_id).await.unwrap().unwrap();
        assert!(!closed.is_open());
        assert_eq!(closed.components, Vec::<i64>::new());
        assert_eq!(closed.updates.len(), 3);
        assert!(closed.updates.last().unwrap().text.ends_with("Incident closed by system"));

        let merged = store.get_event(second_id).await.unwrap().unwrap();
        assert_eq!(merged.components, vec![1, 2]);
    }

    #[tokio::test]
    async fn higher_impact_request_raises_the_existing_incident_in_place() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);

        let first = create(&store, &operator(), incident_req(vec![1], 1), now)
        .await
        .unwrap();
        let incident_id = first[0].incident_id.unwrap();

        let second = create(&store, &operator(), incident_req(vec![1], 2), now)
        .await
        .unwrap();
        assert_eq!(second[0].incident_id, Some(incident_id));

        let event = store.get_event(incident_id).await.unwrap().unwrap();
        assert_eq!(event.impact, 2);
        assert_eq!(
            event.updates.last().unwrap().text,
            "impact changed from 1 to 2"
        );
    }

    #[tokio::test]
    async fn lower_impact_request_leaves_the_existing_incident_untouched() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);

        let first = create(&store, &operator(), incident_req(vec![1], 2), now)
        .await
        .unwrap();
        let incident_id = first[0].incident_id.unwrap();

        let second = create(&store, &operator(), incident_req(vec![1], 1), now)
        .await
        .unwrap();
        assert_eq!(second[0].incident_id, Some(incident_id));

        let event = store.get_event(incident_id).await.unwrap().unwrap();
        assert_eq!(event.impact, 2);
        assert_eq!(event.updates.len(), 1);
    }

    fn maintenance_req(start: OffsetDateTime, end: OffsetDateTime) -> CreateEventRequest {
        CreateEventRequest {
            event_type: EventType::Maintenance,
            title: "Planned upgrade".into(),
            description: "Upgrading the database cluster".into(),
            contact_email: Some("ops@example.com".into()),
            impact: 0,
            components: vec![1, 2],
            start_date: start,
            end_date: Some(end),
            system: false,
            updates_present: false,
        }
    }

    #[tokio::test]
    async fn creator_maintenance_workflow_advances_version_each_patch() {
        let store = seeded_store();
        let start = datetime!(2026-06-01 00:00 UTC);
        let end = datetime!(2026-06-01 02:00 UTC);
        let creator = creator("user-a");

        let created = create(&store, &creator, maintenance_req(start, end), start)
        .await
        .unwrap();
        let event_id = created[0].incident_id.unwrap();
        assert_eq!(created[0].incident_id, created[1].incident_id);
        let event = store.get_event(event_id).await.unwrap().unwrap();
        assert_eq!(event.status(), UpdateStatus::PendingReview);
        assert_eq!(event.version, 1);

        let outcome = patch(
            &store,
            &creator,
            event_id,
            PatchEventRequest {
                status: UpdateStatus::PendingReview,
                message: "adding more detail".into(),
                update_date: start,
                version: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(outcome.version, 2);

        let op = operator();
        let outcome = patch(
            &store,
            &op,
            event_id,
            PatchEventRequest {
                status: UpdateStatus::Reviewed,
                message: "approved".into(),
                update_date: start,
                version: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(outcome.version, 3);

        let adm = admin();
        let outcome = patch(
            &store,
            &adm,
            event_id,
            PatchEventRequest {
                status: UpdateStatus::Planned,
                message: "scheduled".into(),
                update_date: start,
                version: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(outcome.version, 4);
    }

    #[tokio::test]
    async fn a_second_creator_cannot_patch_someone_elses_pending_maintenance() {
        let store = seeded_store();
        let start = datetime!(2026-06-01 00:00 UTC);
        let end = datetime!(2026-06-01 02:00 UTC);
        let owner = creator("user-a");
        let intruder = creator("user-b");

        let created = create(&store, &owner, maintenance_req(start, end), start)
        .await
        .unwrap();
        let event_id = created[0].incident_id.unwrap();

        let result = patch(
            &store,
            &intruder,
            event_id,
            PatchEventRequest {
                status: UpdateStatus::Cancelled,
                message: "nope".into(),
                update_date: start,
                version: Some(1),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(CoreError::Forbidden)));

        let admin_result = patch(
            &store,
            &admin(),
            event_id,
            PatchEventRequest {
                status: UpdateStatus::Cancelled,
                message: "cancelled by admin".into(),
                update_date: start,
                version: Some(1),
                ..Default::default()
            },
        )
        .await;
        assert!(admin_result.is_ok());
    }

    #[tokio::test]
    async fn stale_version_yields_conflict_and_changes_nothing() {
        let store = seeded_store();
        let start = datetime!(2026-06-01 00:00 UTC);
        let end = datetime!(2026-06-01 02:00 UTC);
        let owner = creator("user-a");

        let created = create(&store, &owner, maintenance_req(start, end), start)
        .await
        .unwrap();
        let event_id = created[0].incident_id.unwrap();

        let first = patch(
            &store,
            &owner,
            event_id,
            PatchEventRequest {
                status: UpdateStatus::PendingReview,
                message: "edit".into(),
                update_date: start,
                version: Some(1),
                ..Default::default()
            },
        )
        .await;
        assert!(first.is_ok());

        let second = patch(
            &store,
            &owner,
            event_id,
            PatchEventRequest {
                status: UpdateStatus::PendingReview,
                message: "edit again, stale version".into(),
                update_date: start,
                version: Some(1),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(second, Err(CoreError::VersionConflict)));

        let event = store.get_event(event_id).await.unwrap().unwrap();
        assert_eq!(event.version, 2);
        assert_eq!(event.updates.len(), 2);
    }

    #[tokio::test]
    async fn extract_moves_components_into_a_new_event() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);

        let created = create(&store, &operator(), incident_req(vec![1, 2], 1), now)
        .await
        .unwrap();
        let source_id = created[0].incident_id.unwrap();

        let new_id = extract(&store, &operator(), source_id, vec![2], now)
        .await
        .unwrap();

        let source = store.get_event(source_id).await.unwrap().unwrap();
        assert_eq!(source.components, vec![1]);
        let extracted = store.get_event(new_id).await.unwrap().unwrap();
        assert_eq!(extracted.components, vec![2]);
        assert_eq!(extracted.updates.len(), 1);
    }

    #[tokio::test]
    async fn extract_rejects_moving_every_component() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);

        let created = create(&store, &operator(), incident_req(vec![1, 2], 1), now)
        .await
        .unwrap();
        let source_id = created[0].incident_id.unwrap();

        let result = extract(&store, &operator(), source_id, vec![1, 2], now).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_component_in_one_request_is_rejected() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);
        let result = create(&store, &operator(), incident_req(vec![1, 1], 1), now).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn edit_update_corrects_text_without_appending() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);
        let created = create(&store, &operator(), incident_req(vec![1], 1), now)
        .await
        .unwrap();
        let event_id = created[0].incident_id.unwrap();

        let updated = edit_update(&store, &operator(), event_id, 0, "typo fixed".to_string())
        .await
        .unwrap();
        assert_eq!(updated.updates.len(), 1);
        assert_eq!(updated.updates[0].text, "typo fixed");
    }

    #[tokio::test]
    async fn edit_update_rejects_unknown_update_id() {
        let store = seeded_store();
        let now = datetime!(2026-01-01 00:00 UTC);
        let created = create(&store, &operator(), incident_req(vec![1], 1), now)
        .await
        .unwrap();
        let event_id = created[0].incident_id.unwrap();

        let result = edit_update(&store, &operator(), event_id, 99, "x".to_string()).await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
