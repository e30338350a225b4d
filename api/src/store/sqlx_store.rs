//! The Postgres [`EventStore`]: every [`EventStore::commit`] runs inside
//! one `sqlx::Transaction`, row-locking the events it touches for the
//! duration of the merge.
//!
//! Queries are written with `sqlx::query`/`query_as` rather than the
//! `query!` macro: the macro checks queries against a live `DATABASE_URL`
//! (or a checked-in `.sqlx` cache) at compile time, neither of which this
//! workspace has. See DESIGN.md.
use sd_core::store::{
    Changeset, ChangesetResult, EventFilter, EventStore, NewEventSpec, StoreError,
};
use sd_core::types::{Attribute, Component, Event, EventType, EventUpdate, UpdateStatus};
use sqlx::{PgPool, Postgres, Row, Transaction};
use std::collections::HashMap;
use time::OffsetDateTime;

pub struct SqlxEventStore {
    pool: PgPool,
}

impl SqlxEventStore {
    pub fn new(pool: PgPool) -> Self {
        SqlxEventStore { pool }
    }
}

fn event_type_as_str(t: EventType) -> &'static str {
    t.as_str()
}

fn event_type_from_str(raw: &str) -> EventType {
    match raw {
        "incident" => EventType::Incident,
        "maintenance" => EventType::Maintenance,
        "info" => EventType::Info,
        other => unreachable!("unknown event_type in storage: {other}"),
    }
}

fn status_as_str(s: UpdateStatus) -> &'static str {
    s.as_wire_str()
}

fn status_from_str(raw: &str) -> UpdateStatus {
    match raw {
        "detected" => UpdateStatus::Detected,
        "analysing" => UpdateStatus::Analysing,
        "fixing" => UpdateStatus::Fixing,
        "impact changed" => UpdateStatus::ImpactChanged,
        "observing" => UpdateStatus::Observing,
        "resolved" => UpdateStatus::Resolved,
        "reopened" => UpdateStatus::Reopened,
        "changed" => UpdateStatus::Changed,
        "SYSTEM" => UpdateStatus::System,
        "pending review" => UpdateStatus::PendingReview,
        "reviewed" => UpdateStatus::Reviewed,
        "planned" => UpdateStatus::Planned,
        "in progress" => UpdateStatus::InProgress,
        "modified" => UpdateStatus::Modified,
        "completed" => UpdateStatus::Completed,
        "cancelled" => UpdateStatus::Cancelled,
        other => unreachable!("unknown status in storage: {other}"),
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(anyhow::Error::new(e))
}

async fn load_component_attributes(
    executor: &PgPool,
    component_ids: &[i64],
) -> Result<HashMap<i64, Vec<Attribute>>, StoreError> {
    let rows = sqlx::query(
        "SELECT component_id, name, value FROM component_attributes WHERE component_id = ANY($1) ORDER BY name",
    )
    .bind(component_ids)
    .fetch_all(executor)
    .await
    .map_err(backend)?;

    let mut out: HashMap<i64, Vec<Attribute>> = HashMap::new();
    for row in rows {
        let component_id: i64 = row.try_get("component_id").map_err(backend)?;
        let name: String = row.try_get("name").map_err(backend)?;
        let value: String = row.try_get("value").map_err(backend)?;
        out.entry(component_id).or_default().push(Attribute { name, value });
    }
    Ok(out)
}

fn component_from_row(row: &sqlx::postgres::PgRow, attributes: Vec<Attribute>) -> Result<Component, StoreError> {
    Ok(Component {
            id: row.try_get("id").map_err(backend)?,
            name: row.try_get("name").map_err(backend)?,
            attributes,
    })
}

async fn load_events_by_ids(pool: &PgPool, event_ids: &[i64]) -> Result<Vec<Event>, StoreError> {
    if event_ids.is_empty() {
        return Ok(vec![]);
    }
    let rows = sqlx::query(
        "SELECT id, event_type, title, description, contact_email, impact, start_date, \
        end_date, system, created_by, version, status FROM events WHERE id = ANY($1)",
    )
    .bind(event_ids)
    .fetch_all(pool)
    .await
    .map_err(backend)?;

    let component_rows = sqlx::query(
        "SELECT event_id, component_id FROM event_components WHERE event_id = ANY($1) ORDER BY component_id",
    )
    .bind(event_ids)
    .fetch_all(pool)
    .await
    .map_err(backend)?;
    let mut components_by_event: HashMap<i64, Vec<i64>> = HashMap::new();
    for row in component_rows {
        let event_id: i64 = row.try_get("event_id").map_err(backend)?;
        let component_id: i64 = row.try_get("component_id").map_err(backend)?;
        components_by_event.entry(event_id).or_default().push(component_id);
    }

    let update_rows = sqlx::query(
        "SELECT event_id, id, status, text, timestamp FROM event_updates WHERE event_id = ANY($1) ORDER BY event_id, id",
    )
    .bind(event_ids)
    .fetch_all(pool)
    .await
    .map_err(backend)?;
    let mut updates_by_event: HashMap<i64, Vec<EventUpdate>> = HashMap::new();
    for row in update_rows {
        let event_id: i64 = row.try_get("event_id").map_err(backend)?;
        let id: i64 = row.try_get("id").map_err(backend)?;
        let status: String = row.try_get("status").map_err(backend)?;
        let text: String = row.try_get("text").map_err(backend)?;
        let timestamp: OffsetDateTime = row.try_get("timestamp").map_err(backend)?;
        updates_by_event.entry(event_id).or_default().push(EventUpdate {
                id,
                status: status_from_str(&status),
                text,
                timestamp,
        });
    }

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let id: i64 = row.try_get("id").map_err(backend)?;
        let event_type: String = row.try_get("event_type").map_err(backend)?;
        let status: String = row.try_get("status").map_err(backend)?;
        out.push(Event {
                id,
                event_type: event_type_from_str(&event_type),
                title: row.try_get("title").map_err(backend)?,
                description: row.try_get("description").map_err(backend)?,
                contact_email: row.try_get("contact_email").map_err(backend)?,
                impact: {
                    let impact: i16 = row.try_get("impact").map_err(backend)?;
                    impact as u8
                },
                start_date: row.try_get("start_date").map_err(backend)?,
                end_date: row.try_get("end_date").map_err(backend)?,
                system: row.try_get("system").map_err(backend)?,
                created_by: row.try_get("created_by").map_err(backend)?,
                version: row.try_get("version").map_err(backend)?,
                status: status_from_str(&status),
                components: components_by_event.remove(&id).unwrap_or_default(),
                updates: updates_by_event.remove(&id).unwrap_or_default(),
        });
    }
    Ok(out)
}

async fn insert_event(
    tx: &mut Transaction<'_, Postgres>,
    spec: NewEventSpec,
) -> Result<i64, StoreError> {
    let row = sqlx::query(
        "INSERT INTO events (event_type, title, description, contact_email, impact, \
        start_date, end_date, system, created_by, version, status) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 1, $10) RETURNING id",
)
.bind(event_type_as_str(spec.event_type))
.bind(&spec.title)
.bind(&spec.description)
.bind(&spec.contact_email)
.bind(spec.impact as i16)
.bind(spec.start_date)
.bind(spec.end_date)
.bind(spec.system)
.bind(&spec.created_by)
.bind(spec.first_updates.last().map(|(s, _, _)| status_as_str(*s)).unwrap_or("detected"))
.fetch_one(&mut **tx)
.await
.map_err(backend)?;
let event_id: i64 = row.try_get("id").map_err(backend)?;

for component_id in &spec.components {
    sqlx::query("INSERT INTO event_components (event_id, component_id) VALUES ($1, $2)")
    .bind(event_id)
    .bind(component_id)
    .execute(&mut **tx)
    .await
    .map_err(backend)?;
}

for (idx, (status, text, timestamp)) in spec.first_updates.into_iter().enumerate() {
    sqlx::query(
        "INSERT INTO event_updates (event_id, id, status, text, timestamp) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(event_id)
    .bind(idx as i64)
    .bind(status_as_str(status))
    .bind(text)
    .bind(timestamp)
    .execute(&mut **tx)
    .await
    .map_err(backend)?;
}

Ok(event_id)
}

impl EventStore for SqlxEventStore {
    async fn list_components(&self) -> Result<Vec<Component>, StoreError> {
        let rows = sqlx::query("SELECT id, name FROM components ORDER BY id")
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        let ids: Vec<i64> = rows
        .iter()
        .map(|r| r.try_get("id").map_err(backend))
        .collect::<Result<_, _>>()?;
        let mut attributes = load_component_attributes(&self.pool, &ids).await?;
        rows.iter()
        .map(|row| {
                let id: i64 = row.try_get("id").map_err(backend)?;
                component_from_row(row, attributes.remove(&id).unwrap_or_default())
        })
        .collect()
    }

    async fn get_component(&self, id: i64) -> Result<Option<Component>, StoreError> {
        let row = sqlx::query("SELECT id, name FROM components WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        let Some(row) = row else { return Ok(None) };
        let mut attributes = load_component_attributes(&self.pool, &[id]).await?;
        Ok(Some(component_from_row(&row, attributes.remove(&id).unwrap_or_default())?))
    }

    async fn get_components(&self, ids: &[i64]) -> Result<Vec<Component>, StoreError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = sqlx::query("SELECT id, name FROM components WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        let mut attributes = load_component_attributes(&self.pool, ids).await?;
        rows.iter()
        .map(|row| {
                let id: i64 = row.try_get("id").map_err(backend)?;
                component_from_row(row, attributes.remove(&id).unwrap_or_default())
        })
        .collect()
    }

    async fn find_component_by_identity(
        &self,
        name: &str,
        attributes: &[Attribute],
    ) -> Result<Option<Component>, StoreError> {
        // Attribute sets are unordered, so the uniqueness check is done in
        // Rust over every component sharing the name rather than a SQL
        // equality.
        let rows = sqlx::query("SELECT id, name FROM components WHERE name = $1")
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        let ids: Vec<i64> = rows
        .iter()
        .map(|r| r.try_get("id").map_err(backend))
        .collect::<Result<_, _>>()?;
        let mut attrs_by_id = load_component_attributes(&self.pool, &ids).await?;
        for row in &rows {
            let id: i64 = row.try_get("id").map_err(backend)?;
            let component = component_from_row(row, attrs_by_id.remove(&id).unwrap_or_default())?;
            if component.same_identity(name, attributes) {
                return Ok(Some(component));
            }
        }
        Ok(None)
    }

    async fn insert_component(
        &self,
        name: String,
        attributes: Vec<Attribute>,
    ) -> Result<Component, StoreError> {
        let mut tx = self.pool.begin().await.map_err(backend)?;
        let row = sqlx::query("INSERT INTO components (name) VALUES ($1) RETURNING id")
        .bind(&name)
        .fetch_one(&mut *tx)
        .await
        .map_err(backend)?;
        let id: i64 = row.try_get("id").map_err(backend)?;
        for attribute in &attributes {
            sqlx::query(
                "INSERT INTO component_attributes (component_id, name, value) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(&attribute.name)
            .bind(&attribute.value)
            .execute(&mut *tx)
            .await
            .map_err(backend)?;
        }
        tx.commit().await.map_err(backend)?;
        Ok(Component { id, name, attributes })
    }

    async fn get_event(&self, id: i64) -> Result<Option<Event>, StoreError> {
        Ok(load_events_by_ids(&self.pool, &[id]).await?.into_iter().next())
    }

    async fn open_incidents_covering(&self, component_ids: &[i64]) -> Result<Vec<Event>, StoreError> {
        if component_ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = sqlx::query(
            "SELECT DISTINCT e.id FROM events e JOIN event_components ec ON ec.event_id = e.id \
            WHERE e.event_type = 'incident' AND e.end_date IS NULL AND ec.component_id = ANY($1) \
            ORDER BY e.id",
        )
        .bind(component_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        let ids: Vec<i64> = rows
        .iter()
        .map(|r| r.try_get("id").map_err(backend))
        .collect::<Result<_, _>>()?;
        load_events_by_ids(&self.pool, &ids).await
    }

    async fn closed_incidents_for_component(&self, component_id: i64) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query(
            "SELECT DISTINCT e.id FROM events e JOIN event_components ec ON ec.event_id = e.id \
            WHERE e.event_type = 'incident' AND e.end_date IS NOT NULL AND e.impact >= 1 \
            AND ec.component_id = $1 ORDER BY e.id",
        )
        .bind(component_id)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        let ids: Vec<i64> = rows
        .iter()
        .map(|r| r.try_get("id").map_err(backend))
        .collect::<Result<_, _>>()?;
        load_events_by_ids(&self.pool, &ids).await
    }

    async fn list_events(
        &self,
        filter: &EventFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Event>, u64), StoreError> {
        // The filter set is small and every field is optional, so we build
        // the predicate dynamically rather than maintaining one static
        // query per combination.
        let mut query = String::from("SELECT e.id FROM events e WHERE TRUE");
        let mut idx = 1;
        let mut args: Vec<FilterArg> = vec![];
        if let Some(start) = filter.start_date {
            query.push_str(&format!(" AND e.start_date >= ${idx}"));
            args.push(FilterArg::Time(start));
            idx += 1;
        }
        if let Some(end) = filter.end_date {
            query.push_str(&format!(" AND e.start_date <= ${idx}"));
            args.push(FilterArg::Time(end));
            idx += 1;
        }
        if let Some(impact) = filter.impact {
            query.push_str(&format!(" AND e.impact = ${idx}"));
            args.push(FilterArg::I16(impact as i16));
            idx += 1;
        }
        if let Some(component_id) = filter.component_id {
            query.push_str(&format!(
                    " AND EXISTS (SELECT 1 FROM event_components ec WHERE ec.event_id = e.id AND ec.component_id = ${idx})"
            ));
            args.push(FilterArg::I64(component_id));
            idx += 1;
        }
        if let Some(system) = filter.system {
            query.push_str(&format!(" AND e.system = ${idx}"));
            args.push(FilterArg::Bool(system));
            idx += 1;
        }
        if let Some(active) = filter.active {
            query.push_str(&format!(
                    " AND e.end_date IS {}",
                    if active { "NULL" } else { "NOT NULL" }
            ));
        }
        if let Some(event_type) = filter.event_type {
            query.push_str(&format!(" AND e.event_type = ${idx}"));
            args.push(FilterArg::Text(event_type_as_str(event_type).to_string()));
            idx += 1;
        }
        let _ = idx;
        query.push_str(" ORDER BY e.id");

        let mut sql_query = sqlx::query(&query);
        for arg in &args {
            sql_query = match arg {
                FilterArg::Time(t) => sql_query.bind(t),
                FilterArg::I16(v) => sql_query.bind(v),
                FilterArg::I64(v) => sql_query.bind(v),
                FilterArg::Bool(v) => sql_query.bind(v),
                FilterArg::Text(v) => sql_query.bind(v),
            };
        }
        let rows = sql_query.fetch_all(&self.pool).await.map_err(backend)?;
        let all_ids: Vec<i64> = rows
        .iter()
        .map(|r| r.try_get("id").map_err(backend))
        .collect::<Result<_, _>>()?;

        let total = all_ids.len() as u64;
        let page = page.max(1);
        let start = ((page - 1) as usize) * (limit as usize);
        let page_ids: Vec<i64> = all_ids.into_iter().skip(start).take(limit as usize).collect();
        let events = load_events_by_ids(&self.pool, &page_ids).await?;
        Ok((events, total))
    }

    async fn commit(&self, changeset: Changeset) -> Result<ChangesetResult, StoreError> {
        let mut tx = self.pool.begin().await.map_err(backend)?;
        let mut result = ChangesetResult::default();

        for spec in changeset.new_events {
            let id = insert_event(&mut tx, spec).await?;
            result.new_event_ids.push(id);
        }

        for patch in changeset.patches {
            // Row-lock the event for the remainder of the transaction so a
            // concurrent merge/patch against the same event serializes
            // behind this one.
            let locked = sqlx::query("SELECT version FROM events WHERE id = $1 FOR UPDATE")
            .bind(patch.event_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(backend)?
            .ok_or_else(|| StoreError::NotFound(format!("event {}", patch.event_id)))?;
            let current_version: i64 = locked.try_get("version").map_err(backend)?;

            if let Some(expected) = patch.expected_version {
                if expected != current_version {
                    return Err(StoreError::VersionConflict);
                }
            }

            let mut set_clauses: Vec<String> = vec![];
            if patch.set_title.is_some() {
                set_clauses.push("title = $title".into());
            }
            if patch.set_description.is_some() {
                set_clauses.push("description = $description".into());
            }
            if patch.set_contact_email.is_some() {
                set_clauses.push("contact_email = $contact_email".into());
            }
            if patch.set_impact.is_some() {
                set_clauses.push("impact = $impact".into());
            }
            if patch.set_start_date.is_some() {
                set_clauses.push("start_date = $start_date".into());
            }
            if patch.clear_end_date {
                set_clauses.push("end_date = NULL".into());
            } else if patch.set_end_date.is_some() {
                set_clauses.push("end_date = $end_date".into());
            }
            if let Some((status, _, _)) = &patch.append_update {
                set_clauses.push("status = $status".into());
            }
            if patch.expected_version.is_some() {
                set_clauses.push("version = version + 1".into());
            }

            if !set_clauses.is_empty() {
                apply_event_patch(&mut tx, &patch, &set_clauses).await?;
            }

            if let Some(components) = &patch.set_components {
                sqlx::query("DELETE FROM event_components WHERE event_id = $1")
                .bind(patch.event_id)
                .execute(&mut *tx)
                .await
                .map_err(backend)?;
                for component_id in components {
                    sqlx::query(
                        "INSERT INTO event_components (event_id, component_id) VALUES ($1, $2)",
                    )
                    .bind(patch.event_id)
                    .bind(component_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(backend)?;
                }
            }

            if let Some((status, text, timestamp)) = patch.append_update {
                let next_id_row = sqlx::query(
                    "SELECT COALESCE(MAX(id) + 1, 0) AS next_id FROM event_updates WHERE event_id = $1",
                )
                .bind(patch.event_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(backend)?;
                let next_id: i64 = next_id_row.try_get("next_id").map_err(backend)?;
                sqlx::query(
                    "INSERT INTO event_updates (event_id, id, status, text, timestamp) VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(patch.event_id)
                .bind(next_id)
                .bind(status_as_str(status))
                .bind(text)
                .bind(timestamp)
                .execute(&mut *tx)
                .await
                .map_err(backend)?;
            }

            if let Some((update_id, new_text)) = &patch.edit_update {
                let changed = sqlx::query(
                    "UPDATE event_updates SET text = $1 WHERE event_id = $2 AND id = $3",
                )
                .bind(new_text)
                .bind(patch.event_id)
                .bind(update_id)
                .execute(&mut *tx)
                .await
                .map_err(backend)?
                .rows_affected();
                if changed == 0 {
                    return Err(StoreError::NotFound(format!("update {update_id}")));
                }
            }

            if patch.expected_version.is_some() {
                result.new_versions.insert(patch.event_id, current_version + 1);
            }
        }

        tx.commit().await.map_err(backend)?;
        Ok(result)
    }
}

enum FilterArg {
    Time(OffsetDateTime),
    I16(i16),
    I64(i64),
    Bool(bool),
    Text(String),
}

/// Applies the non-component, non-update fields of one [`EventPatchSpec`]
/// with a single `UPDATE`, binding only the columns that were actually
/// requested.
async fn apply_event_patch(
    tx: &mut Transaction<'_, Postgres>,
    patch: &sd_core::store::EventPatchSpec,
    set_clauses: &[String],
) -> Result<(), StoreError> {
    let sql = format!(
        "UPDATE events SET {} WHERE id = $event_id",
        set_clauses.join(", ")
    );
    // sqlx's positional binder doesn't support named placeholders, so the
    // query is built with named markers above for readability and then
    // rewritten to positional ones here, in the order they're bound below.
    let mut positional = sql;
    let mut next = 1;
    let mut bind_order: Vec<&str> = vec![];
    for marker in [
        "$title",
        "$description",
        "$contact_email",
        "$impact",
        "$start_date",
        "$end_date",
        "$status",
        "$event_id",
    ] {
        if positional.contains(marker) {
            positional = positional.replace(marker, &format!("${next}"));
            bind_order.push(marker);
            next += 1;
        }
    }

    let mut query = sqlx::query(&positional);
    for marker in bind_order {
        query = match marker {
            "$title" => query.bind(patch.set_title.as_ref()),
            "$description" => query.bind(patch.set_description.as_ref()),
            "$contact_email" => query.bind(patch.set_contact_email.as_ref()),
            "$impact" => query.bind(patch.set_impact.map(|v| v as i16)),
            "$start_date" => query.bind(patch.set_start_date),
            "$end_date" => query.bind(patch.set_end_date),
            "$status" => query.bind(patch.append_update.as_ref().map(|(s, _, _)| status_as_str(*s))),
            "$event_id" => query.bind(patch.event_id),
            _ => unreachable!(),
        };
    }
    query.execute(&mut **tx).await.map_err(backend)?;
    Ok(())
}
