//! `GET/POST /v2/events`, `GET/PATCH /v2/events/:id`,
//! `POST /v2/events/:id/extract`,
//! `PATCH /v2/events/:id/updates/:updateId`. The `/v2/incidents…`
//! aliases mount this same blueprint at a second path, so they must
//! behave identically — see `routes::v2::mod`.
use crate::auth::jwks::JwksClient;
use crate::auth::resolve_actor;
use crate::configuration::{AuthConfig, RbacConfig};
use crate::schemas::{EventV2Dto, PagedResponse, Pagination};
use crate::store::SqlxEventStore;
use pavex::extract::body::JsonBody;
use pavex::extract::query::QueryParams;
use pavex::extract::route::RouteParams;
use pavex::http::HeaderMap;
use pavex::response::{body::Json, Response};
use sd_core::error::CoreError;
use sd_core::lifecycle::{self, CreateEventRequest, PatchEventRequest};
use sd_core::store::EventFilter;
use sd_core::types::EventType;
use sd_core::visibility;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

fn parse_rfc3339(raw: &str) -> Result<OffsetDateTime, CoreError> {
    OffsetDateTime::parse(raw, &Rfc3339)
    .map_err(|_| CoreError::Validation(format!("not a valid RFC 3339 timestamp: {raw}")))
}

fn parse_event_type(raw: &str) -> Result<EventType, CoreError> {
    match raw {
        "incident" => Ok(EventType::Incident),
        "maintenance" => Ok(EventType::Maintenance),
        "info" => Ok(EventType::Info),
        other => Err(CoreError::Validation(format!("unknown event type: {other}"))),
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ListEventsQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub impact: Option<u8>,
    #[serde(default)]
    pub components: Option<i64>,
    #[serde(default)]
    pub system: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
}

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 200;

/// `GET /v2/events`: every accepted filter combines with AND;
/// anonymous visibility redaction and the "own only" pending-review
/// gate apply after the store read, so pagination totals are
/// computed over the *unfiltered-by-visibility* set — a caller paging
/// through results never sees the total shrink as hidden events are
/// stripped from their own page.
pub async fn list_events(
    query: QueryParams<ListEventsQuery>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    let q = query.0;

    let filter = EventFilter {
        start_date: q.start_date.as_deref().map(parse_rfc3339).transpose()?,
        end_date: q.end_date.as_deref().map(parse_rfc3339).transpose()?,
        impact: q.impact,
        component_id: q.components,
        system: q.system,
        active: q.active,
        event_type: q.event_type.as_deref().map(parse_event_type).transpose()?,
    };
    let page = q.page.unwrap_or(1).max(1);
    let limit = q.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let (events, total) = store.list_events(&filter, page, limit).await?;
    let visible = visibility::events_for_actor(events, &actor);
    let dtos: Vec<EventV2Dto> = visible.iter().map(EventV2Dto::from).collect();

    let body = PagedResponse {
        data: dtos,
        pagination: Pagination::new(page, limit, total),
    };
    Json::new(body)
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug)]
#[RouteParams]
pub struct EventIdParams {
    pub id: i64,
}

pub async fn get_event(
    params: RouteParams<EventIdParams>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    let event = store
    .get_event(params.0.id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;
    let visible = visibility::event_for_actor(event, &actor)
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;
    Json::new(EventV2Dto::from(&visible))
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug, serde::Deserialize)]
pub struct CreateEventBody {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    pub impact: u8,
    pub components: Vec<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub system: bool,
    /// Present only so [`validate_create`] can reject a request that
    /// carries it at all — its value is never read.
    #[serde(default)]
    pub updates: Option<serde_json::Value>,
}

#[derive(Debug, serde::Serialize)]
pub struct CreateResultDto {
    pub component_id: i64,
    pub incident_id: Option<i64>,
    pub error: Option<String>,
}

pub async fn create_event(
    body: JsonBody<CreateEventBody>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    let CreateEventBody {
        event_type,
        title,
        description,
        contact_email,
        impact,
        components,
        start_date,
        end_date,
        system,
        updates,
    } = body.0;

    let req = CreateEventRequest {
        event_type,
        title,
        description,
        contact_email,
        impact,
        components,
        start_date,
        end_date,
        system,
        updates_present: updates.is_some(),
    };
    let now = OffsetDateTime::now_utc();
    let results = lifecycle::create(store, &actor, req, now).await?;
    let dtos: Vec<CreateResultDto> = results
    .into_iter()
    .map(|r| CreateResultDto {
            component_id: r.component_id,
            incident_id: r.incident_id,
            error: r.error,
    })
    .collect();
    Json::new(dtos)
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug, serde::Deserialize)]
pub struct PatchEventBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub impact: Option<u8>,
    pub status: sd_core::types::UpdateStatus,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub update_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub components: Option<Vec<i64>>,
}

pub async fn patch_event(
    params: RouteParams<EventIdParams>,
    body: JsonBody<PatchEventBody>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    let PatchEventBody {
        title,
        description,
        impact,
        status,
        message,
        update_date,
        start_date,
        end_date,
        version,
        components,
    } = body.0;

    let req = PatchEventRequest {
        title,
        description,
        impact,
        status,
        message,
        update_date,
        start_date,
        end_date,
        version,
        components,
    };
    let outcome = lifecycle::patch(store, &actor, params.0.id, req).await?;
    Json::new(EventV2Dto::from(&outcome.event))
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug, serde::Deserialize)]
pub struct ExtractBody {
    pub components_to_move: Vec<i64>,
}

pub async fn extract_event(
    params: RouteParams<EventIdParams>,
    body: JsonBody<ExtractBody>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    let now = OffsetDateTime::now_utc();
    let new_id = lifecycle::extract(store, &actor, params.0.id, body.0.components_to_move, now)
    .await?;
    let new_event = store
    .get_event(new_id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;
    Json::new(EventV2Dto::from(&new_event))
    .map(|json| Response::created().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug)]
#[RouteParams]
pub struct EventUpdateIdParams {
    pub id: i64,
    pub update_id: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct PatchUpdateBody {
    pub text: String,
}

pub async fn patch_update(
    params: RouteParams<EventUpdateIdParams>,
    body: JsonBody<PatchUpdateBody>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    let event = lifecycle::edit_update(
        store,
        &actor,
        params.0.id,
        params.0.update_id,
        body.0.text,
    )
    .await?;
    Json::new(EventV2Dto::from(&event))
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}
