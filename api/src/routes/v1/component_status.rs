//! `GET`/`POST /v1/component_status`: the legacy single-component
//! incident-reporting endpoint, kept byte-compatible with the original
//! payload shape while routing through the same lifecycle engine v2
//! uses.
use crate::auth::jwks::JwksClient;
use crate::auth::resolve_actor;
use crate::configuration::{AuthConfig, RbacConfig};
use crate::schemas::{ComponentStatusDto, EventV1Dto};
use crate::store::SqlxEventStore;
use pavex::extract::body::JsonBody;
use pavex::http::HeaderMap;
use pavex::response::{body::Json, Response};
use sd_core::error::CoreError;
use sd_core::lifecycle::{self, CreateEventRequest};
use sd_core::types::{Attribute, EventType};
use time::OffsetDateTime;

pub async fn get_component_status(store: &SqlxEventStore) -> Result<Response, CoreError> {
    let components = store.list_components().await?;
    let mut dtos = Vec::with_capacity(components.len());
    for component in &components {
        let incidents = store.open_incidents_covering(&[component.id]).await?;
        dtos.push(ComponentStatusDto {
                id: component.id,
                name: component.name.clone(),
                attributes: component.attributes.clone(),
                incidents: incidents.iter().map(EventV1Dto::from).collect(),
        });
    }
    Json::new(dtos)
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug, serde::Deserialize)]
pub struct PostComponentStatus {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub impact: u8,
    pub text: String,
}

/// Reports an incident against a single component, identified by
/// `(name, attributes)` rather than id (the legacy caller never learned
/// the component's synthetic id). Runs the same raise/merge/stay
/// disposition as `POST /v2/events`, but a component already
/// covered at an equal-or-higher impact is reported back as a 409
/// rather than silently creating a redundant incident — see DESIGN.md
/// for why this diverges from the general multi-component algorithm.
pub async fn post_component_status(
    body: JsonBody<PostComponentStatus>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    let PostComponentStatus {
        name,
        attributes,
        impact,
        text,
    } = body.0;

    let component = store
    .find_component_by_identity(&name, &attributes)
    .await?
    .ok_or_else(|| CoreError::Validation(format!("component does not exist: {name}")))?;

    let covering = store.open_incidents_covering(&[component.id]).await?;
    if let Some(existing) = covering.first() {
        if impact <= existing.impact {
            return Err(CoreError::DuplicateIncident {
                    existing_incident_id: existing.id,
                    existing_incident_title: existing.title.clone(),
            });
        }
    }
    let was_free = covering.is_empty();

    let now = OffsetDateTime::now_utc();
    let req = CreateEventRequest {
        event_type: EventType::Incident,
        title: text.clone(),
        description: text,
        contact_email: None,
        impact,
        components: vec![component.id],
        start_date: now,
        end_date: None,
        system: false,
        updates_present: false,
    };
    let mut results = lifecycle::create(store, &actor, req, now).await?;
    let entry = results.remove(0);
    let incident_id = entry
    .incident_id
    .ok_or_else(|| CoreError::Validation("incident was not created".to_string()))?;
    let incident = store
    .get_event(incident_id)
    .await?
    .ok_or_else(|| CoreError::NotFound("incident not found".to_string()))?;
    let dto = EventV1Dto::from(&incident);

    let response = if was_free {
        Response::created()
    } else {
        Response::ok()
    };
    Json::new(dto)
    .map(|json| response.set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}
