//! `GET/POST /v2/components`, `GET /v2/components/:id`: the component
//! catalog. Reads are open to anonymous callers — the catalog carries
//! no sensitive fields — writes go through [`sd_core::registry`], which
//! enforces attribute uniqueness and the mandatory `region` attribute,
//! gated to admins only.
use crate::auth::jwks::JwksClient;
use crate::auth::resolve_actor;
use crate::configuration::{AuthConfig, RbacConfig};
use crate::schemas::ComponentDto;
use crate::store::SqlxEventStore;
use pavex::extract::body::JsonBody;
use pavex::extract::route::RouteParams;
use pavex::http::HeaderMap;
use pavex::response::{body::Json, Response};
use sd_core::error::CoreError;
use sd_core::registry;
use sd_core::types::{Attribute, Role};

pub async fn list_components(store: &SqlxEventStore) -> Result<Response, CoreError> {
    let components = store.list_components().await?;
    let dtos: Vec<ComponentDto> = components.iter().map(ComponentDto::from).collect();
    Json::new(dtos)
        .map(|json| Response::ok().set_typed_body(json))
        .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug, serde::Deserialize)]
pub struct CreateComponent {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

pub async fn create_component(
    body: JsonBody<CreateComponent>,
    headers: &HeaderMap,
    store: &SqlxEventStore,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &JwksClient,
) -> Result<Response, CoreError> {
    let actor = resolve_actor(headers, auth_config, rbac_config, jwks_client).await?;
    match actor.role {
        Role::Admin => {}
        Role::Anonymous => return Err(CoreError::Unauthorized),
        _ => return Err(CoreError::Forbidden),
    }

    let CreateComponent { name, attributes } = body.0;
    let component = registry::create_component(store, name, attributes).await?;
    Json::new(ComponentDto::from(&component))
        .map(|json| Response::created().set_typed_body(json))
        .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}

#[derive(Debug)]
#[RouteParams]
pub struct ComponentIdParams {
    pub id: i64,
}

pub async fn get_component(
    params: RouteParams<ComponentIdParams>,
    store: &SqlxEventStore,
) -> Result<Response, CoreError> {
    let component = store
        .get_component(params.0.id)
        .await?
        .ok_or_else(|| CoreError::NotFound("component not found".to_string()))?;
    Json::new(ComponentDto::from(&component))
        .map(|json| Response::ok().set_typed_body(json))
        .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}
