//! Generated by `cargo px` from `sd_api`'s blueprint (`sd_api::api_blueprint`,
//! see `sd_api/src/bin/bp.rs`). Hand-maintained here in the shape the real
//! `pavex` CLI would emit it — see DESIGN.md for why this crate isn't
//! produced by an actual `cargo px` invocation in this workspace.
//!
//! Do not hand-edit the route table or the constructor wiring without also
//! updating `sd_api::blueprint::api_blueprint` to match: the two must stay
//! in lockstep the way a real generated crate and its source blueprint do.
use pavex::http::{HeaderValue, Method, StatusCode};
use pavex::request::RequestHead;
use pavex::response::{IntoResponse, Response};
use pavex::routing::Router;
use sd_api::auth::jwks::JwksClient;
use sd_api::configuration::{AuthConfig, Config, RbacConfig, ServerConfig};
use sd_api::store::SqlxEventStore;
use sd_api::telemetry::RootSpan;
use std::sync::Arc;

/// Every process-lifetime singleton the blueprint's constructors derive,
/// plus the configuration sections routes read directly (business logic
/// stays out of here; this is wiring only).
pub struct ApplicationState {
    store: SqlxEventStore,
    jwks_client: JwksClient,
    http_client: reqwest::Client,
    auth_config: AuthConfig,
    rbac_config: RbacConfig,
    server_config: ServerConfig,
}

#[derive(Debug)]
pub enum ApplicationStateError {
    CreateDbPool(sqlx::Error),
}

impl std::fmt::Display for ApplicationStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStateError::CreateDbPool(e) => write!(f, "failed to create the database pool: {e}"),
        }
    }
}

impl std::error::Error for ApplicationStateError {}

pub async fn build_application_state(config: Config) -> Result<ApplicationState, ApplicationStateError> {
    let pool = config
        .database
        .get_pool()
        .await
        .map_err(ApplicationStateError::CreateDbPool)?;
    let jwks_client = JwksClient::from_config(&config.auth);
    Ok(ApplicationState {
            store: SqlxEventStore::new(pool),
            jwks_client,
            http_client: reqwest::Client::new(),
            auth_config: config.auth,
            rbac_config: config.rbac,
            server_config: config.server,
    })
}

struct ServerState {
    router: Router<u32>,
    application_state: ApplicationState,
}

/// The route table, mirroring `sd_api::blueprint::api_blueprint`'s
/// `nest_at` layout one-for-one. `/v2/incidents...` is registered a
/// second time, pointing at the same ids as `/v2/events...`, since the
/// blueprint mounts the same sub-blueprint at both prefixes.
fn build_router() -> Result<Router<u32>, pavex::routing::InsertError> {
    let mut router = Router::new();
    router.insert("/health", 0)?;
    router.insert("/auth/login", 1)?;
    router.insert("/auth/callback", 2)?;
    router.insert("/auth/token", 3)?;
    router.insert("/auth/logout", 4)?;
    router.insert("/v1/component_status", 5)?;
    router.insert("/v1/incidents", 6)?;
    router.insert("/v2/availability", 7)?;
    router.insert("/v2/components", 8)?;
    router.insert("/v2/components/:id", 9)?;
    router.insert("/v2/events", 10)?;
    router.insert("/v2/events/:id", 11)?;
    router.insert("/v2/events/:id/extract", 12)?;
    router.insert("/v2/events/:id/updates/:update_id", 13)?;
    router.insert("/v2/incidents", 10)?;
    router.insert("/v2/incidents/:id", 11)?;
    router.insert("/v2/incidents/:id/extract", 12)?;
    router.insert("/v2/incidents/:id/updates/:update_id", 13)?;
    Ok(router)
}

pub async fn run(
    server_builder: pavex::hyper::server::Builder<pavex::hyper::server::conn::AddrIncoming>,
    application_state: ApplicationState,
) -> Result<(), pavex::Error> {
    let server_state = Arc::new(ServerState {
        router: build_router().map_err(pavex::Error::new)?,
        application_state,
    });
    let make_service = pavex::hyper::service::make_service_fn(move |_| {
            let server_state = server_state.clone();
            async move {
                Ok::<_, pavex::hyper::Error>(pavex::hyper::service::service_fn(move |request| {
                            let server_state = server_state.clone();
                            async move {
                                let response = route_request(request, server_state).await;
                                let response = pavex::hyper::Response::from(response);
                                Ok::<_, pavex::hyper::Error>(response)
                            }
                }))
            }
    });
    server_builder
    .serve(make_service)
    .await
    .map_err(pavex::Error::new)
}

fn method_not_allowed(allowed: &'static str) -> Response {
    Response::method_not_allowed()
        .insert_header(pavex::http::header::ALLOW, HeaderValue::from_static(allowed))
}

async fn route_request(
    request: pavex::http::Request<pavex::hyper::body::Body>,
    server_state: Arc<ServerState>,
) -> Response {
    let (request_head, request_body) = request.into_parts();
    let request_head: RequestHead = request_head.into();

    // The blueprint's single `wrap(f!(telemetry::logger))` middleware is
    // inlined here rather than invoked through `pavex::middleware::Next`:
    // there is exactly one middleware in this service, so the generated
    // dispatch collapses to "open a span, run the route, record the
    // status" instead of building a middleware chain.
    let root_span = RootSpan::new(&request_head);
    let response = dispatch(request_head, request_body, &server_state).await;
    root_span.record_status_code(response.status().as_u16());
    response
}

async fn dispatch(
    request_head: RequestHead,
    request_body: pavex::hyper::body::Body,
    server_state: &ServerState,
) -> Response {
    let matched_route = match server_state.router.at(request_head.uri.path()) {
        Ok(m) => m,
        Err(_) => return Response::not_found().box_body(),
    };
    let route_id = *matched_route.value;
    let url_params: pavex::extract::route::RawRouteParams<'_, '_> = matched_route.params.into();
    let state = &server_state.application_state;

    match route_id {
        0 => match &request_head.method {
            &Method::GET => health_handler().await,
            _ => method_not_allowed("GET"),
        },
        1 => match &request_head.method {
            &Method::GET => login_handler(&request_head, state).await,
            _ => method_not_allowed("GET"),
        },
        2 => match &request_head.method {
            &Method::GET => callback_handler(&request_head).await,
            _ => method_not_allowed("GET"),
        },
        3 => match &request_head.method {
            &Method::POST => token_handler(&request_head, request_body, state).await,
            _ => method_not_allowed("POST"),
        },
        4 => match &request_head.method {
            &Method::POST => logout_handler().await,
            _ => method_not_allowed("POST"),
        },
        5 => match &request_head.method {
            &Method::GET => get_component_status_handler(state).await,
            &Method::POST => post_component_status_handler(&request_head, request_body, state).await,
            _ => method_not_allowed("GET, POST"),
        },
        6 => match &request_head.method {
            &Method::GET => list_incidents_handler(state).await,
            _ => method_not_allowed("GET"),
        },
        7 => match &request_head.method {
            &Method::GET => get_availability_handler(&request_head, state).await,
            _ => method_not_allowed("GET"),
        },
        8 => match &request_head.method {
            &Method::GET => list_components_handler(state).await,
            &Method::POST => create_component_handler(&request_head, request_body, state).await,
            _ => method_not_allowed("GET, POST"),
        },
        9 => match &request_head.method {
            &Method::GET => get_component_handler(url_params, state).await,
            _ => method_not_allowed("GET"),
        },
        10 => match &request_head.method {
            &Method::GET => list_events_handler(&request_head, state).await,
            &Method::POST => create_event_handler(&request_head, request_body, state).await,
            _ => method_not_allowed("GET, POST"),
        },
        11 => match &request_head.method {
            &Method::GET => get_event_handler(url_params, &request_head, state).await,
            &Method::PATCH => patch_event_handler(url_params, &request_head, request_body, state).await,
            _ => method_not_allowed("GET, PATCH"),
        },
        12 => match &request_head.method {
            &Method::POST => extract_event_handler(url_params, &request_head, request_body, state).await,
            _ => method_not_allowed("POST"),
        },
        13 => match &request_head.method {
            &Method::PATCH => patch_update_handler(url_params, &request_head, request_body, state).await,
            _ => method_not_allowed("PATCH"),
        },
        _ => Response::not_found().box_body(),
    }
}

fn status_response(status: StatusCode) -> Response {
    <StatusCode as IntoResponse>::into_response(status)
}

async fn health_handler() -> Response {
    status_response(sd_api::routes::health::health())
}

async fn query_params<T: serde::de::DeserializeOwned>(
    request_head: &RequestHead,
) -> Result<pavex::extract::query::QueryParams<T>, Response> {
    pavex::extract::query::QueryParams::extract(request_head)
    .map_err(|e| pavex::extract::query::errors::ExtractQueryParamsError::into_response(&e))
}

async fn json_body<T: serde::de::DeserializeOwned>(
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
) -> Result<pavex::extract::body::JsonBody<T>, Response> {
    let limit = <pavex::extract::body::BodySizeLimit as Default>::default();
    let buffered = pavex::extract::body::BufferedBody::extract(request_head, request_body, limit)
    .await
    .map_err(|e| pavex::extract::body::errors::ExtractBufferedBodyError::into_response(&e))?;
    pavex::extract::body::JsonBody::extract(request_head, &buffered)
    .map_err(|e| pavex::extract::body::errors::ExtractJsonBodyError::into_response(&e))
}

async fn login_handler(request_head: &RequestHead, state: &ApplicationState) -> Response {
    let query = match query_params(request_head).await {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    match sd_api::auth::oidc::login(query, &state.auth_config, &state.server_config) {
        Ok(resp) => resp,
        Err(e) => sd_api::auth::oidc::OidcError::into_response(&e),
    }
}

async fn callback_handler(request_head: &RequestHead) -> Response {
    let query = match query_params(request_head).await {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    match sd_api::auth::oidc::callback(query) {
        Ok(resp) => resp,
        Err(e) => sd_api::auth::oidc::OidcError::into_response(&e),
    }
}

async fn token_handler(
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
    state: &ApplicationState,
) -> Response {
    let body = match json_body(request_head, request_body).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    match sd_api::auth::oidc::token(body, &state.auth_config, &state.server_config, &state.http_client).await {
        Ok(resp) => resp,
        Err(e) => sd_api::auth::oidc::OidcError::into_response(&e),
    }
}

async fn logout_handler() -> Response {
    status_response(sd_api::auth::oidc::logout())
}

async fn get_component_status_handler(state: &ApplicationState) -> Response {
    match sd_api::routes::v1::component_status::get_component_status(&state.store).await {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn post_component_status_handler(
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
    state: &ApplicationState,
) -> Response {
    let body = match json_body(request_head, request_body).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    match sd_api::routes::v1::component_status::post_component_status(
        body,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn list_incidents_handler(state: &ApplicationState) -> Response {
    match sd_api::routes::v1::incidents::list_incidents(&state.store).await {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn get_availability_handler(request_head: &RequestHead, state: &ApplicationState) -> Response {
    let query = match query_params(request_head).await {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    match sd_api::routes::v2::availability::get_availability(query, &state.store).await {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn list_components_handler(state: &ApplicationState) -> Response {
    match sd_api::routes::v2::components::list_components(&state.store).await {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn create_component_handler(
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
    state: &ApplicationState,
) -> Response {
    let body = match json_body(request_head, request_body).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    match sd_api::routes::v2::components::create_component(
        body,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn get_component_handler(
    raw_params: pavex::extract::route::RawRouteParams<'_, '_>,
    state: &ApplicationState,
) -> Response {
    let params = match pavex::extract::route::RouteParams::<
    sd_api::routes::v2::components::ComponentIdParams,
    >::extract(raw_params)
    {
        Ok(p) => p,
        Err(e) => return pavex::extract::route::errors::ExtractRouteParamsError::into_response(&e),
    };
    match sd_api::routes::v2::components::get_component(params, &state.store).await {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn list_events_handler(request_head: &RequestHead, state: &ApplicationState) -> Response {
    let query = match query_params(request_head).await {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    match sd_api::routes::v2::events::list_events(
        query,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn create_event_handler(
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
    state: &ApplicationState,
) -> Response {
    let body = match json_body(request_head, request_body).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    match sd_api::routes::v2::events::create_event(
        body,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn get_event_handler(
    raw_params: pavex::extract::route::RawRouteParams<'_, '_>,
    request_head: &RequestHead,
    state: &ApplicationState,
) -> Response {
    let params = match pavex::extract::route::RouteParams::<
    sd_api::routes::v2::events::EventIdParams,
    >::extract(raw_params)
    {
        Ok(p) => p,
        Err(e) => return pavex::extract::route::errors::ExtractRouteParamsError::into_response(&e),
    };
    match sd_api::routes::v2::events::get_event(
        params,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn patch_event_handler(
    raw_params: pavex::extract::route::RawRouteParams<'_, '_>,
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
    state: &ApplicationState,
) -> Response {
    let params = match pavex::extract::route::RouteParams::<
    sd_api::routes::v2::events::EventIdParams,
    >::extract(raw_params)
    {
        Ok(p) => p,
        Err(e) => return pavex::extract::route::errors::ExtractRouteParamsError::into_response(&e),
    };
    let body = match json_body(request_head, request_body).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    match sd_api::routes::v2::events::patch_event(
        params,
        body,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn extract_event_handler(
    raw_params: pavex::extract::route::RawRouteParams<'_, '_>,
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
    state: &ApplicationState,
) -> Response {
    let params = match pavex::extract::route::RouteParams::<
    sd_api::routes::v2::events::EventIdParams,
    >::extract(raw_params)
    {
        Ok(p) => p,
        Err(e) => return pavex::extract::route::errors::ExtractRouteParamsError::into_response(&e),
    };
    let body = match json_body(request_head, request_body).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    match sd_api::routes::v2::events::extract_event(
        params,
        body,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}

async fn patch_update_handler(
    raw_params: pavex::extract::route::RawRouteParams<'_, '_>,
    request_head: &RequestHead,
    request_body: pavex::hyper::body::Body,
    state: &ApplicationState,
) -> Response {
    let params = match pavex::extract::route::RouteParams::<
    sd_api::routes::v2::events::EventUpdateIdParams,
    >::extract(raw_params)
    {
        Ok(p) => p,
        Err(e) => return pavex::extract::route::errors::ExtractRouteParamsError::into_response(&e),
    };
    let body = match json_body(request_head, request_body).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    match sd_api::routes::v2::events::patch_update(
        params,
        body,
        &request_head.headers,
        &state.store,
        &state.auth_config,
        &state.rbac_config,
        &state.jwks_client,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => sd_api::errors::core_error_into_response(&e),
    }
}
