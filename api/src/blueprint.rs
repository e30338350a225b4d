use crate::routes;
use pavex::blueprint::constructor::{CloningStrategy, Lifecycle};
use pavex::blueprint::router::GET;
use pavex::blueprint::Blueprint;
use pavex::f;

/// The service's blueprint: every route, constructor, and error handler
/// `pavex` needs to wire the dependency-injected handlers in `routes`
/// into a runnable server.
pub fn api_blueprint() -> Blueprint {
    let mut bp = Blueprint::new();
    register_common_constructors(&mut bp);
    register_singletons(&mut bp);
    add_telemetry_middleware(&mut bp);

    bp.route(GET, "/health", f!(crate::routes::health::health));
    bp.nest_at("/auth", routes::auth_bp);
    bp.nest_at("/v1", routes::v1::v1_bp);
    bp.nest_at("/v2", routes::v2::v2_bp);
    bp
}

/// Constructors every route's `JsonBody`/`QueryParams`/`RouteParams`
/// extractor needs, plus the error handlers that turn an extraction
/// failure into a response.
fn register_common_constructors(bp: &mut Blueprint) {
    bp.constructor(
        f!(pavex::extract::query::QueryParams::extract),
        Lifecycle::RequestScoped,
    )
    .error_handler(f!(
            pavex::extract::query::errors::ExtractQueryParamsError::into_response
    ));
    bp.constructor(
        f!(pavex::extract::route::RouteParams::extract),
        Lifecycle::RequestScoped,
    )
    .error_handler(f!(
            pavex::extract::route::errors::ExtractRouteParamsError::into_response
    ));
    bp.constructor(
        f!(pavex::extract::body::JsonBody::extract),
        Lifecycle::RequestScoped,
    )
    .error_handler(f!(
            pavex::extract::body::errors::ExtractJsonBodyError::into_response
    ));
    bp.constructor(
        f!(pavex::extract::body::BufferedBody::extract),
        Lifecycle::RequestScoped,
    )
    .error_handler(f!(
            pavex::extract::body::errors::ExtractBufferedBodyError::into_response
    ));
    bp.constructor(
        f!(<pavex::extract::body::BodySizeLimit as std::default::Default>::default),
        Lifecycle::RequestScoped,
    );
}

/// Process-lifetime singletons. `Config`'s own sub-structs
/// arrive already built — they're loaded once by `sd_server` before the
/// application state is assembled (see `server_sdk::build_application_state`)
/// — so the only constructors registered here are the ones that derive a
/// *further* singleton from a config value: the connection pool from
/// `DatabaseConfig`, the JWKS cache from `AuthConfig`, and the `reqwest`
/// client every outbound HTTP call (JWKS fetch, token exchange) shares.
fn register_singletons(bp: &mut Blueprint) {
    bp.constructor(
        f!(crate::configuration::DatabaseConfig::get_pool),
        Lifecycle::Singleton,
    );
    bp.constructor(f!(crate::store::SqlxEventStore::new), Lifecycle::Singleton);
    bp.constructor(f!(crate::auth::jwks::JwksClient::from_config), Lifecycle::Singleton);
    bp.constructor(f!(reqwest::Client::new), Lifecycle::Singleton);
}

/// Add the telemetry middleware, as well as the constructors of its
/// dependencies.
fn add_telemetry_middleware(bp: &mut Blueprint) {
    bp.constructor(f!(crate::telemetry::RootSpan::new), Lifecycle::RequestScoped)
    .cloning(CloningStrategy::CloneIfNecessary);
    bp.wrap(f!(crate::telemetry::logger));
}
