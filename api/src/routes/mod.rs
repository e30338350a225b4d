//! Route blueprints, one module per API generation plus the ambient
//! `/health` probe, each a per-resource blueprint nested with `nest_at`.
use pavex::blueprint::router::{GET, POST};
use pavex::blueprint::Blueprint;
use pavex::f;

pub mod health;
pub mod v1;
pub mod v2;

pub(crate) fn auth_bp() -> Blueprint {
    let mut bp = Blueprint::new();
    bp.route(GET, "/login", f!(crate::auth::oidc::login))
        .error_handler(f!(crate::auth::oidc::OidcError::into_response));
    bp.route(GET, "/callback", f!(crate::auth::oidc::callback))
        .error_handler(f!(crate::auth::oidc::OidcError::into_response));
    bp.route(POST, "/token", f!(crate::auth::oidc::token))
        .error_handler(f!(crate::auth::oidc::OidcError::into_response));
    bp.route(POST, "/logout", f!(crate::auth::oidc::logout));
    bp
}
