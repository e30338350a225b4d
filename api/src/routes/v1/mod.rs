//! The legacy v1 surface: flat payloads, naive `YYYY-MM-DD HH:MM`
//! timestamps, single-component reporting. Kept alongside v2 rather
//! than removed, exactly as shipped; new integrations should use v2.
use pavex::blueprint::router::{GET, POST};
use pavex::blueprint::Blueprint;
use pavex::f;

pub mod component_status;
pub mod incidents;

pub(crate) fn v1_bp() -> Blueprint {
    let mut bp = Blueprint::new();
    bp.route(
        GET,
        "/component_status",
        f!(crate::routes::v1::component_status::get_component_status),
    )
    .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(
        POST,
        "/component_status",
        f!(crate::routes::v1::component_status::post_component_status),
    )
    .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(GET, "/incidents", f!(crate::routes::v1::incidents::list_incidents))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp
}
