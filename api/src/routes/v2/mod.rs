//! The v2 surface: the current component/event API.
//! `/v2/incidents…` is the same [`events_bp`] blueprint mounted a
//! second time at a different prefix — the two paths must behave
//! identically, which nesting the same blueprint twice guarantees by
//! construction rather than by keeping two handler sets in sync.
use pavex::blueprint::router::{GET, PATCH, POST};
use pavex::blueprint::Blueprint;
use pavex::f;

pub mod availability;
pub mod components;
pub mod events;

pub(crate) fn v2_bp() -> Blueprint {
    let mut bp = Blueprint::new();
    bp.nest_at("/components", components_bp());
    bp.nest_at("/events", events_bp());
    bp.nest_at("/incidents", events_bp());
    bp.route(GET, "/availability", f!(crate::routes::v2::availability::get_availability))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp
}

fn components_bp() -> Blueprint {
    let mut bp = Blueprint::new();
    bp.route(GET, "", f!(crate::routes::v2::components::list_components))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(POST, "", f!(crate::routes::v2::components::create_component))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(GET, "/:id", f!(crate::routes::v2::components::get_component))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp
}

fn events_bp() -> Blueprint {
    let mut bp = Blueprint::new();
    bp.route(GET, "", f!(crate::routes::v2::events::list_events))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(POST, "", f!(crate::routes::v2::events::create_event))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(GET, "/:id", f!(crate::routes::v2::events::get_event))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(PATCH, "/:id", f!(crate::routes::v2::events::patch_event))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(POST, "/:id/extract", f!(crate::routes::v2::events::extract_event))
        .error_handler(f!(crate::errors::core_error_into_response));
    bp.route(
        PATCH,
        "/:id/updates/:update_id",
        f!(crate::routes::v2::events::patch_update),
    )
    .error_handler(f!(crate::errors::core_error_into_response));
    bp
}
