#[path = "integration/helpers.rs"]
mod helpers;
#[path = "integration/events.rs"]
mod events;
