//! `GET /v1/incidents`: every incident, in v1 shape, unpaginated
//! (pagination is a v2-only concept).
use crate::schemas::EventV1Dto;
use crate::store::SqlxEventStore;
use pavex::response::{body::Json, Response};
use sd_core::error::CoreError;
use sd_core::store::EventFilter;
use sd_core::types::EventType;

const V1_LIST_LIMIT: u32 = 10_000;

pub async fn list_incidents(store: &SqlxEventStore) -> Result<Response, CoreError> {
    let filter = EventFilter {
        event_type: Some(EventType::Incident),
        ..Default::default()
    };
    let (events, _total) = store.list_events(&filter, 1, V1_LIST_LIMIT).await?;
    let dtos: Vec<EventV1Dto> = events.iter().map(EventV1Dto::from).collect();
    Json::new(dtos)
        .map(|json| Response::ok().set_typed_body(json))
        .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}
