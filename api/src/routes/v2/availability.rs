//! `GET /v2/availability`: monthly uptime percentage for a single
//! component, from `(from_year, from_month)` through the current month.
use crate::store::SqlxEventStore;
use pavex::extract::query::QueryParams;
use pavex::response::{body::Json, Response};
use sd_core::availability;
use sd_core::error::CoreError;
use time::OffsetDateTime;

#[derive(Debug, serde::Deserialize)]
pub struct AvailabilityQuery {
    pub component_id: i64,
    pub from_year: i32,
    pub from_month: u8,
}

pub async fn get_availability(
    query: QueryParams<AvailabilityQuery>,
    store: &SqlxEventStore,
) -> Result<Response, CoreError> {
    let q = query.0;
    if !(1..=12).contains(&q.from_month) {
        return Err(CoreError::Validation("from_month must be between 1 and 12".to_string()));
    }
    let closed_incidents = store.closed_incidents_for_component(q.component_id).await?;
    let monthly = availability::compute(&closed_incidents, q.from_year, q.from_month, OffsetDateTime::now_utc());
    Json::new(monthly)
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| CoreError::Validation("failed to encode response".to_string()))
}
