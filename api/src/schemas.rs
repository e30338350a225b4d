//! Wire-level DTOs shared by more than one route: the v1
//! legacy shape (naive `YYYY-MM-DD HH:MM` timestamps, no timezone, no
//! seconds) and the v2 shape (RFC 3339 UTC), both translated to and from
//! [`sd_core::types::Event`]/[`sd_core::types::Component`].
use sd_core::types::{Attribute, Component, Event, EventType, EventUpdate, UpdateStatus};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// `YYYY-MM-DD HH:MM`, the legacy v1 wire format — no timezone, no
/// seconds, and it must round-trip to the same minute.
const V1_TIMESTAMP: &[FormatItem<'_>] = format_description!("[year]-[month]-[day] [hour]:[minute]");

pub fn format_v1_timestamp(dt: OffsetDateTime) -> String {
    let naive = PrimitiveDateTime::new(dt.date(), dt.time());
    naive
    .format(V1_TIMESTAMP)
    .expect("a fixed format description never fails to format")
}

pub fn parse_v1_timestamp(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
    let naive = PrimitiveDateTime::parse(raw, V1_TIMESTAMP)?;
    Ok(naive.assume_utc())
}

#[derive(Debug, serde::Serialize)]
pub struct ComponentDto {
    pub id: i64,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl From<&Component> for ComponentDto {
    fn from(c: &Component) -> Self {
        ComponentDto {
            id: c.id,
            name: c.name.clone(),
            attributes: c.attributes.clone(),
        }
    }
}

/// `GET /v1/component_status` entry: a component plus the v1-shaped
/// incidents currently open against it.
#[derive(Debug, serde::Serialize)]
pub struct ComponentStatusDto {
    pub id: i64,
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub incidents: Vec<EventV1Dto>,
}

/// The v1 event shape: flat, with naive local-like timestamps and no
/// `version` field (maintenance optimistic concurrency is a v2-only
/// concept, since v1 never created maintenances).
#[derive(Debug, serde::Serialize)]
pub struct EventV1Dto {
    pub id: i64,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub impact: u8,
    pub start_date: String,
    pub end_date: Option<String>,
    pub system: bool,
    pub components: Vec<i64>,
    pub updates: Vec<EventUpdateV1Dto>,
}

#[derive(Debug, serde::Serialize)]
pub struct EventUpdateV1Dto {
    pub id: i64,
    pub status: UpdateStatus,
    pub text: String,
    pub timestamp: String,
}

impl From<&Event> for EventV1Dto {
    fn from(e: &Event) -> Self {
        EventV1Dto {
            id: e.id,
            event_type: e.event_type,
            title: e.title.clone(),
            description: e.description.clone(),
            impact: e.impact,
            start_date: format_v1_timestamp(e.start_date),
            end_date: e.end_date.map(format_v1_timestamp),
            system: e.system,
            components: e.components.clone(),
            updates: e
            .updates
            .iter()
            .map(|u| EventUpdateV1Dto {
                    id: u.id,
                    status: u.status(),
                    text: u.text.clone(),
                    timestamp: format_v1_timestamp(u.timestamp),
            })
            .collect(),
        }
    }
}

/// The v2 event shape: the [`Event`] type as-is, RFC 3339 timestamps via
/// its own `serde` implementation, plus the echoed `version`.
#[derive(Debug, serde::Serialize)]
pub struct EventV2Dto<'a> {
    #[serde(flatten)]
    pub event: &'a Event,
}

impl<'a> From<&'a Event> for EventV2Dto<'a> {
    fn from(event: &'a Event) -> Self {
        EventV2Dto { event }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_index: u32,
    pub records_per_page: u32,
    pub total_records: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total_records: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            (total_records + limit as u64 - 1) / limit as u64
        };
        Pagination {
            page_index: page,
            records_per_page: limit,
            total_records,
            total_pages,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn v1_timestamp_round_trips_to_the_minute() {
        let dt = datetime!(2026 - 03 - 05 14:32:07 UTC);
        let formatted = format_v1_timestamp(dt);
        assert_eq!(formatted, "2026-03-05 14:32");

        let parsed = parse_v1_timestamp(&formatted).unwrap();
        assert_eq!(parsed, datetime!(2026 - 03 - 05 14:32:00 UTC));
    }

    #[test]
    fn v1_timestamp_rejects_a_payload_carrying_seconds_or_a_zone() {
        assert!(parse_v1_timestamp("2026-03-05 14:32:07").is_err());
        assert!(parse_v1_timestamp("2026-03-05T14:32:00Z").is_err());
    }

    #[test]
    fn pagination_rounds_total_pages_up() {
        let p = Pagination::new(0, 50, 101);
        assert_eq!(p.total_pages, 3);

        let exact = Pagination::new(1, 50, 100);
        assert_eq!(exact.total_pages, 2);
    }
}
