//! The availability calculator: a pure read over the closed-event
//! timeline, independent of the RBAC gate and the store's write path.
use crate::types::Event;
use time::{Date, Month, OffsetDateTime};

/// One month's computed uptime percentage for a single component.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MonthlyAvailability {
    pub year: i32,
    pub month: u8,
    pub availability_percent: f64,
}

fn month_bounds(year: i32, month: u8) -> (OffsetDateTime, OffsetDateTime) {
    let m = Month::try_from(month).expect("month must be 1-12");
    let start = Date::from_calendar_date(year, m, 1)
    .expect("valid calendar date")
    .midnight()
    .assume_utc();
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = Date::from_calendar_date(next_year, Month::try_from(next_month).unwrap(), 1)
    .expect("valid calendar date")
    .midnight()
    .assume_utc();
    (start, end)
}

fn next_month(year: i32, month: u8) -> (i32, u8) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Computes the monthly availability of one component from `(from_year,
/// from_month)` through the month containing `now`, inclusive.
/// `closed_incidents` must already be filtered to closed incidents of
/// impact >= 1 covering the component — callers get that slice
/// from [`crate::store::EventStore::closed_incidents_for_component`].
/// Maintenances and info events never reach this function: they do not
/// contribute to downtime regardless of impact.
pub fn compute(
    closed_incidents: &[Event],
    from_year: i32,
    from_month: u8,
    now: OffsetDateTime,
) -> Vec<MonthlyAvailability> {
    let mut out = Vec::new();
    let (mut year, mut month) = (from_year, from_month);
    let (to_year, to_month) = (now.year(), now.month() as u8);

    loop {
        let (start, end) = month_bounds(year, month);
        let month_seconds = (end - start).whole_seconds() as f64;

        let downtime_seconds: f64 = closed_incidents
        .iter()
        .filter_map(|incident| {
                let incident_end = incident.end_date?;
                let overlap_start = incident.start_date.max(start);
                let overlap_end = incident_end.min(end);
                if overlap_end > overlap_start {
                    Some((overlap_end - overlap_start).whole_seconds() as f64)
                } else {
                    None
                }
        })
        .sum();

        let percent = if month_seconds > 0.0 {
            (100.0 * (1.0 - downtime_seconds / month_seconds)).clamp(0.0, 100.0)
        } else {
            100.0
        };

        out.push(MonthlyAvailability {
                year,
                month,
                availability_percent: percent,
        });

        if year == to_year && month == to_month {
            break;
        }
        let (ny, nm) = next_month(year, month);
        year = ny;
        month = nm;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;
    use time::macros::datetime;

    fn closed_incident(start: OffsetDateTime, end: OffsetDateTime, impact: u8) -> Event {
        Event {
            id: 1,
            event_type: EventType::Incident,
            title: "t".into(),
            description: "d".into(),
            contact_email: None,
            impact,
            start_date: start,
            end_date: Some(end),
            system: false,
            created_by: "sys".into(),
            version: 1,
            status: crate::types::UpdateStatus::Resolved,
            components: vec![1],
            updates: vec![],
        }
    }

    #[test]
    fn full_month_outage_yields_zero_percent() {
        let start = datetime!(2026-02-01 00:00 UTC);
        let end = datetime!(2026-03-01 00:00 UTC);
        let incidents = vec![closed_incident(start, end, 3)];
        let now = datetime!(2026-02-15 00:00 UTC);
        let result = compute(&incidents, 2026, 2, now);
        assert_eq!(result.len(), 1);
        assert!((result[0].availability_percent - 0.0).abs() < 1e-6);
    }

    #[test]
    fn no_incidents_yields_full_availability() {
        let now = datetime!(2026-02-15 00:00 UTC);
        let result = compute(&[], 2026, 2, now);
        assert_eq!(result[0].availability_percent, 100.0);
    }

    #[test]
    fn partial_day_outage_is_a_small_fraction() {
        let start = datetime!(2026-02-10 00:00 UTC);
        let end = datetime!(2026-02-11 00:00 UTC);
        let incidents = vec![closed_incident(start, end, 1)];
        let now = datetime!(2026-02-15 00:00 UTC);
        let result = compute(&incidents, 2026, 2, now);
        let feb_seconds = 28.0 * 24.0 * 3600.0;
        let expected = 100.0 * (1.0 - 86400.0 / feb_seconds);
        assert!((result[0].availability_percent - expected).abs() < 1e-6);
    }

    #[test]
    fn range_spans_multiple_months() {
        let now = datetime!(2026-04-05 00:00 UTC);
        let result = compute(&[], 2026, 2, now);
        assert_eq!(
            result.iter().map(|r| (r.year, r.month)).collect::<Vec<_>>(),
            vec![(2026, 2), (2026, 3), (2026, 4)]
        );
    }
}
