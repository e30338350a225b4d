//! The visibility filter: rewrites reads for unauthenticated
//! clients. Authenticated readers are subject only to the "own only" read
//! gate on `pending review` maintenances, enforced by
//! [`crate::rbac::can_read_pending_maintenance`] — everything below that
//! line is purely about what an *anonymous* caller sees.
use crate::rbac;
use crate::types::{Actor, Event, EventType, Role, UpdateStatus};

fn is_pending_review_maintenance(event: &Event) -> bool {
    event.event_type == EventType::Maintenance && event.status() == UpdateStatus::PendingReview
}

/// Blank the fields anonymous callers must never see. Has no
/// effect on events that are not redacted for a non-anonymous actor.
pub fn redact_for_anonymous(mut event: Event) -> Event {
    event.contact_email = None;
    event.created_by = String::new();
    event
}

/// Applies both gates a single `GET`-by-id must pass: ownership (for a
/// `pending review` maintenance) and anonymous redaction. Returns `None`
/// when the event must come back as a 404.
pub fn event_for_actor(event: Event, actor: &Actor) -> Option<Event> {
    if is_pending_review_maintenance(&event) && !rbac::can_read_pending_maintenance(actor, &event)
    {
        return None;
    }
    if actor.role == Role::Anonymous {
        Some(redact_for_anonymous(event))
    } else {
        Some(event)
    }
}

/// The same two gates applied to a list of events, e.g. for
/// `GET /v2/events`.
pub fn events_for_actor(events: Vec<Event>, actor: &Actor) -> Vec<Event> {
    events
    .into_iter()
    .filter_map(|e| event_for_actor(e, actor))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn event(status: UpdateStatus, event_type: EventType, created_by: &str) -> Event {
        Event {
            id: 1,
            event_type,
            title: "t".into(),
            description: "d".into(),
            contact_email: Some("a@b.com".into()),
            impact: if event_type == EventType::Incident { 1 } else { 0 },
            start_date: OffsetDateTime::now_utc(),
            end_date: None,
            system: false,
            created_by: created_by.to_string(),
            version: 1,
            status,
            components: vec![1],
            updates: vec![],
        }
    }

    #[test]
    fn anonymous_never_sees_pending_review_maintenance() {
        let e = event(UpdateStatus::PendingReview, EventType::Maintenance, "u1");
        assert!(event_for_actor(e, &Actor::anonymous()).is_none());
    }

    #[test]
    fn anonymous_sees_planned_maintenance_redacted() {
        let e = event(UpdateStatus::Planned, EventType::Maintenance, "u1");
        let visible = event_for_actor(e, &Actor::anonymous()).unwrap();
        assert_eq!(visible.contact_email, None);
        assert_eq!(visible.created_by, "");
    }

    #[test]
    fn authenticated_admin_sees_everything_unredacted() {
        let admin = Actor {
            user_id: "adm".into(),
            role: Role::Admin,
        };
        let e = event(UpdateStatus::PendingReview, EventType::Maintenance, "u1");
        let visible = event_for_actor(e, &admin).unwrap();
        assert_eq!(visible.contact_email, Some("a@b.com".to_string()));
    }

    #[test]
    fn incidents_are_never_hidden_but_still_redacted_for_anonymous() {
        let e = event(UpdateStatus::Detected, EventType::Incident, "u1");
        let visible = event_for_actor(e, &Actor::anonymous()).unwrap();
        assert_eq!(visible.created_by, "");
    }
}
