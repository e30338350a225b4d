//! Role-based access policy: maps `(actor role, event type, current
//! status, target status, ownership)` to allow/deny. This module is the
//! RBAC *gate* in the control flow — it runs before validation and the
//! lifecycle engine, and it is the only place that turns a role mismatch
//! into a [`CoreError::Forbidden`]/[`CoreError::Unauthorized`].
use crate::error::{CoreError, CoreResult};
use crate::types::{Actor, Event, EventType, Role, UpdateStatus};

/// Can `actor` create a brand new event of `event_type`?
///
/// Incidents and info events are operator/admin only. Maintenance may be
/// opened by a creator (landing in `pending review`) or by an
/// operator/admin (landing directly in `planned`) — see
/// [`initial_maintenance_status`]. Anonymous callers are never allowed to
/// create anything.
pub fn authorize_create(actor: &Actor, event_type: EventType) -> CoreResult<()> {
    if actor.role == Role::Anonymous {
        return Err(CoreError::Unauthorized);
    }
    match event_type {
        EventType::Incident | EventType::Info => match actor.role {
            Role::Operator | Role::Admin => Ok(()),
            _ => Err(CoreError::Forbidden),
        },
        EventType::Maintenance => match actor.role {
            Role::Creator | Role::Operator | Role::Admin => Ok(()),
            Role::Anonymous => unreachable!(),
        },
    }
}

/// The initial status a newly created maintenance event is given,
/// depending on who created it. Only meaningful once
/// [`authorize_create`] has already approved the request.
pub fn initial_maintenance_status(actor: &Actor) -> UpdateStatus {
    match actor.role {
        Role::Creator => UpdateStatus::PendingReview,
        Role::Operator | Role::Admin | Role::Anonymous => UpdateStatus::Planned,
    }
}

/// Can `actor` patch `event` towards `target` status?
///
/// Incident/info patches require operator or admin. Maintenance patches
/// are gated by the current status: while `pending review`, the owning
/// creator (or any operator/admin) may edit or cancel, but only an
/// operator/admin may *approve* (`pending review -> reviewed`); once past
/// `reviewed`, only an admin may patch further.
pub fn authorize_patch(actor: &Actor, event: &Event, target: UpdateStatus) -> CoreResult<()> {
    if actor.role == Role::Anonymous {
        return Err(CoreError::Unauthorized);
    }
    match event.event_type {
        EventType::Incident | EventType::Info => match actor.role {
            Role::Operator | Role::Admin => Ok(()),
            _ => Err(CoreError::Forbidden),
        },
        EventType::Maintenance => {
            if event.status() == UpdateStatus::PendingReview {
                if target == UpdateStatus::Reviewed {
                    match actor.role {
                        Role::Operator | Role::Admin => Ok(()),
                        _ => Err(CoreError::Forbidden),
                    }
                } else {
                    match actor.role {
                        Role::Operator | Role::Admin => Ok(()),
                        Role::Creator if actor.owns(event) => Ok(()),
                        _ => Err(CoreError::Forbidden),
                    }
                }
            } else {
                match actor.role {
                    Role::Admin => Ok(()),
                    _ => Err(CoreError::Forbidden),
                }
            }
        }
    }
}

/// Moving components off an event is gated the same way a patch to
/// that event would be — it is, after all, a structural amendment of the
/// source event. There is no separate row for "extract" in 's table;
/// this is the open question resolved in DESIGN.md.
pub fn authorize_extract(actor: &Actor, event: &Event) -> CoreResult<()> {
    authorize_patch(actor, event, event.status())
}

/// "Own only" read access to a `pending review` maintenance: the
/// owning creator, or any operator/admin, may see it; other creators and
/// anonymous callers may not. Non-pending-review events are never gated
/// here — [`crate::visibility`] handles the anonymous-only redaction that
/// applies to everything else.
pub fn can_read_pending_maintenance(actor: &Actor, event: &Event) -> bool {
    debug_assert!(event.event_type == EventType::Maintenance);
    debug_assert!(event.status() == UpdateStatus::PendingReview);
    match actor.role {
        Role::Admin | Role::Operator => true,
        Role::Creator => actor.owns(event),
        Role::Anonymous => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role, user_id: &str) -> Actor {
        Actor {
            user_id: user_id.to_string(),
            role,
        }
    }

    fn maintenance(status: UpdateStatus, created_by: &str) -> Event {
        Event {
            id: 1,
            event_type: EventType::Maintenance,
            title: "maintenance".into(),
            description: "d".into(),
            contact_email: Some("a@b.com".into()),
            impact: 0,
            start_date: time::OffsetDateTime::now_utc(),
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
    fn anonymous_cannot_create_anything() {
        let anon = Actor::anonymous();
        assert!(authorize_create(&anon, EventType::Incident).is_err());
        assert!(authorize_create(&anon, EventType::Maintenance).is_err());
    }

    #[test]
    fn creator_cannot_create_incident_or_info() {
        let creator = actor(Role::Creator, "u1");
        assert!(matches!(
                authorize_create(&creator, EventType::Incident),
                Err(CoreError::Forbidden)
        ));
    }

    #[test]
    fn creator_maintenance_lands_pending_review() {
        let creator = actor(Role::Creator, "u1");
        assert!(authorize_create(&creator, EventType::Maintenance).is_ok());
        assert_eq!(
            initial_maintenance_status(&creator),
            UpdateStatus::PendingReview
        );
    }

    #[test]
    fn operator_maintenance_lands_planned() {
        let operator = actor(Role::Operator, "u2");
        assert_eq!(initial_maintenance_status(&operator), UpdateStatus::Planned);
    }

    #[test]
    fn non_owning_creator_cannot_patch_pending_review() {
        let owner = actor(Role::Creator, "u1");
        let other = actor(Role::Creator, "u2");
        let event = maintenance(UpdateStatus::PendingReview, &owner.user_id);
        assert!(authorize_patch(&owner, &event, UpdateStatus::Cancelled).is_ok());
        assert!(matches!(
                authorize_patch(&other, &event, UpdateStatus::Cancelled),
                Err(CoreError::Forbidden)
        ));
    }

    #[test]
    fn only_operator_or_admin_can_approve() {
        let owner = actor(Role::Creator, "u1");
        let event = maintenance(UpdateStatus::PendingReview, &owner.user_id);
        assert!(matches!(
                authorize_patch(&owner, &event, UpdateStatus::Reviewed),
                Err(CoreError::Forbidden)
        ));
        let operator = actor(Role::Operator, "op");
        assert!(authorize_patch(&operator, &event, UpdateStatus::Reviewed).is_ok());
    }

    #[test]
    fn only_admin_patches_beyond_reviewed() {
        let event = maintenance(UpdateStatus::Reviewed, "u1");
        let operator = actor(Role::Operator, "op");
        assert!(matches!(
                authorize_patch(&operator, &event, UpdateStatus::Planned),
                Err(CoreError::Forbidden)
        ));
        let admin = actor(Role::Admin, "adm");
        assert!(authorize_patch(&admin, &event, UpdateStatus::Planned).is_ok());
    }

    #[test]
    fn non_owning_creator_cannot_read_pending_review() {
        let owner = actor(Role::Creator, "u1");
        let other = actor(Role::Creator, "u2");
        let event = maintenance(UpdateStatus::PendingReview, &owner.user_id);
        assert!(can_read_pending_maintenance(&owner, &event));
        assert!(!can_read_pending_maintenance(&other, &event));
    }
}
