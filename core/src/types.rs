//! Domain types shared by every module in the lifecycle engine.
use time::OffsetDateTime;

/// One named attribute on a [`Component`], e.g. `region=EU-NL`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A service identity: a name plus the set of attributes that disambiguate
/// it from other components sharing the same name (region, category,...).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Component {
    pub id: i64,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Component {
    pub fn region(&self) -> Option<&str> {
        self.attributes
        .iter()
        .find(|a| a.name == "region")
        .map(|a| a.value.as_str())
    }

    /// Two components are the "same identity" if their name and attribute
    /// sets match, ignoring attribute order.
    pub fn same_identity(&self, name: &str, attributes: &[Attribute]) -> bool {
        if self.name != name || self.attributes.len() != attributes.len() {
            return false;
        }
        attributes
        .iter()
        .all(|a| self.attributes.iter().any(|mine| mine == a))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Incident,
    Maintenance,
    Info,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Incident => "incident",
            EventType::Maintenance => "maintenance",
            EventType::Info => "info",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in an event's append-only status log. `id` is the zero-based
/// insertion index; updates are never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventUpdate {
    pub id: i64,
    pub status: UpdateStatus,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl EventUpdate {
    pub fn status(&self) -> UpdateStatus {
        self.status
    }
}

/// The union of every status word legal for at least one event type, plus
/// the engine-reserved `SYSTEM` marker. defines which subset is legal
/// for which `(type, open/closed)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    // Incident statuses.
    #[default]
    Detected,
    Analysing,
    Fixing,
    #[serde(rename = "impact changed")]
    ImpactChanged,
    Observing,
    Resolved,
    Reopened,
    Changed,
    #[serde(rename = "SYSTEM")]
    System,
    // Maintenance statuses (some shared with info).
    #[serde(rename = "pending review")]
    PendingReview,
    Reviewed,
    Planned,
    #[serde(rename = "in progress")]
    InProgress,
    Modified,
    Completed,
    Cancelled,
}

impl UpdateStatus {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            UpdateStatus::Detected => "detected",
            UpdateStatus::Analysing => "analysing",
            UpdateStatus::Fixing => "fixing",
            UpdateStatus::ImpactChanged => "impact changed",
            UpdateStatus::Observing => "observing",
            UpdateStatus::Resolved => "resolved",
            UpdateStatus::Reopened => "reopened",
            UpdateStatus::Changed => "changed",
            UpdateStatus::System => "SYSTEM",
            UpdateStatus::PendingReview => "pending review",
            UpdateStatus::Reviewed => "reviewed",
            UpdateStatus::Planned => "planned",
            UpdateStatus::InProgress => "in progress",
            UpdateStatus::Modified => "modified",
            UpdateStatus::Completed => "completed",
            UpdateStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

/// The unified event record: an incident, a planned/unplanned maintenance,
/// or an informational notice against one or more components.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub contact_email: Option<String>,
    pub impact: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    pub system: bool,
    pub created_by: String,
    pub version: i64,
    pub status: UpdateStatus,
    pub components: Vec<i64>,
    pub updates: Vec<EventUpdate>,
}

impl Event {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }

    /// The last-applied update status ( data model §3). Mirrors the
    /// `status` field; exposed as a method so callers read it the same
    /// way whether they hold an `Event` or a `PatchEventRequest`.
    pub fn status(&self) -> UpdateStatus {
        self.status
    }

    pub fn next_update_id(&self) -> i64 {
        self.updates.len() as i64
    }
}

/// Actor role, derived from OIDC group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Anonymous,
    Creator,
    Operator,
    Admin,
}

/// The authenticated (or anonymous) caller of an operation. Carried
/// explicitly through every call; never read from ambient/thread-local
/// state ( design note).
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: String,
    pub role: Role,
}

impl Actor {
    pub fn anonymous() -> Self {
        Actor {
            user_id: String::new(),
            role: Role::Anonymous,
        }
    }

    pub fn owns(&self, event: &Event) -> bool {
        self.role != Role::Anonymous && self.user_id == event.created_by
    }
}
