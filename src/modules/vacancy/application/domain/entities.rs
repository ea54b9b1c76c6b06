use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Unsigned 64-bit identifier of the user that owns a vacancy.
///
/// Owner ids come from the chat platform, not from our own user table, so
/// this is a plain numeric newtype rather than a Uuid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct OwnerId(u64);

impl OwnerId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for OwnerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A job vacancy.
///
/// Fields are private on purpose: the only way to obtain a `Vacancy` is
/// through [`Vacancy::open`], which assigns the id and creation timestamp on
/// the server. Neither is ever accepted from a client.
#[derive(Debug, Clone)]
pub struct Vacancy {
    id: Uuid,
    owner: OwnerId,
    title: String,
    description: String,
    created: DateTime<Utc>,
}

impl Vacancy {
    /// Opens a new vacancy with a freshly generated id and the current UTC
    /// time as its creation timestamp.
    pub fn open(owner: OwnerId, title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            title,
            description,
            created: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}
