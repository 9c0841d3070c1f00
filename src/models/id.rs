use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of hex characters following the kind prefix.
pub const ID_HEX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Visit,
    Project,
    Contact,
}

impl EntityKind {
    pub fn prefix(&self) -> char {
        match self {
            Self::Visit => 'V',
            Self::Project => 'P',
            Self::Contact => 'C',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::Project => "project",
            Self::Contact => "contact",
        }
    }

    /// Kind implied by an identifier's leading letter.
    /// Accepts ids from older versions (e.g. `V20240315143000`) as well.
    pub fn of_id(id: &str) -> Option<Self> {
        match id.chars().next()? {
            'V' => Some(Self::Visit),
            'P' => Some(Self::Project),
            'C' => Some(Self::Contact),
            _ => None,
        }
    }
}

/// Generate a new identifier: kind prefix + 8 uppercase hex chars from a v4 UUID.
///
/// Collisions are possible but not retried; a duplicate surfaces as a
/// storage error on insert.
pub fn new_id(kind: EntityKind) -> String {
    let uuid = Uuid::new_v4();
    let hex = hex::encode_upper(&uuid.as_bytes()[..ID_HEX_LEN / 2]);
    format!("{}{}", kind.prefix(), hex)
}
