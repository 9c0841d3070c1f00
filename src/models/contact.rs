use serde::{Deserialize, Serialize};

use super::{new_id, EntityKind};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Advisory link to a project; not enforced by the store.
    pub project_id: Option<String>,
}

impl Contact {
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(EntityKind::Contact),
            name,
            phone: None,
            email: None,
            project_id: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation { field: "name" });
        }
        Ok(())
    }

    /// "phone · email" for one-line listings, skipping whatever is missing
    pub fn reach(&self) -> Option<String> {
        let parts: Vec<&str> = [self.phone.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}
