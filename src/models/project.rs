use serde::{Deserialize, Serialize};

use super::{new_id, EntityKind};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl Project {
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(EntityKind::Project),
            name,
            description: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation { field: "name" });
        }
        Ok(())
    }
}
