use serde::{Deserialize, Serialize};

use super::{Contact, Project, Visit};

/// A visit with its project and that project's contacts.
///
/// `project` and `contacts` are both `None` when the visit has no project.
/// When the visit points at a project id that no longer resolves, `project`
/// is `None` and `contacts` is an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitDetail {
    pub visit: Visit,
    pub project: Option<Project>,
    pub contacts: Option<Vec<Contact>>,
}

impl VisitDetail {
    /// True when the visit references a project id with no matching row
    pub fn has_dangling_project(&self) -> bool {
        self.visit.project_id.is_some() && self.project.is_none()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.as_ref().map_or(0, Vec::len)
    }
}
