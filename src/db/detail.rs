use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::VisitDetail;

impl Database {
    /// Assemble a visit with its project and the project's contacts.
    ///
    /// Returns `None` only when the visit itself does not exist. A missing
    /// project is reported as an empty section, never as an error.
    pub fn get_visit_detail(&self, visit_id: &str) -> Result<Option<VisitDetail>> {
        let Some(visit) = self.get_visit_by_id(visit_id)? else {
            return Ok(None);
        };

        let Some(project_id) = visit.project_id.clone() else {
            return Ok(Some(VisitDetail {
                visit,
                project: None,
                contacts: None,
            }));
        };

        let project = self.get_project_by_id(&project_id)?;
        let contacts = self.get_contacts_for_project(&project_id)?;

        if project.is_none() {
            debug!(visit = %visit.id, project = %project_id, "visit references missing project");
        }

        Ok(Some(VisitDetail {
            visit,
            project,
            contacts: Some(contacts),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Project, Visit};
    use chrono::NaiveDate;

    fn visit(location: &str, project_id: Option<&str>) -> Visit {
        let mut v = Visit::new(
            location.to_string(),
            NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        );
        v.project_id = project_id.map(str::to_string);
        v
    }

    fn contact(name: &str, project_id: &str) -> Contact {
        let mut c = Contact::new(name.to_string());
        c.project_id = Some(project_id.to_string());
        c
    }

    #[test]
    fn test_detail_missing_visit() {
        let db = Database::open_memory().unwrap();
        assert!(db.get_visit_detail("V00000000").unwrap().is_none());
    }

    #[test]
    fn test_detail_without_project() {
        let db = Database::open_memory().unwrap();

        // Contacts elsewhere must not leak into an unlinked visit
        let project = Project::new("Other".to_string());
        db.add_project(&project).unwrap();
        db.add_contact(&contact("Someone", &project.id)).unwrap();

        let v = visit("Harbor", None);
        db.add_visit(&v).unwrap();

        let detail = db.get_visit_detail(&v.id).unwrap().unwrap();
        assert_eq!(detail.visit, v);
        assert!(detail.project.is_none());
        assert!(detail.contacts.is_none());
        assert!(!detail.has_dangling_project());
    }

    #[test]
    fn test_detail_with_project_and_contacts() {
        let db = Database::open_memory().unwrap();

        let project = Project::new("Pipeline".to_string());
        let other = Project::new("Elsewhere".to_string());
        db.add_project(&project).unwrap();
        db.add_project(&other).unwrap();

        let c1 = contact("Ana", &project.id);
        let c2 = contact("Bruno", &project.id);
        db.add_contact(&c1).unwrap();
        db.add_contact(&contact("Carla", &other.id)).unwrap();
        db.add_contact(&c2).unwrap();

        let v = visit("Pump station", Some(project.id.as_str()));
        db.add_visit(&v).unwrap();

        let detail = db.get_visit_detail(&v.id).unwrap().unwrap();
        assert_eq!(detail.visit, v);
        assert_eq!(detail.project, Some(project));
        assert_eq!(detail.contacts, Some(vec![c1, c2]));
        assert_eq!(detail.contact_count(), 2);
    }

    #[test]
    fn test_detail_project_without_contacts() {
        let db = Database::open_memory().unwrap();

        let project = Project::new("Quiet".to_string());
        db.add_project(&project).unwrap();

        let v = visit("Office", Some(project.id.as_str()));
        db.add_visit(&v).unwrap();

        let detail = db.get_visit_detail(&v.id).unwrap().unwrap();
        assert_eq!(detail.project, Some(project));
        assert_eq!(detail.contacts, Some(vec![]));
    }

    #[test]
    fn test_detail_dangling_project() {
        let db = Database::open_memory().unwrap();

        // Contacts pointing at the same missing id still yield nothing
        db.add_contact(&contact("Ghost", "P0BADBAD")).unwrap();

        let v = visit("Nowhere", Some("P0BADBAD"));
        db.add_visit(&v).unwrap();

        let detail = db.get_visit_detail(&v.id).unwrap().unwrap();
        assert_eq!(detail.visit, v);
        assert!(detail.project.is_none());
        assert_eq!(detail.contacts, Some(vec![]));
        assert!(detail.has_dangling_project());
    }
}
