use rusqlite::{params, Row};
use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::Contact;

impl Database {
    pub fn add_contact(&self, contact: &Contact) -> Result<()> {
        debug!(id = %contact.id, project = ?contact.project_id, "adding contact");
        self.insert_contact(contact)
    }

    pub fn insert_contact(&self, contact: &Contact) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Contacts (id, name, phone, email, projectId) VALUES (?, ?, ?, ?, ?)",
            params![
                contact.id,
                contact.name,
                contact.phone,
                contact.email,
                contact.project_id,
            ],
        )?;
        Ok(())
    }

    pub fn list_contacts(&self) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, phone, email, projectId FROM Contacts ORDER BY rowid",
        )?;

        let contacts = stmt
            .query_map([], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub fn get_contact_by_id(&self, id: &str) -> Result<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone, email, projectId FROM Contacts WHERE id = ?")?;

        let result = stmt.query_row([id], Self::row_to_contact);

        match result {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Contacts of an existing project. The inner join means a project id
    /// with no row in Projects yields no contacts.
    pub fn get_contacts_for_project(&self, project_id: &str) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT c.id, c.name, c.phone, c.email, c.projectId
               FROM Contacts c
               INNER JOIN Projects p ON c.projectId = p.id
               WHERE p.id = ?
               ORDER BY c.rowid"#,
        )?;

        let contacts = stmt
            .query_map([project_id], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub(super) fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            phone: row.get(2)?,
            email: row.get(3)?,
            project_id: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn test_add_and_get_contact() {
        let db = Database::open_memory().unwrap();

        let mut contact = Contact::new("Ana Souza".to_string());
        contact.phone = Some("555-0101".to_string());
        contact.email = Some("ana@example.com".to_string());
        db.add_contact(&contact).unwrap();

        let stored = db.get_contact_by_id(&contact.id).unwrap().unwrap();
        assert_eq!(stored, contact);
    }

    #[test]
    fn test_list_contacts_empty() {
        let db = Database::open_memory().unwrap();
        assert!(db.list_contacts().unwrap().is_empty());
    }

    #[test]
    fn test_contact_with_dangling_project_is_stored() {
        let db = Database::open_memory().unwrap();

        let mut contact = Contact::new("Orphan".to_string());
        contact.project_id = Some("PFFFFFFFF".to_string());
        db.add_contact(&contact).unwrap();

        let contacts = db.list_contacts().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].project_id, Some("PFFFFFFFF".to_string()));
        assert!(db.get_contacts_for_project("PFFFFFFFF").unwrap().is_empty());
    }

    #[test]
    fn test_contacts_for_project_filters() {
        let db = Database::open_memory().unwrap();

        let alpha = Project::new("Alpha".to_string());
        let beta = Project::new("Beta".to_string());
        db.add_project(&alpha).unwrap();
        db.add_project(&beta).unwrap();

        for (name, project) in [("A1", &alpha), ("B1", &beta), ("A2", &alpha)] {
            let mut c = Contact::new(name.to_string());
            c.project_id = Some(project.id.clone());
            db.add_contact(&c).unwrap();
        }
        db.add_contact(&Contact::new("Loose".to_string())).unwrap();

        let names: Vec<String> = db
            .get_contacts_for_project(&alpha.id)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["A1", "A2"]);
    }
}
