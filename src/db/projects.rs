use rusqlite::{params, Row};
use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::Project;

impl Database {
    pub fn add_project(&self, project: &Project) -> Result<()> {
        debug!(id = %project.id, "adding project");
        self.insert_project(project)
    }

    pub fn insert_project(&self, project: &Project) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Projects (id, name, description) VALUES (?, ?, ?)",
            params![project.id, project.name, project.description],
        )?;
        Ok(())
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description FROM Projects ORDER BY rowid")?;

        let projects = stmt
            .query_map([], Self::row_to_project)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(projects)
    }

    pub fn get_project_by_id(&self, id: &str) -> Result<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description FROM Projects WHERE id = ?")?;

        let result = stmt.query_row([id], Self::row_to_project);

        match result {
            Ok(project) => Ok(Some(project)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(super) fn row_to_project(row: &Row) -> rusqlite::Result<Project> {
        Ok(Project {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            description: row.get(2)?,
        })
    }
}
