use rusqlite::{params, Row};
use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::{Photo, Visit, DATE_FORMAT};

const VISIT_COLUMNS: &str = "id, locationName, date, appointmentNote, photo, projectId";

/// Helper to convert stored date text into a NaiveDate
fn parse_stored_date(s: &str) -> rusqlite::Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })
}

impl Database {
    /// Insert a visit. Validation is the caller's job.
    pub fn add_visit(&self, visit: &Visit) -> Result<()> {
        debug!(id = %visit.id, has_photo = visit.has_photo(), "adding visit");
        self.insert_visit(visit)
    }

    pub fn insert_visit(&self, visit: &Visit) -> Result<()> {
        self.conn.execute(
            r#"INSERT INTO Visits (id, locationName, date, appointmentNote, photo, projectId)
               VALUES (?, ?, ?, ?, ?, ?)"#,
            params![
                visit.id,
                visit.location_name,
                visit.date.format(DATE_FORMAT).to_string(),
                visit.appointment_note,
                visit.photo.as_ref().map(Photo::as_bytes),
                visit.project_id,
            ],
        )?;
        Ok(())
    }

    pub fn list_visits(&self) -> Result<Vec<Visit>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Visits ORDER BY rowid", VISIT_COLUMNS))?;

        let visits = stmt
            .query_map([], Self::row_to_visit)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(count = visits.len(), "listed visits");
        Ok(visits)
    }

    pub fn get_visit_by_id(&self, id: &str) -> Result<Option<Visit>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Visits WHERE id = ?", VISIT_COLUMNS))?;

        let result = stmt.query_row([id], Self::row_to_visit);

        match result {
            Ok(visit) => Ok(Some(visit)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Visits linked to a project, oldest first
    pub fn get_visits_for_project(&self, project_id: &str) -> Result<Vec<Visit>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM Visits WHERE projectId = ? ORDER BY date ASC, rowid ASC",
            VISIT_COLUMNS
        ))?;

        let visits = stmt
            .query_map([project_id], Self::row_to_visit)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(visits)
    }

    /// A row whose date is NULL or not `YYYY-MM-DD` is a conversion error,
    /// which fails the whole scan it belongs to.
    pub(super) fn row_to_visit(row: &Row) -> rusqlite::Result<Visit> {
        let date_str: String = row.get(2)?;
        let photo: Option<Vec<u8>> = row.get(4)?;

        Ok(Visit {
            id: row.get(0)?,
            location_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            date: parse_stored_date(&date_str)?,
            appointment_note: row.get(3)?,
            photo: photo.map(Photo::from),
            project_id: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::sample_png;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_and_list_visit() {
        let db = Database::open_memory().unwrap();

        let visit = Visit::new("X".to_string(), date(2024, 3, 15));
        db.add_visit(&visit).unwrap();

        let visits = db.list_visits().unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].id, visit.id);
        assert_eq!(visits[0].location_name, "X");
        assert_eq!(visits[0].date, date(2024, 3, 15));
        assert!(visits[0].photo.is_none());
        assert!(visits[0].project_id.is_none());
        assert!(visits[0].appointment_note.is_none());
    }

    #[test]
    fn test_list_visits_empty() {
        let db = Database::open_memory().unwrap();
        assert!(db.list_visits().unwrap().is_empty());
    }

    #[test]
    fn test_list_visits_insertion_order() {
        let db = Database::open_memory().unwrap();

        let names = ["North gate", "Depot", "Annex"];
        for name in names {
            db.add_visit(&Visit::new(name.to_string(), date(2024, 1, 1))).unwrap();
        }

        let listed: Vec<String> = db
            .list_visits()
            .unwrap()
            .into_iter()
            .map(|v| v.location_name)
            .collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_photo_blob_roundtrip() {
        let db = Database::open_memory().unwrap();

        let png = sample_png(2, 2);
        let mut visit = Visit::new("Site".to_string(), date(2024, 5, 2));
        visit.photo = Photo::encode(Some(png.clone()));
        visit.appointment_note = Some("Meet the foreman".to_string());
        db.add_visit(&visit).unwrap();

        let stored = db.get_visit_by_id(&visit.id).unwrap().unwrap();
        assert_eq!(stored, visit);

        let decoded = stored.photo.unwrap().decode().unwrap();
        assert_eq!(decoded.raw, png);
    }

    #[test]
    fn test_malformed_photo_is_stored_as_is() {
        let db = Database::open_memory().unwrap();

        let mut visit = Visit::new("Site".to_string(), date(2024, 5, 2));
        visit.photo = Photo::encode(Some(b"garbage".to_vec()));
        db.add_visit(&visit).unwrap();

        let stored = db.get_visit_by_id(&visit.id).unwrap().unwrap();
        let photo = stored.photo.unwrap();
        assert_eq!(photo.as_bytes(), b"garbage");
        assert!(matches!(photo.decode(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_get_visit_missing() {
        let db = Database::open_memory().unwrap();
        assert!(db.get_visit_by_id("VDEADBEEF").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_id_is_storage_error() {
        let db = Database::open_memory().unwrap();

        let visit = Visit::new("Once".to_string(), date(2024, 1, 1));
        db.add_visit(&visit).unwrap();

        let mut again = Visit::new("Twice".to_string(), date(2024, 1, 2));
        again.id = visit.id.clone();
        let err = db.add_visit(&again).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));

        // Original row untouched
        let stored = db.get_visit_by_id(&visit.id).unwrap().unwrap();
        assert_eq!(stored.location_name, "Once");
    }

    #[test]
    fn test_legacy_timestamp_id_accepted() {
        let db = Database::open_memory().unwrap();

        let mut visit = Visit::new("Legacy".to_string(), date(2023, 11, 30));
        visit.id = "V20231130091500".to_string();
        db.add_visit(&visit).unwrap();

        assert!(db.get_visit_by_id("V20231130091500").unwrap().is_some());
    }

    #[test]
    fn test_unreadable_date_fails_whole_list() {
        let db = Database::open_memory().unwrap();
        db.add_visit(&Visit::new("Good".to_string(), date(2024, 1, 1))).unwrap();
        db.conn
            .execute(
                "INSERT INTO Visits (id, locationName, date) VALUES ('VBADDATE1', 'Bad', '15/03/2024')",
                [],
            )
            .unwrap();

        assert!(matches!(db.list_visits(), Err(Error::Storage(_))));
        assert!(matches!(db.get_visit_by_id("VBADDATE1"), Err(Error::Storage(_))));

        db.conn
            .execute("UPDATE Visits SET date = NULL WHERE id = 'VBADDATE1'", [])
            .unwrap();
        assert!(matches!(db.list_visits(), Err(Error::Storage(_))));
    }

    #[test]
    fn test_get_visits_for_project() {
        let db = Database::open_memory().unwrap();

        let mut later = Visit::new("Later".to_string(), date(2024, 6, 1));
        later.project_id = Some("P00000001".to_string());
        let mut earlier = Visit::new("Earlier".to_string(), date(2024, 2, 1));
        earlier.project_id = Some("P00000001".to_string());
        let other = Visit::new("Unlinked".to_string(), date(2024, 1, 1));

        db.add_visit(&later).unwrap();
        db.add_visit(&earlier).unwrap();
        db.add_visit(&other).unwrap();

        let visits = db.get_visits_for_project("P00000001").unwrap();
        assert_eq!(visits.len(), 2);
        assert_eq!(visits[0].location_name, "Earlier");
        assert_eq!(visits[1].location_name, "Later");
    }
}
