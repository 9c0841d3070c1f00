use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{new_id, EntityKind, Photo};
use crate::error::{Error, Result};

/// Storage and input format for visit dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub location_name: String,
    pub date: NaiveDate,
    pub appointment_note: Option<String>,
    pub photo: Option<Photo>,
    /// Advisory link to a project; not enforced by the store.
    pub project_id: Option<String>,
}

impl Visit {
    pub fn new(location_name: String, date: NaiveDate) -> Self {
        Self {
            id: new_id(EntityKind::Visit),
            location_name,
            date,
            appointment_note: None,
            photo: None,
            project_id: None,
        }
    }

    /// Required fields: location name and date (the date is enforced by the type).
    pub fn validate(&self) -> Result<()> {
        if self.location_name.trim().is_empty() {
            return Err(Error::Validation {
                field: "location name",
            });
        }
        Ok(())
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

/// Parse a `YYYY-MM-DD` date as typed by the user or stored in the database.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_new() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let visit = Visit::new("Warehouse 4".to_string(), date);
        assert!(visit.id.starts_with('V'));
        assert_eq!(visit.location_name, "Warehouse 4");
        assert!(!visit.has_photo());
        assert!(visit.project_id.is_none());
        assert!(visit.validate().is_ok());
    }

    #[test]
    fn test_visit_requires_location() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let visit = Visit::new("   ".to_string(), date);
        let err = visit.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(
            parse_date(" 2024-12-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
        assert!(matches!(parse_date("15/03/2024"), Err(Error::InvalidDate(_))));
        assert!(parse_date("2024-02-30").is_err());
    }
}
