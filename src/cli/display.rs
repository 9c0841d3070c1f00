use chrono::{Datelike, NaiveDate};

use crate::cli::photo_utils;
use crate::db::RecordCounts;
use crate::models::{Contact, EntityKind, Project, Visit, VisitDetail};

/// One-line visit summary for lists
pub fn visit_row(visit: &Visit) -> String {
    let mut row = format!("{}  {}  {}", visit.id, format_date(&visit.date), visit.location_name);
    if visit.has_photo() {
        row.push_str("  [photo]");
    }
    row
}

pub fn project_row(project: &Project) -> String {
    match project.description.as_deref().filter(|d| !d.is_empty()) {
        Some(desc) => format!(
            "{}  {}  {}",
            project.id,
            project.name,
            super::ui::truncate_for_display(desc, 50)
        ),
        None => format!("{}  {}", project.id, project.name),
    }
}

pub fn contact_row(contact: &Contact) -> String {
    match contact.reach() {
        Some(reach) => format!("{}  {}  {}", contact.id, contact.name, reach),
        None => format!("{}  {}", contact.id, contact.name),
    }
}

/// Print a visit with its project and contacts (only non-empty sections)
pub fn print_visit_detail(detail: &VisitDetail, preview_photo: bool) {
    let visit = &detail.visit;

    println!("{}\n", visit.location_name);
    println!("  {}", format_date(&visit.date));

    if let Some(note) = visit.appointment_note.as_deref().filter(|n| !n.is_empty()) {
        println!("  {}", note);
    }

    // Photo problems stay local to this section
    if let Some(ref photo) = visit.photo {
        photo_utils::show_photo(photo, preview_photo);
    }

    match (&detail.project, &visit.project_id) {
        (Some(project), _) => {
            println!("\n  Project: {}", project.name);
            if let Some(desc) = project.description.as_deref().filter(|d| !d.is_empty()) {
                println!("  {}", desc);
            }
        }
        (None, Some(missing)) => println!("\n  Project: {} (not found)", missing),
        (None, None) => {}
    }

    if let Some(ref contacts) = detail.contacts {
        if contacts.is_empty() {
            println!("\n  No contacts for this project.");
        } else {
            println!("\n  Contacts:");
            for contact in contacts {
                match contact.reach() {
                    Some(reach) => println!("    {}  {}", contact.name, reach),
                    None => println!("    {}", contact.name),
                }
            }
        }
    }

    println!("\n  id: {}", visit.id);
}

/// Hint for an id whose prefix names a different kind of record
pub fn wrong_kind_hint(id: &str, expected: EntityKind) -> Option<String> {
    let kind = EntityKind::of_id(id).filter(|k| *k != expected)?;
    Some(format!(
        "{} looks like a {} id, not a {} id.",
        id,
        kind.as_str(),
        expected.as_str()
    ))
}

pub fn print_counts(counts: &RecordCounts) {
    println!("  visits    {}", counts.visits);
    println!("  projects  {}", counts.projects);
    println!("  contacts  {}", counts.contacts);
}

/// "Mar 15, 2024"
pub fn format_date(date: &NaiveDate) -> String {
    format!("{} {}, {}", month_abbrev(date.month()), date.day(), date.year())
}

/// Get month abbreviation
fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Photo;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&march_15()), "Mar 15, 2024");
        assert_eq!(format_date(&NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()), "Dec 1, 2023");
    }

    #[test]
    fn test_visit_row() {
        let mut visit = Visit::new("Depot".to_string(), march_15());
        visit.id = "V0000ABCD".to_string();
        assert_eq!(visit_row(&visit), "V0000ABCD  Mar 15, 2024  Depot");

        visit.photo = Some(Photo::from(vec![1, 2, 3]));
        assert!(visit_row(&visit).ends_with("[photo]"));
    }

    #[test]
    fn test_project_row() {
        let mut project = Project::new("Survey".to_string());
        project.id = "P00000001".to_string();
        assert_eq!(project_row(&project), "P00000001  Survey");

        project.description = Some("East span".to_string());
        assert_eq!(project_row(&project), "P00000001  Survey  East span");
    }

    #[test]
    fn test_contact_row() {
        let mut contact = Contact::new("Ana".to_string());
        contact.id = "C00000001".to_string();
        assert_eq!(contact_row(&contact), "C00000001  Ana");

        contact.phone = Some("555-0101".to_string());
        assert_eq!(contact_row(&contact), "C00000001  Ana  555-0101");
    }

    #[test]
    fn test_wrong_kind_hint() {
        assert_eq!(
            wrong_kind_hint("P1A2B3C4D", EntityKind::Visit).as_deref(),
            Some("P1A2B3C4D looks like a project id, not a visit id.")
        );
        assert_eq!(
            wrong_kind_hint("C00000001", EntityKind::Project).as_deref(),
            Some("C00000001 looks like a contact id, not a project id.")
        );
        assert_eq!(wrong_kind_hint("V20240315143000", EntityKind::Visit), None);
        assert_eq!(wrong_kind_hint("X123", EntityKind::Visit), None);
    }

    #[test]
    fn test_print_detail_with_bad_photo_does_not_panic() {
        let mut visit = Visit::new("Depot".to_string(), march_15());
        visit.photo = Some(Photo::from(b"broken".to_vec()));
        visit.project_id = Some("PMISSING0".to_string());
        let detail = VisitDetail {
            visit,
            project: None,
            contacts: Some(vec![]),
        };
        print_visit_detail(&detail, false);
    }
}
