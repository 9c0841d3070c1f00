use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;

use crate::cli::display::{print_visit_detail, visit_row, wrong_kind_hint};
use crate::cli::photo_utils;
use crate::cli::ui::{self, non_empty, prompt_field, prompt_field_optional, select, FormResult};
use crate::db::Database;
use crate::error::Error;
use crate::models::{parse_date, EntityKind, Photo, Visit, DATE_FORMAT};

/// Raw visit fields as collected from flags or prompts
#[derive(Debug, Default, Clone)]
pub struct VisitForm {
    pub location: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
    pub photo: Option<PathBuf>,
    pub project: Option<String>,
}

impl VisitForm {
    fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.date.is_none()
            && self.note.is_none()
            && self.photo.is_none()
            && self.project.is_none()
    }
}

/// Execute `visit add`. With no fields given, prompts for them.
pub fn run_add_visit(db: &Database, form: VisitForm) -> Result<()> {
    let form = if form.is_empty() {
        match interactive_form(db)? {
            Some(form) => form,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        form
    };

    let visit = build_visit(form)?;

    if let Some(ref project_id) = visit.project_id {
        if db.get_project_by_id(project_id)?.is_none() {
            ui::warning(&format!("No project {} exists yet; saving the link anyway.", project_id));
        }
    }

    db.add_visit(&visit)?;

    println!("\nCreated: {} ({})", visit.location_name, visit.id);
    Ok(())
}

/// Check required fields and assemble the record. Nothing touches the store here.
fn build_visit(form: VisitForm) -> Result<Visit> {
    let location = form.location.and_then(non_empty).unwrap_or_default();
    let date = form
        .date
        .and_then(non_empty)
        .ok_or(Error::Validation { field: "date" })?;

    let mut visit = Visit::new(location, parse_date(&date)?);
    visit.validate()?;

    visit.appointment_note = form.note.and_then(non_empty);
    visit.project_id = form.project.and_then(non_empty);

    let upload = form
        .photo
        .as_deref()
        .map(photo_utils::read_upload)
        .transpose()?;
    visit.photo = Photo::encode(upload);

    Ok(visit)
}

fn interactive_form(db: &Database) -> Result<Option<VisitForm>> {
    let today = Local::now().date_naive().format(DATE_FORMAT).to_string();

    let FormResult::Value(location) = prompt_field_optional("location")? else {
        return Ok(None);
    };
    let FormResult::Value(date) = prompt_field("date", Some(today.as_str()))? else {
        return Ok(None);
    };
    let FormResult::Value(note) = prompt_field_optional("appointment")? else {
        return Ok(None);
    };
    let FormResult::Value(photo) = prompt_field_optional("photo (path)")? else {
        return Ok(None);
    };

    let project = pick_project(db)?;

    Ok(Some(VisitForm {
        location: Some(location),
        date: Some(date),
        note: Some(note),
        photo: non_empty(photo).map(PathBuf::from),
        project,
    }))
}

/// Offer existing projects plus "(none)". Returns the chosen project id.
pub(crate) fn pick_project(db: &Database) -> Result<Option<String>> {
    let projects = db.list_projects()?;
    if projects.is_empty() {
        return Ok(None);
    }

    let mut labels = vec!["(none)".to_string()];
    labels.extend(projects.iter().map(|p| format!("{} ({})", p.name, p.id)));

    match select("project", &labels)? {
        Some(idx) if idx > 0 => Ok(Some(projects[idx - 1].id.clone())),
        _ => Ok(None),
    }
}

/// Execute `visit list`
pub fn run_list_visits(db: &Database, json: bool) -> Result<()> {
    let visits = db.list_visits()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&visits)?);
        return Ok(());
    }

    if visits.is_empty() {
        println!("No visits yet.");
        return Ok(());
    }

    for visit in &visits {
        println!("{}", visit_row(visit));
    }
    Ok(())
}

/// Execute `visit show`
pub fn run_show_visit(db: &Database, id: &str, json: bool, preview_photo: bool) -> Result<()> {
    let id = id.trim();
    let Some(detail) = db.get_visit_detail(id)? else {
        println!("No visit found.");
        if let Some(hint) = wrong_kind_hint(id, EntityKind::Visit) {
            println!("{}", hint);
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print_visit_detail(&detail, preview_photo);
    }
    Ok(())
}

/// Pick a visit from the full list and show its detail
pub fn run_browse_visits(db: &Database) -> Result<()> {
    let visits = db.list_visits()?;
    if visits.is_empty() {
        println!("No visits yet.");
        return Ok(());
    }

    let rows: Vec<String> = visits.iter().map(visit_row).collect();
    let Some(idx) = select("visit", &rows)? else {
        return Ok(());
    };

    let _ = ui::clear_screen();
    run_show_visit(db, &visits[idx].id, false, true)
}
