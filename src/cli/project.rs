use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{contact_row, project_row, visit_row, wrong_kind_hint};
use crate::cli::ui::{non_empty, prompt_field_optional, FormResult};
use crate::db::Database;
use crate::models::{Contact, EntityKind, Project, Visit};

/// A project with everything linked to it
#[derive(Debug, Serialize)]
struct ProjectOverview {
    project: Project,
    visits: Vec<Visit>,
    contacts: Vec<Contact>,
}

/// Execute `project add`. With no name and no description, prompts for both.
pub fn run_add_project(
    db: &Database,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let (name, description) = if name.is_none() && description.is_none() {
        match interactive_mode()? {
            Some(fields) => fields,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        (name, description)
    };

    let mut project = Project::new(name.and_then(non_empty).unwrap_or_default());
    project.description = description.and_then(non_empty);
    project.validate()?;

    db.add_project(&project)?;

    println!("\nCreated: {} ({})", project.name, project.id);
    Ok(())
}

fn interactive_mode() -> Result<Option<(Option<String>, Option<String>)>> {
    let FormResult::Value(name) = prompt_field_optional("name")? else {
        return Ok(None);
    };
    let FormResult::Value(description) = prompt_field_optional("description")? else {
        return Ok(None);
    };
    Ok(Some((Some(name), Some(description))))
}

/// Execute `project list`
pub fn run_list_projects(db: &Database, json: bool) -> Result<()> {
    let projects = db.list_projects()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects yet.");
        return Ok(());
    }

    for project in &projects {
        println!("{}", project_row(project));
    }
    Ok(())
}

/// Execute `project show`: the project, its visits and its contacts
pub fn run_show_project(db: &Database, id: &str, json: bool) -> Result<()> {
    let id = id.trim();
    let Some(project) = db.get_project_by_id(id)? else {
        println!("No project found.");
        if let Some(hint) = wrong_kind_hint(id, EntityKind::Project) {
            println!("{}", hint);
        }
        return Ok(());
    };

    let overview = ProjectOverview {
        visits: db.get_visits_for_project(&project.id)?,
        contacts: db.get_contacts_for_project(&project.id)?,
        project,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    println!("{}", overview.project.name);
    if let Some(desc) = overview.project.description.as_deref() {
        println!("  {}", desc);
    }

    if overview.visits.is_empty() {
        println!("\n  No visits for this project.");
    } else {
        println!("\n  Visits:");
        for visit in &overview.visits {
            println!("    {}", visit_row(visit));
        }
    }

    if overview.contacts.is_empty() {
        println!("\n  No contacts for this project.");
    } else {
        println!("\n  Contacts:");
        for contact in &overview.contacts {
            println!("    {}", contact_row(contact));
        }
    }

    println!("\n  id: {}", overview.project.id);
    Ok(())
}
