use anyhow::Result;

use crate::cli::display::contact_row;
use crate::cli::ui::{self, non_empty, prompt_field_optional, FormResult};
use crate::cli::visit::pick_project;
use crate::db::Database;
use crate::models::Contact;

/// Raw contact fields as collected from flags or prompts
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub project: Option<String>,
}

impl ContactForm {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.project.is_none()
    }
}

/// Execute `contact add`. With no fields given, prompts for them.
pub fn run_add_contact(db: &Database, form: ContactForm) -> Result<()> {
    let form = if form.is_empty() {
        match interactive_mode(db)? {
            Some(form) => form,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        form
    };

    let mut contact = Contact::new(form.name.and_then(non_empty).unwrap_or_default());
    contact.phone = form.phone.and_then(non_empty);
    contact.email = form.email.and_then(non_empty);
    contact.project_id = form.project.and_then(non_empty);
    contact.validate()?;

    if let Some(ref project_id) = contact.project_id {
        if db.get_project_by_id(project_id)?.is_none() {
            ui::warning(&format!("No project {} exists yet; saving the link anyway.", project_id));
        }
    }

    db.add_contact(&contact)?;

    println!("\nCreated: {} ({})", contact.name, contact.id);
    Ok(())
}

fn interactive_mode(db: &Database) -> Result<Option<ContactForm>> {
    let FormResult::Value(name) = prompt_field_optional("name")? else {
        return Ok(None);
    };
    let FormResult::Value(phone) = prompt_field_optional("phone")? else {
        return Ok(None);
    };
    let FormResult::Value(email) = prompt_field_optional("email")? else {
        return Ok(None);
    };

    let project = pick_project(db)?;

    Ok(Some(ContactForm {
        name: Some(name),
        phone: Some(phone),
        email: Some(email),
        project,
    }))
}

/// Execute `contact list`
pub fn run_list_contacts(db: &Database, json: bool) -> Result<()> {
    let contacts = db.list_contacts()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts yet.");
        return Ok(());
    }

    for contact in &contacts {
        println!("{}", contact_row(contact));
    }
    Ok(())
}
