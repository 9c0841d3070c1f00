//! Main menu for visitlog
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use inquire::{Select, Text};
use std::io::{self, IsTerminal};

use crate::cli::display::print_counts;
use crate::cli::ui::{self, clear_screen, minimal_render_config};
use crate::cli::{
    run_add_contact, run_add_project, run_add_visit, run_browse_visits, run_list_contacts,
    run_list_projects, ContactForm, VisitForm,
};
use crate::db::Database;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Home,
    AddVisit,
    ViewVisits,
    AddProject,
    ListProjects,
    AddContact,
    ListContacts,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Home,
        MenuOption::AddVisit,
        MenuOption::ViewVisits,
        MenuOption::AddProject,
        MenuOption::ListProjects,
        MenuOption::AddContact,
        MenuOption::ListContacts,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Home => "Home",
            MenuOption::AddVisit => "Add Visit",
            MenuOption::ViewVisits => "View Visits",
            MenuOption::AddProject => "Add Project",
            MenuOption::ListProjects => "Projects",
            MenuOption::AddContact => "Add Contact",
            MenuOption::ListContacts => "Contacts",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(db: &Database) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            visitlog visit list\n  \
            visitlog visit show <id>\n  \
            visitlog project list\n  \
            Run 'visitlog --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();

        let selection = Select::new("visitlog", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Handle prompt errors (Ctrl+C, terminal issues) - exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        // Errors are shown and the user lands back on the menu to retry
        if let Err(e) = execute_command(db, choice) {
            println!();
            ui::error(&e.to_string());
        }
        wait_for_continue();
    }
}

fn execute_command(db: &Database, choice: MenuOption) -> Result<()> {
    match choice {
        MenuOption::Home => {
            println!("Field visit log: visits, the projects they belong to, and project contacts.\n");
            print_counts(&db.count_records()?);
            Ok(())
        }
        MenuOption::AddVisit => run_add_visit(db, VisitForm::default()),
        MenuOption::ViewVisits => run_browse_visits(db),
        MenuOption::AddProject => run_add_project(db, None, None),
        MenuOption::ListProjects => run_list_projects(db, false),
        MenuOption::AddContact => run_add_contact(db, ContactForm::default()),
        MenuOption::ListContacts => run_list_contacts(db, false),
        MenuOption::Quit => Ok(()),
    }
}

/// Wait for user to press enter to continue
fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}
