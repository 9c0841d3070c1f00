use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod contact;
pub mod display;
pub mod menu;
pub mod photo_utils;
pub mod project;
pub mod ui;
pub mod visit;

pub use contact::{run_add_contact, run_list_contacts, ContactForm};
pub use menu::run_menu;
pub use project::{run_add_project, run_list_projects, run_show_project};
pub use visit::{run_add_visit, run_browse_visits, run_list_visits, run_show_visit, VisitForm};

#[derive(Parser)]
#[command(name = "visitlog")]
#[command(about = "Field visits, projects and contacts for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file (overrides VISITLOG_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record and browse field visits
    #[command(subcommand)]
    Visit(VisitCommand),
    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Manage project contacts
    #[command(subcommand)]
    Contact(ContactCommand),
}

#[derive(Subcommand)]
pub enum VisitCommand {
    /// Record a new visit (prompts when no fields are given)
    Add(VisitAddArgs),
    /// List all visits
    List(ListArgs),
    /// Show a visit with its project and contacts
    Show(VisitShowArgs),
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Add a new project (prompts when no fields are given)
    Add(ProjectAddArgs),
    /// List all projects
    List(ListArgs),
    /// Show a project with its visits and contacts
    Show(ProjectShowArgs),
}

#[derive(Subcommand)]
pub enum ContactCommand {
    /// Add a new contact (prompts when no fields are given)
    Add(ContactAddArgs),
    /// List all contacts
    List(ListArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Print JSON instead of one line per record
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct VisitAddArgs {
    #[arg(short, long)]
    pub location: Option<String>,
    /// Visit date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Appointment note
    #[arg(short, long)]
    pub note: Option<String>,
    /// Path to an image file, stored as-is
    #[arg(long, value_name = "PATH")]
    pub photo: Option<PathBuf>,
    /// Project id this visit belongs to
    #[arg(short, long)]
    pub project: Option<String>,
}

impl From<VisitAddArgs> for VisitForm {
    fn from(args: VisitAddArgs) -> Self {
        Self {
            location: args.location,
            date: args.date,
            note: args.note,
            photo: args.photo,
            project: args.project,
        }
    }
}

#[derive(Args)]
pub struct VisitShowArgs {
    /// Visit id
    pub id: String,
    #[arg(long)]
    pub json: bool,
    /// Skip the terminal photo preview
    #[arg(long)]
    pub no_photo: bool,
}

#[derive(Args)]
pub struct ProjectAddArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct ProjectShowArgs {
    /// Project id
    pub id: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ContactAddArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    /// Project id this contact belongs to
    #[arg(short, long)]
    pub project: Option<String>,
}

impl From<ContactAddArgs> for ContactForm {
    fn from(args: ContactAddArgs) -> Self {
        Self {
            name: args.name,
            phone: args.phone,
            email: args.email,
            project: args.project,
        }
    }
}
