use clap::Parser;
use tracing_subscriber::EnvFilter;
use visitlog::cli::{
    run_add_contact, run_add_project, run_add_visit, run_list_contacts, run_list_projects,
    run_list_visits, run_menu, run_show_project, run_show_visit, Cli, Commands, ContactCommand,
    ProjectCommand, VisitCommand,
};
use visitlog::config::Config;
use visitlog::db::Database;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.db.clone())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A store that cannot be created or upgraded stops startup here
    let db = Database::open_at(config.db_path.clone())?;

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&db)?;
        }
        Some(Commands::Visit(VisitCommand::Add(args))) => {
            run_add_visit(&db, args.into())?;
        }
        Some(Commands::Visit(VisitCommand::List(args))) => {
            run_list_visits(&db, args.json)?;
        }
        Some(Commands::Visit(VisitCommand::Show(args))) => {
            run_show_visit(&db, &args.id, args.json, !args.no_photo)?;
        }
        Some(Commands::Project(ProjectCommand::Add(args))) => {
            run_add_project(&db, args.name, args.description)?;
        }
        Some(Commands::Project(ProjectCommand::List(args))) => {
            run_list_projects(&db, args.json)?;
        }
        Some(Commands::Project(ProjectCommand::Show(args))) => {
            run_show_project(&db, &args.id, args.json)?;
        }
        Some(Commands::Contact(ContactCommand::Add(args))) => {
            run_add_contact(&db, args.into())?;
        }
        Some(Commands::Contact(ContactCommand::List(args))) => {
            run_list_contacts(&db, args.json)?;
        }
    }

    Ok(())
}
