use std::io::{self, Write};

use clap::ArgMatches;
use tracing::{error, info, warn};

use porter_core::config::PorterConfig;
use porter_core::config::loading::{clear_current_project_id, set_current_project_id};
use porter_core::events;
use porter_core::{AuthUser, HttpApiClient, ProjectsApi};

use crate::table::TableFormatter;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> PorterConfig {
    match PorterConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.porter/config.toml and ./.porter/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PorterConfig::default()
        }
    }
}

/// `y` or `yes`, any case, surrounding whitespace ignored.
fn is_affirmative(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup("porter");

    let mut config = load_config_with_warning();
    if let Some(host) = matches.get_one::<String>("host") {
        config.api.host = Some(host.clone());
    }

    let result = match matches.subcommand() {
        Some(("project", sub_matches)) => handle_project_command(sub_matches, &config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown("porter");
    result
}

fn handle_project_command(
    matches: &ArgMatches,
    config: &PorterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setting the current project is purely local
    if let Some(("set", sub_matches)) = matches.subcommand() {
        return handle_set_command(sub_matches);
    }

    let api = HttpApiClient::new(&config.api).inspect_err(|e| {
        eprintln!("❌ {}", e);
        events::log_app_error(e);
    })?;
    let user = check_login(&api)?;

    match matches.subcommand() {
        Some(("create", sub_matches)) => handle_create_command(sub_matches, &api),
        Some(("delete", sub_matches)) => handle_delete_command(sub_matches, &api, config),
        Some(("list", _)) => handle_list_command(&api, &user, config),
        Some(("clusters", _)) => handle_clusters_command(&api, config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown project command".into())
        }
    }
}

/// Confirm the configured credentials before talking to project routes.
fn check_login(api: &dyn ProjectsApi) -> Result<AuthUser, Box<dyn std::error::Error>> {
    match api.auth_check() {
        Ok(user) => {
            info!(event = "cli.login_checked", user_id = user.id);
            Ok(user)
        }
        Err(e) => {
            eprintln!("❌ Login check failed: {}", e);
            error!(event = "cli.login_check_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_create_command(
    matches: &ArgMatches,
    api: &dyn ProjectsApi,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Name argument is required")?;

    info!(event = "cli.create_started", name = %name);

    let project = match api.create_project(name) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("❌ Failed to create project '{}': {}", name, e);
            error!(event = "cli.create_failed", name = %name, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    println!(
        "✅ Created project '{}' with id {}",
        project.name, project.id
    );

    let project_id = project.id;
    let path = set_current_project_id(project_id).inspect_err(|e| {
        eprintln!("❌ Could not save current project: {}", e);
        events::log_app_error(e);
    })?;
    println!("   Current project set to {}", project_id);
    println!("   Saved in {}", path.display());

    info!(event = "cli.create_completed", project_id = project_id);

    Ok(())
}

fn handle_delete_command(
    matches: &ArgMatches,
    api: &dyn ProjectsApi,
    config: &PorterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let project_id = *matches
        .get_one::<u64>("id")
        .ok_or("Project id argument is required")?;

    info!(event = "cli.delete_started", project_id = project_id);

    if !matches.get_flag("yes") {
        print!(
            "Are you sure you want to delete project {}? [y/n] ",
            project_id
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !is_affirmative(&input) {
            println!("Aborted.");
            info!(event = "cli.delete_aborted", project_id = project_id);
            return Ok(());
        }
    }

    let project = match api.delete_project(project_id) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("❌ Failed to delete project {}: {}", project_id, e);
            error!(event = "cli.delete_failed", project_id = project_id, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    println!("✅ Deleted project '{}' (id {})", project.name, project.id);

    if config.project_id() == Some(project_id) {
        // The deleted project was current
        match clear_current_project_id(project_id) {
            Ok(paths) => {
                for path in paths {
                    println!("   Cleared current project in {}", path.display());
                }
            }
            Err(e) => warn!(event = "cli.delete_clear_current_failed", error = %e),
        }
    }

    info!(event = "cli.delete_completed", project_id = project_id);

    Ok(())
}

fn handle_list_command(
    api: &dyn ProjectsApi,
    user: &AuthUser,
    config: &PorterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.list_started", user_id = user.id);

    match api.list_user_projects(user.id) {
        Ok(projects) => {
            if projects.is_empty() {
                println!("No projects found. Create one with 'porter project create <name>'.");
            } else {
                println!("Projects:");
                TableFormatter::projects(&projects, config.project_id()).print_table();
            }

            info!(event = "cli.list_completed", count = projects.len());

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to list projects: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_clusters_command(
    api: &dyn ProjectsApi,
    config: &PorterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(project_id) = config.project_id() else {
        eprintln!("❌ No project set. Run 'porter project set <id>' first.");
        error!(event = "cli.clusters_failed", reason = "no_project");
        return Err("No project set".into());
    };

    info!(event = "cli.clusters_started", project_id = project_id);

    match api.list_project_clusters(project_id) {
        Ok(clusters) => {
            if clusters.is_empty() {
                println!("No clusters linked to project {}.", project_id);
            } else {
                println!("Clusters for project {}:", project_id);
                TableFormatter::clusters(&clusters).print_table();
            }

            info!(event = "cli.clusters_completed", count = clusters.len());

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to list clusters: {}", e);
            error!(event = "cli.clusters_failed", project_id = project_id, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_set_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let project_id = *matches
        .get_one::<u64>("id")
        .ok_or("Project id argument is required")?;

    match set_current_project_id(project_id) {
        Ok(path) => {
            println!("✅ Current project set to {}", project_id);
            println!("   Saved in {}", path.display());
            info!(
                event = "cli.set_completed",
                project_id = project_id,
                path = %path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Could not save current project: {}", e);
            error!(event = "cli.set_failed", project_id = project_id, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
