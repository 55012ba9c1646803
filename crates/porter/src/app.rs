use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("porter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage Porter projects from the terminal")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress log output, show only essential information")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Porter API host (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("project")
                .about("Create, delete, list and select projects")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("create")
                        .about("Create a project and make it the current project")
                        .arg(
                            Arg::new("name")
                                .help("Name of the new project")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a project by id")
                        .arg(
                            Arg::new("id")
                                .help("Id of the project to delete")
                                .required(true)
                                .index(1)
                                .value_parser(value_parser!(u64)),
                        )
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .help("Skip the confirmation prompt")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("list").about("List projects for the logged-in user"),
                )
                .subcommand(
                    Command::new("clusters").about("List clusters linked to the current project"),
                )
                .subcommand(
                    Command::new("set")
                        .about("Set the current project")
                        .arg(
                            Arg::new("id")
                                .help("Id of the project to use")
                                .required(true)
                                .index(1)
                                .value_parser(value_parser!(u64)),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "porter");
    }

    #[test]
    fn test_cli_project_create() {
        let matches = build_cli()
            .try_get_matches_from(vec!["porter", "project", "create", "staging"])
            .unwrap();

        let (_, project_matches) = matches.subcommand().unwrap();
        let create_matches = project_matches.subcommand_matches("create").unwrap();
        assert_eq!(create_matches.get_one::<String>("name").unwrap(), "staging");
    }

    #[test]
    fn test_cli_project_delete_with_yes() {
        let matches = build_cli()
            .try_get_matches_from(vec!["porter", "project", "delete", "4", "--yes"])
            .unwrap();

        let delete_matches = matches
            .subcommand_matches("project")
            .and_then(|m| m.subcommand_matches("delete"))
            .unwrap();
        assert_eq!(*delete_matches.get_one::<u64>("id").unwrap(), 4);
        assert!(delete_matches.get_flag("yes"));
    }

    #[test]
    fn test_cli_project_delete_rejects_non_numeric_id() {
        let result = build_cli().try_get_matches_from(vec!["porter", "project", "delete", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_project_requires_subcommand() {
        let result = build_cli().try_get_matches_from(vec!["porter", "project"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "porter",
                "project",
                "list",
                "-q",
                "--host",
                "http://127.0.0.1:9000",
            ])
            .unwrap();

        assert!(matches.get_flag("quiet"));
        assert_eq!(
            matches.get_one::<String>("host").unwrap(),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn test_cli_project_set() {
        let matches = build_cli()
            .try_get_matches_from(vec!["porter", "project", "set", "12"])
            .unwrap();

        let set_matches = matches
            .subcommand_matches("project")
            .and_then(|m| m.subcommand_matches("set"))
            .unwrap();
        assert_eq!(*set_matches.get_one::<u64>("id").unwrap(), 12);
    }
}
