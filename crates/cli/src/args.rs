//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Coerce id lists, JSON bodies and header pairs before any network call.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration layers (see `main::build_config`).
//!
//! Invariants:
//! - `-h` is the host flag, so help is reachable through `--help` only.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use superset_client::parse_id_list;
use superset_config::constants::{
    DEFAULT_PERMISSIONS_PAGE_SIZE, ENV_BASE_URL, ENV_PASSWORD, ENV_TIMEOUT, ENV_USERNAME,
};

#[derive(Parser)]
#[command(name = "superset-cli")]
#[command(about = "Superset CLI - Manage Superset roles, users and permissions", long_about = None)]
#[command(version, disable_help_flag = true)]
#[command(
    after_help = "Examples:\n  superset-cli list-roles\n  superset-cli -h http://superset:8088 -u admin -p secret list-users\n  superset-cli list-perms --page 1 --page-size 50\n  superset-cli create-role --name Analyst\n  superset-cli add-perms --id 7 --permissions 1,2,3\n  superset-cli basic-api -m post -a /api/v1/security/roles -d '{\"name\":\"Gamma\"}'\n"
)]
pub struct Cli {
    /// Print help
    #[arg(long, global = true, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Superset host URL [default: http://localhost:8088]
    #[arg(short = 'h', long, global = true, env = ENV_BASE_URL, value_name = "URL")]
    pub url: Option<String>,

    /// Username for the login call [default: admin]
    #[arg(short, long, global = true, env = ENV_USERNAME)]
    pub user: Option<String>,

    /// Password for the login call [default: admin]
    #[arg(short, long, global = true, env = ENV_PASSWORD, hide_env_values = true)]
    pub pass: Option<String>,

    /// Per-request timeout in seconds [default: 5]
    #[arg(long, global = true, env = ENV_TIMEOUT, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// A comma-separated list of integer ids, e.g. `1, 2,3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList(pub Vec<i64>);

fn parse_ids(raw: &str) -> Result<IdList, String> {
    parse_id_list(raw)
        .map(IdList)
        .map_err(|e| format!("expected comma-separated integers: {}", e))
}

fn parse_json(raw: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {}", e))
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err("expected KEY:VALUE".to_string()),
    }
}

/// Resolve the `--active [BOOL]` / `--no-active` pair; the last one given wins.
pub fn resolve_active(active: Option<bool>, no_active: bool) -> bool {
    !no_active && active.unwrap_or(false)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send an arbitrary authenticated request to the Superset API
    #[command(disable_help_flag = true)]
    BasicApi {
        /// HTTP method (case-insensitive)
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// API path appended to the host, e.g. /api/v1/dashboard/
        #[arg(short, long)]
        api: String,

        /// JSON request body
        #[arg(short, long, value_parser = parse_json, value_name = "JSON")]
        data: Option<serde_json::Value>,

        /// Extra header, overrides the defaults (repeatable)
        #[arg(short = 'H', long = "header", value_parser = parse_header, value_name = "KEY:VALUE")]
        headers: Vec<(String, String)>,
    },

    /// List all roles
    #[command(disable_help_flag = true)]
    ListRoles,

    /// List all users
    #[command(disable_help_flag = true)]
    ListUsers,

    /// List one page of permission/view-menu pairs
    #[command(disable_help_flag = true)]
    ListPerms {
        /// Zero-indexed page number
        #[arg(long, default_value_t = 0)]
        page: u64,

        /// Number of entries per page
        #[arg(long, default_value_t = DEFAULT_PERMISSIONS_PAGE_SIZE)]
        page_size: u64,
    },

    /// Create a user
    #[command(disable_help_flag = true)]
    CreateUser {
        /// Login name of the new user
        #[arg(long)]
        username: String,

        /// First name
        #[arg(long)]
        firstname: String,

        /// Last name
        #[arg(long)]
        lastname: String,

        /// Mark the account active; also accepts an explicit true/false, yes/no, 1/0
        #[arg(
            long,
            num_args = 0..=1,
            default_missing_value = "true",
            action = ArgAction::Set,
            value_parser = BoolishValueParser::new(),
            value_name = "BOOL",
            required_unless_present = "no_active",
            overrides_with = "no_active"
        )]
        active: Option<bool>,

        /// Mark the account inactive
        #[arg(long = "no-active", overrides_with = "active")]
        no_active: bool,

        /// Comma-separated role ids, e.g. "1,2"
        #[arg(long, value_parser = parse_ids, value_name = "IDS")]
        roles: IdList,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password of the new user
        #[arg(long)]
        password: String,
    },

    /// Create a role
    #[command(disable_help_flag = true)]
    CreateRole {
        /// Role name
        #[arg(long)]
        name: String,
    },

    /// Attach permission/view-menu ids to a role
    #[command(disable_help_flag = true)]
    AddPerms {
        /// Comma-separated permission/view-menu ids, e.g. "1,2,3"
        #[arg(long, value_parser = parse_ids, value_name = "IDS")]
        permissions: IdList,

        /// Role id
        #[arg(long)]
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "superset-cli",
            "list-roles",
            "-h",
            "http://superset:8088",
            "-u",
            "alice",
            "-p",
            "pw",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://superset:8088"));
        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.pass.as_deref(), Some("pw"));
        assert!(matches!(cli.command, Commands::ListRoles));
    }

    #[test]
    fn test_list_perms_defaults() {
        let cli = Cli::try_parse_from(["superset-cli", "list-perms"]).unwrap();
        match cli.command {
            Commands::ListPerms { page, page_size } => {
                assert_eq!(page, 0);
                assert_eq!(page_size, 25);
            }
            _ => panic!("expected list-perms"),
        }
    }

    #[test]
    fn test_create_user_parses_roles_and_active() {
        let cli = Cli::try_parse_from([
            "superset-cli",
            "create-user",
            "--username",
            "jdoe",
            "--firstname",
            "Jane",
            "--lastname",
            "Doe",
            "--active",
            "no",
            "--roles",
            "1, 2,3",
            "--email",
            "jdoe@example.com",
            "--password",
            "s3cret",
        ])
        .unwrap();
        match cli.command {
            Commands::CreateUser {
                active,
                no_active,
                roles,
                ..
            } => {
                assert!(!resolve_active(active, no_active));
                assert_eq!(roles, IdList(vec![1, 2, 3]));
            }
            _ => panic!("expected create-user"),
        }
    }

    fn create_user_args<'a>(active_flags: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec![
            "superset-cli",
            "create-user",
            "--username",
            "jdoe",
            "--firstname",
            "Jane",
            "--lastname",
            "Doe",
        ];
        args.extend_from_slice(active_flags);
        args.extend_from_slice(&[
            "--roles",
            "1",
            "--email",
            "jdoe@example.com",
            "--password",
            "s3cret",
        ]);
        args
    }

    fn parsed_active(active_flags: &[&str]) -> bool {
        let cli = Cli::try_parse_from(create_user_args(active_flags)).unwrap();
        match cli.command {
            Commands::CreateUser {
                active, no_active, ..
            } => resolve_active(active, no_active),
            _ => panic!("expected create-user"),
        }
    }

    #[test]
    fn test_active_flag_forms() {
        assert!(parsed_active(&["--active"]));
        assert!(!parsed_active(&["--no-active"]));
        assert!(parsed_active(&["--active", "yes"]));
        assert!(!parsed_active(&["--active", "false"]));
    }

    #[test]
    fn test_last_active_flag_wins() {
        assert!(!parsed_active(&["--active", "--no-active"]));
        assert!(parsed_active(&["--no-active", "--active"]));
    }

    #[test]
    fn test_active_flag_is_required() {
        assert!(Cli::try_parse_from(create_user_args(&[])).is_err());
    }

    #[test]
    fn test_empty_roles_is_empty_list() {
        let cli = Cli::try_parse_from([
            "superset-cli",
            "create-user",
            "--username",
            "jdoe",
            "--firstname",
            "Jane",
            "--lastname",
            "Doe",
            "--active",
            "true",
            "--roles",
            "",
            "--email",
            "jdoe@example.com",
            "--password",
            "s3cret",
        ])
        .unwrap();
        match cli.command {
            Commands::CreateUser { roles, .. } => assert_eq!(roles, IdList(vec![])),
            _ => panic!("expected create-user"),
        }
    }

    #[test]
    fn test_malformed_ids_rejected() {
        let result =
            Cli::try_parse_from(["superset-cli", "add-perms", "--id", "7", "--permissions", "1,x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_basic_api_headers_and_data() {
        let cli = Cli::try_parse_from([
            "superset-cli",
            "basic-api",
            "-m",
            "post",
            "-a",
            "/api/v1/security/roles",
            "-d",
            r#"{"name":"Gamma"}"#,
            "-H",
            "X-Trace: abc",
            "--header",
            "Accept:application/json",
        ])
        .unwrap();
        match cli.command {
            Commands::BasicApi {
                method,
                api,
                data,
                headers,
            } => {
                assert_eq!(method, "post");
                assert_eq!(api, "/api/v1/security/roles");
                assert_eq!(data.unwrap()["name"], "Gamma");
                assert_eq!(
                    headers,
                    vec![
                        ("X-Trace".to_string(), "abc".to_string()),
                        ("Accept".to_string(), "application/json".to_string()),
                    ]
                );
            }
            _ => panic!("expected basic-api"),
        }
    }

    #[test]
    fn test_parse_header_rejects_missing_colon() {
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(":value").is_err());
    }
}
