//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Build the one client a command uses and log it in before the command runs.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Exactly one command runs per process, with at most one login.

use anyhow::{Context, Result};
use superset_config::Config;

use crate::args::{Commands, IdList, resolve_active};
use crate::commands::{self, build_client_from_config, users::NewUser};

/// Dispatch a parsed subcommand to its handler.
pub(crate) async fn run_command(command: Commands, config: &Config) -> Result<()> {
    let mut client = build_client_from_config(config)?;
    client.login().await.context("Failed to obtain access token")?;

    match command {
        Commands::BasicApi {
            method,
            api,
            data,
            headers,
        } => {
            commands::basic_api::run(&mut client, &method, &api, data, &headers).await?;
        }
        Commands::ListRoles => {
            commands::roles::list(&mut client).await?;
        }
        Commands::ListUsers => {
            commands::users::list(&mut client).await?;
        }
        Commands::ListPerms { page, page_size } => {
            commands::permissions::list(&mut client, page, page_size).await?;
        }
        Commands::CreateUser {
            username,
            firstname,
            lastname,
            active,
            no_active,
            roles: IdList(roles),
            email,
            password,
        } => {
            let user = NewUser {
                username,
                first_name: firstname,
                last_name: lastname,
                active: resolve_active(active, no_active),
                roles,
                email,
                password,
            };
            commands::users::create(&mut client, user).await?;
        }
        Commands::CreateRole { name } => {
            commands::roles::create(&mut client, name).await?;
        }
        Commands::AddPerms {
            permissions: IdList(ids),
            id,
        } => {
            commands::roles::add_permissions(&mut client, id, ids).await?;
        }
    }

    Ok(())
}
