//! Mailcraft application shell
//!
//! This is the thin shell that wires configuration, session state and the
//! command handlers to the CLI. Core logic lives in the `crates/` directory.

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ConfigCommand, CustomCommand};
use commands::{custom, data, export, settings, templates};
use mailcraft_core::{AppConfig, CustomTemplateUpdate, NewCustomTemplate};
use state::AppState;
use std::path::Path;
use tracing::info;

/// Initialize tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mailcraft=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Parse arguments and run one command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    info!("Starting Mailcraft v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_with_env().context("failed to load configuration")?;
    let state = AppState::new(config)?;
    execute(&state, cli.command).await
}

/// Run `command` against `state`, printing results to stdout.
pub async fn execute(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::Templates => {
            for entry in templates::list_templates(state) {
                println!("{:<40} {:<12} {}", entry.id, entry.category, entry.name);
            }
        }
        Command::Variables => {
            for var in templates::list_variables() {
                println!("{:<20} {:<45} e.g. {}", var.token, var.description, var.example);
            }
        }
        Command::Render {
            id,
            data: data_file,
            viewport,
            framed,
        } => {
            apply_data_file(state, data_file.as_deref())?;
            templates::select_template(state, &id);
            let frame = templates::render_template(state, viewport);
            if framed {
                println!("{}", frame.to_html());
            } else {
                println!("{}", frame.fragment);
            }
        }
        Command::Export {
            id,
            data: data_file,
            out,
        } => {
            apply_data_file(state, data_file.as_deref())?;
            templates::select_template(state, &id);
            let path = export::export_template(state, out.as_deref()).await?;
            println!("{}", path.display());
        }
        Command::Data { data: data_file } => {
            apply_data_file(state, data_file.as_deref())?;
            let current = data::get_template_data(state);
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        Command::Custom { action } => run_custom(state, action)?,
        Command::Config { action } => match action {
            ConfigCommand::Show => println!("{}", settings::show_config(state)?),
            ConfigCommand::Init { force } => {
                let path = AppConfig::config_path()?;
                settings::write_config(state, &path, force)?;
                println!("{}", path.display());
            }
        },
    }
    Ok(())
}

fn run_custom(state: &AppState, action: CustomCommand) -> Result<()> {
    match action {
        CustomCommand::List => {
            let list = custom::list_custom_templates(state);
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        CustomCommand::Add {
            name,
            html,
            css,
            description,
            category,
        } => {
            let template = custom::add_custom_template(
                state,
                NewCustomTemplate {
                    name,
                    description,
                    category,
                    html: read_file(&html)?,
                    css: css.as_deref().map(read_file).transpose()?.unwrap_or_default(),
                },
            );
            println!("{}", template.id);
        }
        CustomCommand::Update {
            id,
            name,
            description,
            category,
            html,
            css,
        } => {
            let update = CustomTemplateUpdate {
                name,
                description,
                category,
                html: html.as_deref().map(read_file).transpose()?,
                css: css.as_deref().map(read_file).transpose()?,
            };
            let template = custom::update_custom_template(state, &id, update)?;
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        CustomCommand::Delete { id } => {
            let removed = custom::delete_custom_template(state, &id)?;
            println!("deleted {}", removed.id);
        }
        CustomCommand::Duplicate { id, name } => {
            let copy = custom::duplicate_custom_template(state, &id, &name)?;
            println!("{}", copy.id);
        }
    }
    Ok(())
}

fn apply_data_file(state: &AppState, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        let patch = data::read_data_patch(path)
            .with_context(|| format!("failed to read template data from {}", path.display()))?;
        data::update_template_data(state, patch);
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
