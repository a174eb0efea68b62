//! Command-line interface.

use clap::{Parser, Subcommand};
use mailcraft_render::Viewport;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mailcraft")]
#[command(about = "Render, customise and export email templates", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in and custom templates
    Templates,

    /// List the placeholder tokens custom templates can use
    Variables,

    /// Render a template for preview
    Render {
        /// Template id (e.g. "modern" or a custom template id)
        id: String,

        /// JSON file with template data overrides
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Preview viewport: desktop, tablet or mobile
        #[arg(long, default_value = "desktop")]
        viewport: Viewport,

        /// Wrap the fragment in its viewport frame
        #[arg(long)]
        framed: bool,
    },

    /// Export a template as an email-ready HTML file
    Export {
        /// Template id
        id: String,

        /// JSON file with template data overrides
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Show the template data renders use, after applying overrides
    Data {
        /// JSON file with template data overrides
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },

    /// Manage custom templates
    Custom {
        #[command(subcommand)]
        action: CustomCommand,
    },

    /// Inspect or write the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the active configuration
    Show,

    /// Write the active configuration to the config file
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CustomCommand {
    /// List custom templates
    List,

    /// Add a custom template from HTML and CSS files
    Add {
        /// Display name
        name: String,

        /// HTML file, may contain {{placeholder}} tokens
        #[arg(long, value_name = "FILE")]
        html: PathBuf,

        /// CSS file, may contain {{placeholder}} tokens
        #[arg(long, value_name = "FILE")]
        css: Option<PathBuf>,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "Custom")]
        category: String,
    },

    /// Change fields of a custom template
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        css: Option<PathBuf>,
    },

    /// Delete a custom template
    Delete { id: String },

    /// Copy a custom template under a new name
    Duplicate { id: String, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["mailcraft", "render", "classic", "--viewport", "mobile"])
            .expect("parse");
        match cli.command {
            Command::Render { id, viewport, framed, .. } => {
                assert_eq!(id, "classic");
                assert_eq!(viewport, Viewport::Mobile);
                assert!(!framed);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["mailcraft", "config", "init", "--force"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigCommand::Init { force: true }
            }
        ));
    }

    #[test]
    fn test_bad_viewport_rejected() {
        assert!(Cli::try_parse_from(["mailcraft", "render", "modern", "--viewport", "watch"]).is_err());
    }
}
