//! Command-line interface: argument types and dispatch.

pub mod dispatch;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::ColorMode;

/// Parse a `--color` value.
pub fn parse_color_mode(value: &str) -> Result<ColorMode, String> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(format!(
            "invalid color mode `{}` (expected auto, always, never)",
            other
        )),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cvarbook",
    version,
    about = "Terminal reference browser for game console commands"
)]
pub struct Cli {
    /// Catalog CSV path (default: config data_file, else ./commands.csv)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Favorites file path (default: config favorites_file, else the user data dir)
    #[arg(long, global = true)]
    pub favorites: Option<PathBuf>,

    /// Color output: auto, always, never
    #[arg(long, global = true, default_value = "auto", value_parser = parse_color_mode)]
    pub color: ColorMode,

    /// Emit JSON instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit one JSON object per line
    #[arg(long, global = true)]
    pub jsonl: bool,

    /// Suppress status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List commands, all or one category
    List {
        /// Restrict to one category label
        #[arg(long)]
        category: Option<String>,
        /// Show at most N commands
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Free-text search against names and descriptions
    Search {
        query: String,
        /// Restrict to one category label
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one command in full
    Show { name: String },

    /// List categories with member counts
    Categories,

    /// Copy a command invocation to the clipboard
    Copy { name: String },

    /// Manage the favorites set
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },

    /// Write a config script from favorites, explicit names, or a preset
    Export {
        /// Commands to export by name
        names: Vec<String>,
        /// Export the favorites set
        #[arg(long)]
        fav: bool,
        /// Export a built-in preset by id
        #[arg(long, conflicts_with = "fav")]
        preset: Option<String>,
        /// Output file
        #[arg(long, default_value = crate::export::EXPORT_FILE)]
        out: PathBuf,
    },

    /// List built-in presets
    Presets,

    /// Show one built-in preset
    Preset { id: String },
}

#[derive(Subcommand, Debug)]
pub enum FavAction {
    /// Mark commands as favorites
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove favorites by name or key
    Rm {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List the favorites set
    List,
    /// Clear the favorites set
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_parses_known_values() {
        assert_eq!(parse_color_mode("auto"), Ok(ColorMode::Auto));
        assert_eq!(parse_color_mode("always"), Ok(ColorMode::Always));
        assert_eq!(parse_color_mode("never"), Ok(ColorMode::Never));
        assert!(parse_color_mode("rainbow").is_err());
    }

    #[test]
    fn cli_arguments_are_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
