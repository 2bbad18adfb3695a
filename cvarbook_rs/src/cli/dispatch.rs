//! Subcommand handlers.
//!
//! `run` resolves configuration and paths once, then hands off to one
//! handler per subcommand. Handlers return the process exit code; a missing
//! or unreadable catalog is a "no commands" state, never a hard failure.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::categorize::{self, CategoryRule};
use crate::clipboard;
use crate::colors::Painter;
use crate::config::CvarbookConfig;
use crate::export::{self, ExportLine};
use crate::favorites::{FavoriteEntry, FavoritesStore};
use crate::output;
use crate::parser;
use crate::presets;
use crate::search;
use crate::status;
use crate::types::{CvarCommand, OutputMode};

use super::{Cli, Command, FavAction};

/// Catalog file used when neither `--data` nor the config file names one.
pub const DEFAULT_DATA_FILE: &str = "commands.csv";

/// Everything a handler needs, resolved once per invocation.
struct AppContext {
    data_path: PathBuf,
    rules: Vec<CategoryRule>,
    store: FavoritesStore,
    painter: Painter,
    mode: OutputMode,
    quiet: bool,
}

impl AppContext {
    /// Load the catalog. An empty result gets a "no commands" notice in
    /// human mode so the user can tell an empty catalog from a filter miss.
    fn load_catalog(&self) -> Vec<CvarCommand> {
        let commands = parser::load_commands(&self.data_path);
        if commands.is_empty() && self.mode == OutputMode::Human && !self.quiet {
            status::warning(&format!(
                "no commands loaded from {}",
                self.data_path.display()
            ));
        }
        commands
    }

    fn category_of(&self, command: &CvarCommand) -> String {
        categorize::category_for(&command.name, &self.rules).to_string()
    }
}

pub fn run(cli: Cli) -> Result<i32> {
    let config = CvarbookConfig::load(Path::new("."));

    let data_path = cli
        .data
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let favorites_path = cli
        .favorites
        .clone()
        .or_else(|| config.favorites_file.clone())
        .unwrap_or_else(FavoritesStore::default_path);
    let mode = if cli.jsonl {
        OutputMode::Jsonl
    } else if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ctx = AppContext {
        data_path,
        rules: config.category_rules(),
        store: FavoritesStore::new(favorites_path),
        painter: Painter::new(cli.color),
        mode,
        quiet: cli.quiet,
    };

    match cli.command {
        Command::List { category, limit } => handle_list(&ctx, category.as_deref(), limit),
        Command::Search { query, category } => handle_search(&ctx, &query, category.as_deref()),
        Command::Show { name } => handle_show(&ctx, &name),
        Command::Categories => handle_categories(&ctx),
        Command::Copy { name } => handle_copy(&ctx, &name),
        Command::Fav { action } => handle_fav(&ctx, action),
        Command::Export {
            names,
            fav,
            preset,
            out,
        } => handle_export(&ctx, &names, fav, preset.as_deref(), &out),
        Command::Presets => handle_presets(&ctx),
        Command::Preset { id } => handle_preset(&ctx, &id),
    }
}

/// Pick one bucket by label (case-insensitive). A miss lists what exists.
fn category_members(
    ctx: &AppContext,
    commands: &[CvarCommand],
    label: &str,
) -> Option<Vec<CvarCommand>> {
    let buckets = categorize::categorize(commands, &ctx.rules);
    match buckets
        .iter()
        .find(|bucket| bucket.label.eq_ignore_ascii_case(label))
    {
        Some(bucket) => Some(bucket.commands.clone()),
        None => {
            let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
            status::error(&format!(
                "no category `{}` (have: {})",
                label,
                labels.join(", ")
            ));
            None
        }
    }
}

fn handle_list(ctx: &AppContext, category: Option<&str>, limit: Option<usize>) -> Result<i32> {
    let commands = ctx.load_catalog();

    let selected: Vec<CvarCommand> = match category {
        Some(label) => match category_members(ctx, &commands, label) {
            Some(members) => members,
            None => return Ok(1),
        },
        None => commands,
    };

    let limited: Vec<&CvarCommand> = selected.iter().take(limit.unwrap_or(usize::MAX)).collect();
    output::print_commands(&limited, ctx.mode, &ctx.painter);

    if ctx.mode == OutputMode::Human && !ctx.quiet && limited.len() < selected.len() {
        status::info(&format!(
            "showing {} of {}",
            limited.len(),
            status::format_count(selected.len(), "command", "commands")
        ));
    }
    Ok(0)
}

fn handle_search(ctx: &AppContext, query: &str, category: Option<&str>) -> Result<i32> {
    let commands = ctx.load_catalog();

    let scope: Vec<CvarCommand> = match category {
        Some(label) => match category_members(ctx, &commands, label) {
            Some(members) => members,
            None => return Ok(1),
        },
        None => commands,
    };

    let hits = search::filter_commands(&scope, query);
    output::print_commands(&hits, ctx.mode, &ctx.painter);

    if ctx.mode == OutputMode::Human && !ctx.quiet {
        status::info(&format!(
            "{} for `{}`",
            status::format_count(hits.len(), "match", "matches"),
            query
        ));
    }
    Ok(0)
}

fn report_miss(ctx: &AppContext, commands: &[CvarCommand], name: &str) {
    let suggestion = search::suggest_similar(commands, name)
        .map(|similar| format!(". Did you mean `{}`?", similar))
        .unwrap_or_default();
    status::error(&format!("no command `{}`{}", name, suggestion));
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<i32> {
    let commands = ctx.load_catalog();

    match search::find_command(&commands, name) {
        Some(command) => {
            let category = ctx.category_of(command);
            output::print_command_detail(command, &category, ctx.mode, &ctx.painter);
            Ok(0)
        }
        None => {
            report_miss(ctx, &commands, name);
            Ok(1)
        }
    }
}

fn handle_categories(ctx: &AppContext) -> Result<i32> {
    let commands = ctx.load_catalog();
    let buckets = categorize::categorize(&commands, &ctx.rules);
    output::print_buckets(&buckets, ctx.mode, &ctx.painter);
    Ok(0)
}

fn handle_copy(ctx: &AppContext, name: &str) -> Result<i32> {
    let commands = ctx.load_catalog();

    let Some(command) = search::find_command(&commands, name) else {
        report_miss(ctx, &commands, name);
        return Ok(1);
    };

    let invocation = command.invocation();
    if clipboard::copy_text(&invocation) && !ctx.quiet {
        status::success(&format!("copied `{}`", invocation));
    }
    Ok(0)
}

fn handle_fav(ctx: &AppContext, action: FavAction) -> Result<i32> {
    let mut favorites = ctx.store.load()?;

    match action {
        FavAction::Add { names } => {
            let commands = ctx.load_catalog();
            let mut missed = 0;
            for name in &names {
                let Some(command) = search::find_command(&commands, name) else {
                    report_miss(ctx, &commands, name);
                    missed += 1;
                    continue;
                };
                let entry = FavoriteEntry::from_command(command, &ctx.category_of(command));
                let key = entry.key();
                if favorites.contains(&key) {
                    if !ctx.quiet {
                        status::info(&format!("`{}` is already a favorite", key));
                    }
                } else {
                    favorites.toggle(entry);
                    if !ctx.quiet {
                        status::success(&format!("added `{}`", key));
                    }
                }
            }
            ctx.store.save(&mut favorites)?;
            Ok(if missed == names.len() && !names.is_empty() {
                1
            } else {
                0
            })
        }
        FavAction::Rm { names } => {
            let mut missed = 0;
            for name in &names {
                if favorites.remove(name) {
                    if !ctx.quiet {
                        status::success(&format!("removed `{}`", name));
                    }
                } else {
                    status::error(&format!("`{}` is not a favorite", name));
                    missed += 1;
                }
            }
            ctx.store.save(&mut favorites)?;
            Ok(if missed == names.len() && !names.is_empty() {
                1
            } else {
                0
            })
        }
        FavAction::List => {
            match ctx.mode {
                OutputMode::Human => {
                    for entry in &favorites.entries {
                        let mut line = ctx.painter.name(&entry.name);
                        if let Some(value) = entry.value.as_deref() {
                            line.push(' ');
                            line.push_str(&ctx.painter.value(value));
                        }
                        if let Some(category) = entry.category.as_deref() {
                            line.push_str(&format!(" ({})", category));
                        }
                        if !entry.description.is_empty() {
                            line.push_str("  ");
                            line.push_str(&ctx.painter.dim(&entry.description));
                        }
                        println!("{}", line);
                    }
                    if !ctx.quiet {
                        status::info(&status::format_count(
                            favorites.len(),
                            "favorite",
                            "favorites",
                        ));
                    }
                }
                OutputMode::Json => {
                    println!("{}", serde_json::to_string_pretty(&favorites.entries)?);
                }
                OutputMode::Jsonl => {
                    for entry in &favorites.entries {
                        println!("{}", serde_json::to_string(entry)?);
                    }
                }
            }
            Ok(0)
        }
        FavAction::Clear => {
            let count = favorites.len();
            favorites.clear();
            ctx.store.save(&mut favorites)?;
            if !ctx.quiet {
                status::success(&format!(
                    "cleared {}",
                    status::format_count(count, "favorite", "favorites")
                ));
            }
            Ok(0)
        }
    }
}

fn handle_export(
    ctx: &AppContext,
    names: &[String],
    fav: bool,
    preset: Option<&str>,
    out: &Path,
) -> Result<i32> {
    let (title, description, lines): (String, String, Vec<ExportLine>) = if let Some(id) = preset {
        let Some(preset) = presets::find_preset(id) else {
            let suggestion = presets::suggest_preset(id)
                .map(|similar| format!(". Did you mean `{}`?", similar))
                .unwrap_or_default();
            status::error(&format!("no preset `{}`{}", id, suggestion));
            return Ok(1);
        };
        (
            preset.name.to_string(),
            preset.description.to_string(),
            preset.commands.iter().map(|c| c.export_line()).collect(),
        )
    } else if fav {
        let favorites = ctx.store.load()?;
        if favorites.is_empty() {
            status::error("no favorites to export");
            return Ok(1);
        }
        (
            "Favorites".to_string(),
            "Favorite commands selection".to_string(),
            favorites
                .entries
                .iter()
                .map(ExportLine::from_favorite)
                .collect(),
        )
    } else {
        if names.is_empty() {
            status::error("nothing selected; pass command names, --fav, or --preset <id>");
            return Ok(1);
        }
        let commands = ctx.load_catalog();
        let mut lines = Vec::new();
        for name in names {
            match search::find_command(&commands, name) {
                Some(command) => lines.push(ExportLine::from_command(command)),
                None => report_miss(ctx, &commands, name),
            }
        }
        if lines.is_empty() {
            return Ok(1);
        }
        (
            "Custom".to_string(),
            "Hand-picked commands".to_string(),
            lines,
        )
    };

    let script = export::render_config(&title, &description, &lines);
    match export::write_config(out, &script) {
        Ok(()) => {
            if !ctx.quiet {
                status::success(&format!(
                    "exported {} to {}",
                    status::format_count(lines.len(), "command", "commands"),
                    out.display()
                ));
            }
        }
        Err(err) => {
            eprintln!("[cvarbook][warn] failed to write {}: {}", out.display(), err);
        }
    }
    Ok(0)
}

fn handle_presets(ctx: &AppContext) -> Result<i32> {
    match ctx.mode {
        OutputMode::Human => {
            for preset in presets::presets() {
                println!(
                    "{} ({})  {}",
                    ctx.painter.header(preset.id),
                    status::format_count(preset.commands.len(), "command", "commands"),
                    ctx.painter.dim(preset.description)
                );
            }
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(presets::presets())?);
        }
        OutputMode::Jsonl => {
            for preset in presets::presets() {
                println!("{}", serde_json::to_string(preset)?);
            }
        }
    }
    Ok(0)
}

fn handle_preset(ctx: &AppContext, id: &str) -> Result<i32> {
    let Some(preset) = presets::find_preset(id) else {
        let suggestion = presets::suggest_preset(id)
            .map(|similar| format!(". Did you mean `{}`?", similar))
            .unwrap_or_default();
        status::error(&format!("no preset `{}`{}", id, suggestion));
        return Ok(1);
    };

    if ctx.mode != OutputMode::Human {
        println!("{}", serde_json::to_string_pretty(preset)?);
        return Ok(0);
    }

    println!("{}", ctx.painter.header(preset.name));
    println!("  {}", preset.description);
    println!();
    for command in &preset.commands {
        let mut line = format!("  {}", ctx.painter.name(command.command));
        if let Some(value) = command.value {
            line.push(' ');
            line.push_str(&ctx.painter.value(value));
        }
        if let Some(description) = command.description {
            line.push_str("  ");
            line.push_str(&ctx.painter.dim(description));
        }
        println!("{}", line);
    }
    Ok(0)
}
