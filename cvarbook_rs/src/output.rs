//! Output rendering for catalog views.
//!
//! Human mode goes through the [`Painter`]; `--json` emits one document,
//! `--jsonl` one object per line for piping into other tools.

use serde::Serialize;

use crate::colors::Painter;
use crate::types::{CategoryBucket, CvarCommand, OutputMode};

const DESCRIPTION_WIDTH: usize = 60;

/// A full record plus its computed category, for detail output.
#[derive(Serialize)]
pub struct CommandDetail<'a> {
    #[serde(flatten)]
    pub command: &'a CvarCommand,
    pub category: &'a str,
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// One human-readable catalog line.
fn command_line(command: &CvarCommand, painter: &Painter) -> String {
    let mut line = painter.name(&command.name);
    if !command.value.is_empty() {
        line.push(' ');
        line.push_str(&painter.value(&command.value));
    }
    if !command.default_value.is_empty() {
        line.push_str(&painter.dim(&format!(" (default {})", command.default_value)));
    }
    if !command.flags.is_empty() {
        line.push_str(&format!(" [{}]", painter.flag(&command.flags.join(" "))));
    }
    if !command.description.is_empty() {
        line.push_str("  ");
        line.push_str(&painter.dim(&truncate(&command.description, DESCRIPTION_WIDTH)));
    }
    line
}

/// Print a flat command list in the requested mode.
pub fn print_commands(commands: &[&CvarCommand], mode: OutputMode, painter: &Painter) {
    match mode {
        OutputMode::Human => {
            for command in commands {
                println!("{}", command_line(command, painter));
            }
        }
        OutputMode::Json => match serde_json::to_string_pretty(&commands) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("[cvarbook][warn] json render failed: {}", err),
        },
        OutputMode::Jsonl => {
            for command in commands {
                match serde_json::to_string(command) {
                    Ok(json) => println!("{}", json),
                    Err(err) => eprintln!("[cvarbook][warn] json render failed: {}", err),
                }
            }
        }
    }
}

/// Print one record in full.
pub fn print_command_detail(
    command: &CvarCommand,
    category: &str,
    mode: OutputMode,
    painter: &Painter,
) {
    if mode != OutputMode::Human {
        let detail = CommandDetail { command, category };
        match serde_json::to_string_pretty(&detail) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("[cvarbook][warn] json render failed: {}", err),
        }
        return;
    }

    println!("{}", painter.header(&command.name));
    if !command.value.is_empty() {
        println!("  value:       {}", painter.value(&command.value));
    }
    if !command.default_value.is_empty() {
        println!("  default:     {}", command.default_value);
    }
    if !command.flags.is_empty() {
        println!("  flags:       {}", painter.flag(&command.flags.join(" ")));
    }
    println!("  category:    {}", category);
    if !command.description.is_empty() {
        println!("  description: {}", command.description);
    }
    if let Some(example) = &command.example {
        println!("  example:     {}", painter.dim(example));
    }
}

/// Print category buckets with member counts.
pub fn print_buckets(buckets: &[CategoryBucket], mode: OutputMode, painter: &Painter) {
    match mode {
        OutputMode::Human => {
            for bucket in buckets {
                println!(
                    "{} ({})",
                    painter.header(&bucket.label),
                    painter.number(bucket.commands.len())
                );
            }
        }
        OutputMode::Json => {
            let counts: Vec<serde_json::Value> = buckets
                .iter()
                .map(|b| {
                    serde_json::json!({ "label": b.label, "count": b.commands.len() })
                })
                .collect();
            match serde_json::to_string_pretty(&counts) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("[cvarbook][warn] json render failed: {}", err),
            }
        }
        OutputMode::Jsonl => {
            for bucket in buckets {
                println!(
                    "{}",
                    serde_json::json!({ "label": bucket.label, "count": bucket.commands.len() })
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorMode;

    fn command() -> CvarCommand {
        CvarCommand {
            name: "sv_cheats".to_string(),
            value: "1".to_string(),
            default_value: "0".to_string(),
            flags: vec!["sv".to_string(), "cheat".to_string()],
            description: "Enables cheats".to_string(),
            example: None,
        }
    }

    #[test]
    fn plain_command_line_contains_all_parts() {
        let painter = Painter::new(ColorMode::Never);
        let line = command_line(&command(), &painter);
        assert_eq!(line, "sv_cheats 1 (default 0) [sv cheat]  Enables cheats");
    }

    #[test]
    fn truncate_appends_ellipsis_past_width() {
        assert_eq!(truncate("short", 10), "short");
        let long = "x".repeat(80);
        let cut = truncate(&long, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn detail_serializes_with_category() {
        let cmd = command();
        let detail = CommandDetail {
            command: &cmd,
            category: "Server",
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "sv_cheats");
        assert_eq!(json["category"], "Server");
    }
}
