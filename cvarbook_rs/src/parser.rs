//! CSV catalog parser.
//!
//! Turns one delimited document into a deduplicated, ordered list of command
//! records. The format is RFC-4180-style: comma-delimited fields, optional
//! double-quote enclosure, `""` inside a quoted field for a literal quote.
//!
//! The parser never fails: malformed lines (too few fields, empty name,
//! duplicate name) are dropped and parsing continues, so the result is
//! always a possibly empty list in first-seen order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::types::{CvarCommand, MIN_FIELDS};

/// Parse a full CSV document into command records.
///
/// Blank lines are skipped. If the first non-blank line's first field
/// contains `name` (any case) it is treated as a header and skipped.
/// Duplicate names keep the first occurrence and drop the rest with a
/// diagnostic on stderr.
pub fn parse_commands(text: &str) -> Vec<CvarCommand> {
    let mut commands: Vec<CvarCommand> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let mut lines = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .peekable();

    if let Some(first) = lines.peek() {
        let fields = split_line(first);
        if fields
            .first()
            .is_some_and(|f| f.to_ascii_lowercase().contains("name"))
        {
            lines.next();
        }
    }

    for line in lines {
        let fields = split_line(line);
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let name = fields[0].trim();
        if name.is_empty() {
            continue;
        }
        if seen.contains(name) {
            eprintln!(
                "[cvarbook][warn] duplicate command `{}` skipped; first occurrence wins",
                name
            );
            continue;
        }
        seen.insert(name.to_string());

        commands.push(CvarCommand {
            name: name.to_string(),
            value: fields[1].trim().to_string(),
            default_value: fields[2].trim().to_string(),
            flags: split_flags(&fields[3]),
            description: fields[4].trim().to_string(),
            example: fields
                .get(5)
                .map(|f| f.trim().to_string())
                .filter(|e| !e.is_empty()),
        });
    }

    commands
}

/// Read and parse a catalog file. A read failure is reported on stderr and
/// resolves to an empty catalog rather than an error: callers render a
/// "no commands" state.
pub fn load_commands(path: &Path) -> Vec<CvarCommand> {
    match fs::read_to_string(path) {
        Ok(text) => parse_commands(&text),
        Err(err) => {
            eprintln!(
                "[cvarbook][warn] failed to read {}: {}",
                path.display(),
                err
            );
            Vec::new()
        }
    }
}

/// Split one line into fields, respecting double-quote enclosure.
///
/// A quote toggles the in-quotes state unless it is the first half of an
/// escaped `""` pair inside quotes, which emits a single literal quote.
/// Commas inside quotes do not split.
fn split_line(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

/// Whitespace-split a raw flags field. Blank tokens and bare `-`
/// placeholders are dropped.
fn split_flags(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .filter(|token| *token != "-")
        .map(str::to_string)
        .collect()
}
