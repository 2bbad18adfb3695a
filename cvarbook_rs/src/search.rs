//! Free-text catalog filtering and near-miss suggestions.

use crate::types::CvarCommand;

/// Case-insensitive substring filter against name or description.
/// An empty query matches everything.
pub fn filter_commands<'a>(commands: &'a [CvarCommand], query: &str) -> Vec<&'a CvarCommand> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return commands.iter().collect();
    }
    commands
        .iter()
        .filter(|cmd| {
            cmd.name.to_lowercase().contains(&needle)
                || cmd.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Exact-name lookup.
pub fn find_command<'a>(commands: &'a [CvarCommand], name: &str) -> Option<&'a CvarCommand> {
    commands.iter().find(|cmd| cmd.name == name)
}

/// Suggest a similar command name using Levenshtein distance.
/// Returns Some(name) if a close match is found (distance <= 2).
pub fn suggest_similar<'a>(commands: &'a [CvarCommand], input: &str) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for cmd in commands {
        let distance = strsim::levenshtein(&input_lower, &cmd.name.to_lowercase());
        if distance <= 2 {
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((cmd.name.as_str(), distance)),
            }
        }
    }

    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, description: &str) -> CvarCommand {
        CvarCommand {
            name: name.to_string(),
            value: String::new(),
            default_value: String::new(),
            flags: Vec::new(),
            description: description.to_string(),
            example: None,
        }
    }

    fn catalog() -> Vec<CvarCommand> {
        vec![
            command("sv_cheats", "Enables cheats on the server"),
            command("cl_showfps", "Shows FPS counter"),
            command("noclip", "Fly through walls"),
        ]
    }

    #[test]
    fn matches_name_case_insensitively() {
        let catalog = catalog();
        let hits = filter_commands(&catalog, "SV_CH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "sv_cheats");
    }

    #[test]
    fn matches_description_too() {
        let catalog = catalog();
        let hits = filter_commands(&catalog, "walls");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "noclip");
    }

    #[test]
    fn empty_query_returns_everything() {
        let catalog = catalog();
        assert_eq!(filter_commands(&catalog, "").len(), 3);
        assert_eq!(filter_commands(&catalog, "   ").len(), 3);
    }

    #[test]
    fn no_match_returns_empty() {
        let catalog = catalog();
        assert!(filter_commands(&catalog, "zzz_nothing").is_empty());
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let catalog = catalog();
        assert!(find_command(&catalog, "sv_cheats").is_some());
        assert!(find_command(&catalog, "SV_CHEATS").is_none());
    }

    #[test]
    fn suggests_close_names() {
        let catalog = catalog();
        assert_eq!(suggest_similar(&catalog, "sv_cheat"), Some("sv_cheats"));
        assert_eq!(suggest_similar(&catalog, "noclop"), Some("noclip"));
    }

    #[test]
    fn no_suggestion_for_distant_names() {
        let catalog = catalog();
        assert_eq!(suggest_similar(&catalog, "completely_different"), None);
    }
}
