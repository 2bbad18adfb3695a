//! Command categorization.
//!
//! Partitions a catalog into named buckets by matching the lowercased
//! command name against an ordered rule table. The first matching rule
//! claims the record; anything unclaimed lands in `Other`. Empty buckets
//! are omitted from the result.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::types::{CategoryBucket, CvarCommand};

/// Fallback bucket for names no rule claims.
pub const OTHER_LABEL: &str = "Other";

/// One categorization rule: the label wins when any needle occurs in the
/// lowercased command name. Rules are evaluated in table order.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    #[serde(default)]
    pub needles: Vec<String>,
}

impl CategoryRule {
    pub fn new(label: &str, needles: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            needles: needles.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// `lower_name` must already be lowercased.
    fn matches(&self, lower_name: &str) -> bool {
        self.needles.iter().any(|n| lower_name.contains(n.as_str()))
    }
}

static BUILTIN_RULES: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    vec![
        CategoryRule::new("Crosshair", &["crosshair"]),
        CategoryRule::new("Server", &["sv_", "mp_"]),
        CategoryRule::new("Client", &["cl_"]),
        CategoryRule::new("Bot", &["bot"]),
        CategoryRule::new("Audio", &["snd", "voice", "audio"]),
        CategoryRule::new("Video", &["r_", "mat_", "fps"]),
        CategoryRule::new("Network", &["net_", "rate"]),
        CategoryRule::new("Debug", &["nav_", "ent_", "debug"]),
    ]
});

/// The built-in rule table, in priority order. `Other` is implicit and
/// always last.
pub fn builtin_rules() -> &'static [CategoryRule] {
    &BUILTIN_RULES
}

/// Category label for a single command name under the given rule table.
pub fn category_for<'a>(name: &str, rules: &'a [CategoryRule]) -> &'a str {
    let lower = name.to_ascii_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.label.as_str())
        .unwrap_or(OTHER_LABEL)
}

/// Group a catalog into buckets under the given rule table.
///
/// Pure: the same catalog always yields the same buckets. Each record lands
/// in exactly one bucket; buckets come out in rule order with `Other` last,
/// and empty buckets are dropped.
pub fn categorize(commands: &[CvarCommand], rules: &[CategoryRule]) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = rules
        .iter()
        .map(|rule| CategoryBucket {
            label: rule.label.clone(),
            commands: Vec::new(),
        })
        .collect();
    buckets.push(CategoryBucket {
        label: OTHER_LABEL.to_string(),
        commands: Vec::new(),
    });

    for command in commands {
        let lower = command.name.to_ascii_lowercase();
        let slot = rules
            .iter()
            .position(|rule| rule.matches(&lower))
            .unwrap_or(rules.len());
        buckets[slot].commands.push(command.clone());
    }

    buckets.retain(|bucket| !bucket.commands.is_empty());
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str) -> CvarCommand {
        CvarCommand {
            name: name.to_string(),
            value: String::new(),
            default_value: String::new(),
            flags: Vec::new(),
            description: String::new(),
            example: None,
        }
    }

    #[test]
    fn priority_order_assigns_sv_cheats_to_server() {
        assert_eq!(category_for("sv_cheats", builtin_rules()), "Server");
        assert_eq!(category_for("SV_CHEATS", builtin_rules()), "Server");
    }

    #[test]
    fn crosshair_rule_outranks_client_prefix() {
        // cl_crosshairsize matches both Crosshair and Client; first rule wins.
        assert_eq!(category_for("cl_crosshairsize", builtin_rules()), "Crosshair");
    }

    #[test]
    fn unmatched_names_fall_back_to_other() {
        assert_eq!(category_for("noclip", builtin_rules()), "Other");
        assert_eq!(category_for("god", builtin_rules()), "Other");
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket() {
        let catalog: Vec<CvarCommand> = [
            "cl_crosshairsize",
            "sv_cheats",
            "cl_showfps",
            "bot_kick",
            "snd_volume",
            "mat_monitorgamma",
            "net_graph",
            "nav_edit",
            "noclip",
        ]
        .iter()
        .map(|n| command(n))
        .collect();

        let buckets = categorize(&catalog, builtin_rules());
        let total: usize = buckets.iter().map(|b| b.commands.len()).sum();
        assert_eq!(total, catalog.len());

        for cmd in &catalog {
            let holding: Vec<&str> = buckets
                .iter()
                .filter(|b| b.commands.iter().any(|c| c.name == cmd.name))
                .map(|b| b.label.as_str())
                .collect();
            assert_eq!(holding.len(), 1, "{} in {:?}", cmd.name, holding);
        }
    }

    #[test]
    fn empty_buckets_are_omitted() {
        let catalog = vec![command("sv_cheats"), command("cl_showfps")];
        let buckets = categorize(&catalog, builtin_rules());
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Server", "Client"]);
        assert!(!labels.contains(&"Bot"));
        assert!(!labels.contains(&"Other"));
    }

    #[test]
    fn buckets_preserve_catalog_order() {
        let catalog = vec![
            command("sv_gravity"),
            command("cl_showfps"),
            command("sv_cheats"),
            command("mp_roundtime"),
        ];
        let buckets = categorize(&catalog, builtin_rules());
        let server = buckets.iter().find(|b| b.label == "Server").unwrap();
        let names: Vec<&str> = server.commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["sv_gravity", "sv_cheats", "mp_roundtime"]);
    }

    #[test]
    fn fps_names_without_prefixes_go_to_video() {
        assert_eq!(category_for("fps_max", builtin_rules()), "Video");
    }

    #[test]
    fn rate_names_go_to_network() {
        assert_eq!(category_for("rate", builtin_rules()), "Network");
    }

    #[test]
    fn custom_rules_take_priority_when_prepended() {
        let mut rules = vec![CategoryRule::new("Movement", &["gravity"])];
        rules.extend(builtin_rules().iter().cloned());
        assert_eq!(category_for("sv_gravity", &rules), "Movement");
        assert_eq!(category_for("sv_cheats", &rules), "Server");
    }

    #[test]
    fn end_to_end_two_record_catalog() {
        let catalog = vec![command("sv_cheats"), command("cl_showfps")];
        let buckets = categorize(&catalog, builtin_rules());
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "Server");
        assert_eq!(buckets[0].commands[0].name, "sv_cheats");
        assert_eq!(buckets[1].label, "Client");
        assert_eq!(buckets[1].commands[0].name, "cl_showfps");
    }
}
