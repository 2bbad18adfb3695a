//! Built-in command presets.
//!
//! Curated selections that can be exported as a config script without the
//! user hand-picking commands first.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::export::ExportLine;

/// One preset command; value and description are optional.
#[derive(Clone, Debug, Serialize)]
pub struct PresetCommand {
    pub command: &'static str,
    pub value: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl PresetCommand {
    const fn new(
        command: &'static str,
        value: Option<&'static str>,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            command,
            value,
            description,
        }
    }

    pub fn export_line(&self) -> ExportLine {
        ExportLine {
            name: self.command.to_string(),
            value: self.value.map(str::to_string),
            description: self.description.map(str::to_string),
        }
    }
}

/// A curated, exportable command selection.
#[derive(Clone, Debug, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub commands: Vec<PresetCommand>,
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            id: "fps-boost",
            name: "FPS Boost",
            description: "Optimize game settings for maximum FPS",
            category: "performance",
            commands: vec![
                PresetCommand::new("fps_max", Some("0"), Some("Uncap FPS limit")),
                PresetCommand::new(
                    "r_dynamic",
                    Some("0"),
                    Some("Disable dynamic lighting"),
                ),
                PresetCommand::new(
                    "mat_queue_mode",
                    Some("2"),
                    Some("Multi-threaded material rendering"),
                ),
            ],
        },
        Preset {
            id: "practice-config",
            name: "Practice Config",
            description: "Setup for practicing grenades and movement",
            category: "practice",
            commands: vec![
                PresetCommand::new("sv_cheats", Some("1"), Some("Enable cheats")),
                PresetCommand::new(
                    "sv_infinite_ammo",
                    Some("1"),
                    Some("Never run out of ammo"),
                ),
                PresetCommand::new(
                    "mp_roundtime",
                    Some("60"),
                    Some("One hour rounds"),
                ),
                PresetCommand::new("bot_kick", None, Some("Remove all bots")),
            ],
        },
        Preset {
            id: "screenshot-config",
            name: "Screenshot Config",
            description: "Best visual settings for screenshots",
            category: "images",
            commands: vec![
                PresetCommand::new("fps_max", Some("300"), Some("Cap FPS for consistency")),
                PresetCommand::new("cl_drawhud", Some("0"), Some("Hide the HUD")),
            ],
        },
    ]
});

/// All built-in presets, in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Exact preset lookup by id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    presets().iter().find(|preset| preset.id == id)
}

/// Suggest a similar preset id (Levenshtein distance <= 2).
pub fn suggest_preset(id: &str) -> Option<&'static str> {
    let input = id.to_lowercase();
    presets()
        .iter()
        .map(|preset| (preset.id, strsim::levenshtein(&input, preset.id)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(id, _)| id)
}
