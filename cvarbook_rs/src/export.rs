//! Config-script export.
//!
//! Renders a selection of commands as a console configuration script:
//! each command as `<name> <value>;` preceded by its description comment,
//! wrapped in fixed header/footer echo statements. The output is meant to
//! be saved as `autoexec.cfg` and executed by the game console.

use std::fs;
use std::io;
use std::path::Path;

use crate::favorites::FavoriteEntry;
use crate::types::CvarCommand;

/// Default export file name.
pub const EXPORT_FILE: &str = "autoexec.cfg";

const BANNER: &str = "// ====================================";

/// One line of the exported script.
#[derive(Clone, Debug)]
pub struct ExportLine {
    pub name: String,
    pub value: Option<String>,
    pub description: Option<String>,
}

impl ExportLine {
    pub fn from_command(command: &CvarCommand) -> Self {
        Self {
            name: command.name.clone(),
            value: (!command.value.is_empty()).then(|| command.value.clone()),
            description: (!command.description.is_empty()).then(|| command.description.clone()),
        }
    }

    pub fn from_favorite(favorite: &FavoriteEntry) -> Self {
        Self {
            name: favorite.name.clone(),
            value: favorite.value.clone().filter(|v| !v.is_empty()),
            description: (!favorite.description.is_empty())
                .then(|| favorite.description.clone()),
        }
    }

    fn invocation(&self) -> String {
        match self.value.as_deref() {
            Some(value) => format!("{} {}", self.name, value),
            None => self.name.clone(),
        }
    }
}

/// Render the full config script for a selection.
pub fn render_config(title: &str, description: &str, lines: &[ExportLine]) -> String {
    let mut out: Vec<String> = vec![
        BANNER.to_string(),
        format!("// cvarbook config - {}", title),
        format!("// Generated: {}", chrono::Local::now().format("%Y-%m-%d")),
        format!("// Description: {}", description),
        BANNER.to_string(),
        String::new(),
        "echo \"Loading custom config...\";".to_string(),
        String::new(),
        format!("// {} Settings", title),
        "// ------------------------------------".to_string(),
        String::new(),
    ];

    for line in lines {
        if let Some(desc) = &line.description {
            out.push(format!("// {}", desc));
        }
        out.push(format!("{};", line.invocation()));
        out.push(String::new());
    }

    out.push(BANNER.to_string());
    out.push("// End of Config".to_string());
    out.push(BANNER.to_string());
    out.push("echo \"Config loaded successfully!\";".to_string());
    out.push(String::new());
    out.push("// Instructions:".to_string());
    out.push(format!("// 1. Save this file as {}", EXPORT_FILE));
    out.push("// 2. Place it in your game's cfg directory".to_string());
    out.push(
        "// 3. Run \"exec autoexec\" in the console or add \"+exec autoexec\" to launch options"
            .to_string(),
    );

    let mut script = out.join("\n");
    script.push('\n');
    script
}

/// Write the rendered script to disk.
pub fn write_config(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, value: Option<&str>, description: Option<&str>) -> ExportLine {
        ExportLine {
            name: name.to_string(),
            value: value.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn script_is_wrapped_in_header_and_footer_echoes() {
        let script = render_config("Practice", "Practice setup", &[]);
        assert!(script.contains("echo \"Loading custom config...\";"));
        assert!(script.contains("echo \"Config loaded successfully!\";"));
        assert!(script.contains("// cvarbook config - Practice"));
        assert!(script.contains("// Description: Practice setup"));
        assert!(script.contains("// End of Config"));
        assert!(script.ends_with('\n'));
    }

    #[test]
    fn commands_are_emitted_with_trailing_semicolons() {
        let script = render_config(
            "Practice",
            "",
            &[
                line("sv_cheats", Some("1"), Some("Enables cheats")),
                line("noclip", None, None),
            ],
        );
        assert!(script.contains("// Enables cheats\nsv_cheats 1;"));
        assert!(script.contains("\nnoclip;\n"));
    }

    #[test]
    fn from_command_drops_empty_value_and_description() {
        let command = CvarCommand {
            name: "noclip".to_string(),
            value: String::new(),
            default_value: String::new(),
            flags: Vec::new(),
            description: String::new(),
            example: None,
        };
        let export = ExportLine::from_command(&command);
        assert_eq!(export.invocation(), "noclip");
        assert!(export.description.is_none());
    }

    #[test]
    fn from_favorite_carries_value_into_invocation() {
        let favorite = FavoriteEntry {
            name: "sv_gravity".to_string(),
            value: Some("200".to_string()),
            description: "Low gravity".to_string(),
            category: Some("Server".to_string()),
        };
        let export = ExportLine::from_favorite(&favorite);
        assert_eq!(export.invocation(), "sv_gravity 200");
        assert_eq!(export.description.as_deref(), Some("Low gravity"));
    }

    #[test]
    fn write_config_creates_parent_directories() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let path = temp.path().join("cfg/autoexec.cfg");
        write_config(&path, "echo test;\n").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "echo test;\n");
    }
}
