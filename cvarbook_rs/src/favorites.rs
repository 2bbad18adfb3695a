//! Favorites persistence.
//!
//! A small explicit store: `load()` reads the whole favorites file once,
//! mutations happen in memory on [`FavoritesFile`], and `save()` rewrites
//! the file in full. Nothing here touches ambient global state; callers
//! construct the store with a path and inject it where needed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::CvarCommand;

/// Current schema version for the favorites file format.
pub const FAVORITES_SCHEMA_VERSION: &str = "1";

/// Default favorites file name under the data directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// A user-marked command, persisted as a projection of the full record.
/// The key is `name`, or `name value` when a value was captured.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FavoriteEntry {
    pub fn from_command(command: &CvarCommand, category: &str) -> Self {
        Self {
            name: command.name.clone(),
            value: (!command.value.is_empty()).then(|| command.value.clone()),
            description: command.description.clone(),
            category: Some(category.to_string()),
        }
    }

    pub fn key(&self) -> String {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => format!("{} {}", self.name, value),
            _ => self.name.clone(),
        }
    }
}

/// The persisted favorites set, in insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FavoritesFile {
    #[serde(default)]
    pub schema_version: String,
    /// Timestamp of the last save (RFC 3339).
    #[serde(default)]
    pub saved_at: String,
    #[serde(default)]
    pub entries: Vec<FavoriteEntry>,
}

impl FavoritesFile {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key() == key)
    }

    /// Insert the entry, or remove it if its key is already present.
    /// Returns true when the entry was added.
    pub fn toggle(&mut self, entry: FavoriteEntry) -> bool {
        let key = entry.key();
        if self.contains(&key) {
            self.entries.retain(|existing| existing.key() != key);
            false
        } else {
            self.entries.push(entry);
            true
        }
    }

    /// Remove by key or by bare name. Returns true when something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.key() != key && entry.name != key);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// File-backed favorites store.
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `<data dir>/cvarbook/favorites.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cvarbook")
            .join(FAVORITES_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the favorites file. A missing file is an empty set, not an
    /// error. A schema version mismatch warns but still loads.
    pub fn load(&self) -> io::Result<FavoritesFile> {
        if !self.path.exists() {
            return Ok(FavoritesFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let favorites: FavoritesFile = serde_json::from_str(&content)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        if favorites.schema_version != FAVORITES_SCHEMA_VERSION {
            eprintln!(
                "[cvarbook][warn] favorites schema version mismatch: found {:?}, expected {:?}",
                favorites.schema_version, FAVORITES_SCHEMA_VERSION
            );
        }

        Ok(favorites)
    }

    /// Rewrite the favorites file in full, stamping schema version and
    /// save time.
    pub fn save(&self, favorites: &mut FavoritesFile) -> io::Result<()> {
        favorites.schema_version = FAVORITES_SCHEMA_VERSION.to_string();
        favorites.saved_at = chrono::Local::now().to_rfc3339();

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(favorites)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(name: &str, value: Option<&str>) -> FavoriteEntry {
        FavoriteEntry {
            name: name.to_string(),
            value: value.map(str::to_string),
            description: String::new(),
            category: None,
        }
    }

    #[test]
    fn key_includes_value_when_present() {
        assert_eq!(entry("sv_cheats", Some("1")).key(), "sv_cheats 1");
        assert_eq!(entry("noclip", None).key(), "noclip");
        assert_eq!(entry("noclip", Some("")).key(), "noclip");
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut favorites = FavoritesFile::default();
        assert!(favorites.toggle(entry("sv_cheats", Some("1"))));
        assert_eq!(favorites.len(), 1);
        assert!(!favorites.toggle(entry("sv_cheats", Some("1"))));
        assert!(favorites.is_empty());
    }

    #[test]
    fn same_name_different_value_is_a_distinct_key() {
        let mut favorites = FavoritesFile::default();
        favorites.toggle(entry("sv_gravity", Some("800")));
        favorites.toggle(entry("sv_gravity", Some("200")));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn remove_accepts_bare_name() {
        let mut favorites = FavoritesFile::default();
        favorites.toggle(entry("sv_gravity", Some("800")));
        assert!(favorites.remove("sv_gravity"));
        assert!(favorites.is_empty());
        assert!(!favorites.remove("sv_gravity"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().expect("temp dir");
        let store = FavoritesStore::new(temp.path().join("favorites.json"));
        let favorites = store.load().expect("load");
        assert!(favorites.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_entries_in_order() {
        let temp = TempDir::new().expect("temp dir");
        let store = FavoritesStore::new(temp.path().join("nested/favorites.json"));

        let mut favorites = FavoritesFile::default();
        favorites.toggle(FavoriteEntry {
            name: "sv_cheats".to_string(),
            value: Some("1".to_string()),
            description: "Enables cheats".to_string(),
            category: Some("Server".to_string()),
        });
        favorites.toggle(entry("noclip", None));
        store.save(&mut favorites).expect("save");

        let loaded = store.load().expect("load");
        assert_eq!(loaded.schema_version, FAVORITES_SCHEMA_VERSION);
        assert_eq!(loaded.entries, favorites.entries);
        assert_eq!(loaded.entries[0].name, "sv_cheats");
        assert_eq!(loaded.entries[1].name, "noclip");
    }

    #[test]
    fn from_command_captures_projection() {
        let command = CvarCommand {
            name: "sv_cheats".to_string(),
            value: "1".to_string(),
            default_value: "0".to_string(),
            flags: vec!["sv".to_string()],
            description: "Enables cheats".to_string(),
            example: None,
        };
        let favorite = FavoriteEntry::from_command(&command, "Server");
        assert_eq!(favorite.key(), "sv_cheats 1");
        assert_eq!(favorite.category.as_deref(), Some("Server"));
        assert_eq!(favorite.description, "Enables cheats");
    }
}
