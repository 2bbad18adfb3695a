//! # cvarbook
//!
//! Terminal reference browser for game console commands. Parse once, query
//! everything.
//!
//! cvarbook loads a CSV catalog of console commands, parses it into
//! structured records, and exposes a searchable, filterable, categorized
//! view with copy-to-clipboard and config-script export conveniences.
//!
//! ## Features
//!
//! - **CSV catalog parser** - quoted fields, duplicate handling, never fails
//! - **Categorizer** - ordered substring rules, first match wins
//! - **Search** - case-insensitive filter plus "did you mean" suggestions
//! - **Favorites** - locally persisted set, explicit load/save store
//! - **Config export** - turn a selection into an `autoexec.cfg` script
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use cvarbook::{categorize, parser};
//!
//! let catalog = parser::parse_commands(
//!     "name,value,default,flags,description\n\
//!      sv_cheats,0,0,sv cheat,Enables cheats\n",
//! );
//! let buckets = categorize::categorize(&catalog, categorize::builtin_rules());
//! assert_eq!(buckets[0].label, "Server");
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! cvarbook list                    # Full catalog
//! cvarbook search crosshair        # Free-text filter
//! cvarbook show sv_cheats          # One record in full
//! cvarbook fav add sv_cheats       # Mark a favorite
//! cvarbook export --fav            # Write autoexec.cfg from favorites
//! ```

/// Command categorization: ordered rule table, first match wins.
pub mod categorize;

/// Command-line argument types and dispatch.
pub mod cli;

/// Fire-and-forget clipboard access.
pub mod clipboard;

/// Terminal color utilities.
pub mod colors;

/// Optional `.cvarbook/config.toml` support.
pub mod config;

/// Config-script (`autoexec.cfg`) export.
pub mod export;

/// Locally persisted favorites store.
pub mod favorites;

/// Human/JSON/JSONL rendering of catalog views.
pub mod output;

/// CSV catalog parser.
pub mod parser;

/// Built-in command presets.
pub mod presets;

/// Free-text filtering and near-miss suggestions.
pub mod search;

/// Status message helpers.
pub mod status;

/// Common types used throughout the crate.
pub mod types;

/// One parsed console-command entry.
pub use types::CvarCommand;

/// Output format (Human, Json, Jsonl).
pub use types::OutputMode;

/// Color mode (Auto, Always, Never).
pub use types::ColorMode;

/// An ordered category bucket.
pub use types::CategoryBucket;

/// Parse a CSV document into command records.
pub use parser::parse_commands;

/// Group a catalog into category buckets.
pub use categorize::categorize;

/// File-backed favorites store.
pub use favorites::FavoritesStore;
