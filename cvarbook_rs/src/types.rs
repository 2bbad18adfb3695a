use serde::{Deserialize, Serialize};

/// Minimum number of CSV fields a data line must carry to produce a record:
/// name, value, default, flags, description. A sixth field, when present,
/// is the usage example.
pub const MIN_FIELDS: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {
    Human,
    Json,
    Jsonl,
}

/// One parsed console-command entry.
///
/// Records are constructed once per catalog load and never mutated. `name`
/// is the unique key within a catalog; the first occurrence in the source
/// file wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvarCommand {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Full usage example, when the source carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl CvarCommand {
    /// The console invocation for this command: `name value`, or bare
    /// `name` when no value is set.
    pub fn invocation(&self) -> String {
        if self.value.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.value)
        }
    }
}

/// An ordered category bucket. Buckets come out of the categorizer in rule
/// priority order; members keep their relative catalog order.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryBucket {
    pub label: String,
    pub commands: Vec<CvarCommand>,
}
