//! Configuration file model and validation.
//!
//! The file is JSON and every field is optional:
//!
//! ```json
//! {
//!   "check_impossible_break": { "check_types": ["red_bed"], "search_depth": 10, "max_distance": 12.0 },
//!   "check_break_speed": { "enable": true, "max_break_speed": 100 },
//!   "messages": {
//!     "broadcast": { "impossible_break": "&c%s broke a bed through a wall", "fast_break": null },
//!     "kick": { "impossible_break": "&cImpossible break", "fast_break": "&cBreaking too fast" }
//!   }
//! }
//! ```
//!
//! Templates use `&` colour codes and a single `%s` slot for the player name.

use crate::error::Result;
use crate::permeability::catalog::is_block;
use crate::search::SealChecker;
use crate::types::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

/// Bed colours, used for the default set of checked blocks.
const BED_COLORS: [&str; 16] = [
    "white", "orange", "magenta", "light_blue", "yellow", "lime", "pink", "gray",
    "light_gray", "cyan", "purple", "blue", "brown", "green", "red", "black",
];

/// Colour code characters understood after `&`.
const COLOR_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRr";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuardConfig {
    pub check_impossible_break: ImpossibleBreakConfig,
    pub check_break_speed: BreakSpeedConfig,
    pub messages: MessagesConfig,
}

/// Sealed-region check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImpossibleBreakConfig {
    /// Block types whose breaking is checked.
    pub check_types: Vec<String>,
    /// Visit cap for the flood fill.
    pub search_depth: usize,
    /// Expansion radius around the broken block, in blocks.
    pub max_distance: f64,
}

impl Default for ImpossibleBreakConfig {
    fn default() -> Self {
        Self {
            check_types: BED_COLORS
                .iter()
                .map(|color| format!("minecraft:{}_bed", color))
                .collect(),
            search_depth: 10,
            max_distance: 12.0,
        }
    }
}

/// Repeated-break rate limit settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BreakSpeedConfig {
    pub enable: bool,
    /// Minimum gap between two breaks of the same type, in milliseconds.
    pub max_break_speed: u64,
}

impl Default for BreakSpeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            max_break_speed: 100,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessagesConfig {
    pub broadcast: MessagePair,
    pub kick: MessagePair,
}

/// One template per violation kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessagePair {
    pub impossible_break: Option<String>,
    pub fast_break: Option<String>,
}

impl GuardConfig {
    /// Parse configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate into runtime settings.
    ///
    /// Invalid `check_types` entries are dropped with a warning.
    pub fn into_settings(self) -> GuardSettings {
        let mut check_types = BTreeSet::new();
        for entry in &self.check_impossible_break.check_types {
            if entry.trim().parse::<u32>().is_ok() {
                tracing::warn!("Numeric block id \"{}\" is not supported", entry);
                continue;
            }
            let name = normalize_name(entry);
            if !is_block(&name) {
                tracing::warn!("Type \"{}\" is not a block!", entry);
                continue;
            }
            check_types.insert(name);
        }
        tracing::info!("Check types: {:?}", check_types);

        let breaks = &self.check_break_speed;
        let messages = self.messages;

        GuardSettings {
            check_types,
            checker: SealChecker::new(
                self.check_impossible_break.search_depth,
                self.check_impossible_break.max_distance,
            ),
            check_break_speed: breaks.enable,
            max_break_speed: Duration::from_millis(breaks.max_break_speed),
            messages: Messages {
                broadcast_impossible_break: messages.broadcast.impossible_break.as_deref().map(translate_color_codes),
                broadcast_fast_break: messages.broadcast.fast_break.as_deref().map(translate_color_codes),
                kick_impossible_break: translate_color_codes(messages.kick.impossible_break.as_deref().unwrap_or("")),
                kick_fast_break: translate_color_codes(messages.kick.fast_break.as_deref().unwrap_or("")),
            },
        }
    }
}

/// Validated settings used by [`BreakGuard`](crate::guard::BreakGuard).
#[derive(Debug, Clone, PartialEq)]
pub struct GuardSettings {
    /// Normalized names of checked block types.
    pub check_types: BTreeSet<String>,
    pub checker: SealChecker,
    pub check_break_speed: bool,
    pub max_break_speed: Duration,
    pub messages: Messages,
}

impl Default for GuardSettings {
    fn default() -> Self {
        GuardConfig::default().into_settings()
    }
}

/// Colour-translated message templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    pub broadcast_impossible_break: Option<String>,
    pub broadcast_fast_break: Option<String>,
    pub kick_impossible_break: String,
    pub kick_fast_break: String,
}

/// Substitute a player name into the `%s` slot of a template.
pub fn fill_template(template: &str, name: &str) -> String {
    template.replacen("%s", name, 1)
}

/// Replace `&` colour codes with the `§` section sign.
pub fn translate_color_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '&' {
            if let Some(&code) = chars.peek() {
                if COLOR_CODES.contains(code) {
                    out.push('\u{a7}');
                    out.push(code.to_ascii_lowercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}
