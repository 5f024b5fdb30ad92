//! Minimap configuration surface
//!
//! Five visibility toggles, one per hostile category group. The host's
//! configuration layer owns storage and UI binding; this struct is the
//! snapshot read fresh every frame; nothing here is cached.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::hostile::HostileCategory;

/// Per-frame visibility toggles for the minimap overlay
///
/// Each toggle gates one hostile category on the map. FactionA and
/// FactionB hostiles share the `show_players` toggle: both are
/// player-faction combatants, split only for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapSettings {
    /// Show FactionA/FactionB player-faction hostiles
    pub show_players: bool,
    /// Show ordinary scavenger AI
    pub show_scavs: bool,
    /// Show raider-bot scavengers
    pub show_scav_raiders: bool,
    /// Show boss-flagged hostiles
    pub show_bosses: bool,
    /// Show sect warrior cultists
    pub show_cultists: bool,
}

impl Default for MinimapSettings {
    fn default() -> Self {
        Self {
            show_players: true,
            show_scavs: true,
            show_scav_raiders: true,
            show_bosses: true,
            show_cultists: true,
        }
    }
}

impl MinimapSettings {
    /// Whether the toggle for a hostile category is on
    pub fn shows(&self, category: HostileCategory) -> bool {
        match category {
            HostileCategory::Scav => self.show_scavs,
            HostileCategory::ScavRaider => self.show_scav_raiders,
            HostileCategory::Boss => self.show_bosses,
            HostileCategory::Cultist => self.show_cultists,
            HostileCategory::FactionA | HostileCategory::FactionB => self.show_players,
        }
    }

    /// Whether every toggle is off (nothing can be drawn)
    pub fn all_hidden(&self) -> bool {
        !(self.show_players
            || self.show_scavs
            || self.show_scav_raiders
            || self.show_bosses
            || self.show_cultists)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
