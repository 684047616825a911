//! Snapshot data model — serde structs mirroring the game API's
//! `/api/game_state` payload.
//!
//! The panel never owns these entities; it holds one ephemeral snapshot at a
//! time and replaces it wholesale on every reload. Fields the API may omit
//! (attributes, inventory, flags) default rather than fail, so a partial
//! payload still renders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full game state returned by `GET /api/game_state` at one point in time.
///
/// Each section defaults to empty when missing. Extra top-level keys the game
/// server includes (`zones`, `items`) are ignored — the panel doesn't display
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameSnapshot {
    /// Players keyed by phone number.
    #[serde(default)]
    pub players: BTreeMap<String, Player>,
    /// Battles in progress, keyed by battle id.
    #[serde(default)]
    pub active_battles: BTreeMap<String, Battle>,
    /// Deities keyed by the owning player's phone number.
    #[serde(default)]
    pub deities: BTreeMap<String, Deity>,
}

/// One player character. Keyed externally by phone number.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Player {
    pub username: String,
    pub race: String,
    /// `class` is a keyword in Rust; the JSON key stays `class`.
    #[serde(rename = "class")]
    pub class_name: String,
    pub element: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub experience: i64,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub karma: i64,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Deities are excluded from the deity-creation candidate list.
    #[serde(default)]
    pub is_deity: bool,
}

/// Core attribute block. Every field defaults to 0 when the API omits it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Attributes {
    #[serde(default)]
    pub strength: i64,
    #[serde(default)]
    pub agility: i64,
    #[serde(default)]
    pub intelligence: i64,
    #[serde(default)]
    pub endurance: i64,
}

/// One active battle between two players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battle {
    /// Phone numbers of the two participants.
    pub players: [String; 2],
    pub zone: String,
    /// Phone number of the player whose turn it is.
    pub current_turn: String,
    #[serde(default)]
    pub rounds: u32,
}

/// A promoted player. Keyed externally by the owning player's phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deity {
    pub name: String,
    /// Owning player's phone. May dangle — the tables render `Unknown` then.
    pub player_phone: String,
    /// Followers. Only the count is displayed.
    #[serde(default)]
    pub chosen: Vec<String>,
}

impl GameSnapshot {
    /// Username for a phone number, or `Unknown` when the reference dangles.
    /// Battles and deities tolerate missing players rather than reject them.
    pub fn username_or_unknown(&self, phone: &str) -> &str {
        self.players
            .get(phone)
            .map(|p| p.username.as_str())
            .unwrap_or("Unknown")
    }
}
