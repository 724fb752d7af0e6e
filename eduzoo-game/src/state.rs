use serde::{Deserialize, Serialize};

use crate::achievements::Achievements;
use crate::avatar::Avatar;
use crate::settings::Settings;

/// Everything the game remembers about one player.
///
/// The serialized shape is the save payload: exactly the seven camelCase
/// top-level fields below.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_name: String,
    /// Kept as typed on the welcome screen; never parsed.
    pub player_age: String,
    pub avatar: Avatar,
    pub points: u32,
    pub achievements: Achievements,
    pub settings: Settings,
    pub activities_completed: u32,
}

impl GameState {
    /// Names of the top-level save fields, in payload order.
    pub const FIELDS: [&'static str; 7] = [
        "playerName",
        "playerAge",
        "avatar",
        "points",
        "achievements",
        "settings",
        "activitiesCompleted",
    ];

    #[must_use]
    pub fn has_player(&self) -> bool {
        !self.player_name.trim().is_empty() && !self.player_age.trim().is_empty()
    }
}
