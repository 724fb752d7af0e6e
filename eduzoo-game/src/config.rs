//! Tunables shipped as static game data.
use serde::{Deserialize, Serialize};

use crate::quiz::MathQuestion;

const DEFAULT_GAME_DATA: &str = include_str!("../../eduzoo-web/static/assets/data/game.json");

/// Storage slot used by every build of the game.
pub const SAVE_KEY: &str = "eduzoo-save";
pub const CORRECT_ANSWER_POINTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub save_key: String,
    pub correct_answer_points: u32,
    /// Pause between picking an avatar and landing on the main screen.
    pub avatar_transition_ms: u32,
    pub correct_answer_transition_ms: u32,
    pub wrong_answer_flash_ms: u32,
    pub celebration_ms: u32,
    pub quiz: MathQuestion,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_key: SAVE_KEY.to_string(),
            correct_answer_points: CORRECT_ANSWER_POINTS,
            avatar_transition_ms: 500,
            correct_answer_transition_ms: 1_500,
            wrong_answer_flash_ms: 1_000,
            celebration_ms: 2_000,
            quiz: MathQuestion::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Config bundled with the web assets, falling back to compiled defaults.
    #[must_use]
    pub fn load_from_static() -> Self {
        match Self::from_json(DEFAULT_GAME_DATA) {
            Ok(config) if config.quiz.is_playable() => config,
            Ok(_) => {
                log::warn!("bundled quiz answer is not among its options; using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("bundled game data unreadable: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_matches_compiled_defaults() {
        assert_eq!(GameConfig::load_from_static(), GameConfig::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "correct_answer_points": 25 }"#).unwrap();
        assert_eq!(config.correct_answer_points, 25);
        assert_eq!(config.save_key, SAVE_KEY);
        assert_eq!(config.quiz.answer, "5");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{ nope").is_err());
    }
}
