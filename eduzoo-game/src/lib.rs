//! EduZoo Game Core
//!
//! Platform-agnostic progress model for the EduZoo children's game: player
//! identity, avatar, points, achievements and accessibility settings, plus the
//! save/restore logic that keeps old saves loadable as the state grows.
//! Nothing here touches the DOM; the web crate adapts it to the page.

pub mod achievements;
pub mod activity;
pub mod audio;
pub mod avatar;
pub mod config;
pub mod keys;
pub mod merge;
pub mod progress;
pub mod quiz;
pub mod settings;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use achievements::{AchievementKey, AchievementRecord, Achievements, Unlocks};
pub use activity::{Activity, ActivityRoute};
pub use audio::{AudioPlayer, SoundBoard, SoundCue};
pub use avatar::Avatar;
pub use config::{CORRECT_ANSWER_POINTS, GameConfig, SAVE_KEY};
pub use keys::ParseKeyError;
pub use merge::{DeserializationError, merge_payload, merge_value};
pub use progress::{GameProgressStore, PersistError, ValidationError};
pub use quiz::MathQuestion;
pub use settings::{SettingKey, Settings};
pub use state::GameState;
pub use storage::{KeyValueStore, MemoryStore};
