//! The single owner of a player's [`GameState`].
//!
//! Every mutation goes through a named command on [`GameProgressStore`], which
//! re-checks achievements where relevant and writes the save slot before
//! returning. Renderers read through [`GameProgressStore::state`] or take a
//! [`GameProgressStore::snapshot`].
use crate::achievements::{AchievementKey, Unlocks};
use crate::avatar::Avatar;
use crate::config::GameConfig;
use crate::merge::{DeserializationError, merge_payload};
use crate::settings::SettingKey;
use crate::state::GameState;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("player age must not be empty")]
    EmptyAge,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError<E: std::error::Error + 'static> {
    #[error("failed to encode game state: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage rejected the save: {0}")]
    Storage(#[source] E),
}

pub struct GameProgressStore<S: KeyValueStore> {
    state: GameState,
    storage: S,
    config: GameConfig,
}

impl<S: KeyValueStore> GameProgressStore<S> {
    /// A store holding default state; nothing is read from `storage` yet.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, GameConfig::default_config())
    }

    pub fn with_config(storage: S, config: GameConfig) -> Self {
        Self {
            state: GameState::default(),
            storage,
            config,
        }
    }

    /// Construct and immediately [`restore`](Self::restore) from the save slot.
    pub fn open(storage: S, config: GameConfig) -> Self {
        let mut store = Self::with_config(storage, config);
        store.restore();
        store
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state, detached from the store.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Record who is playing. Both values are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when either value is blank after trimming;
    /// the state is left unchanged.
    pub fn set_player(&mut self, name: &str, age: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if age.trim().is_empty() {
            return Err(ValidationError::EmptyAge);
        }
        self.state.player_name = name.to_string();
        self.state.player_age = age.to_string();
        log::info!("player set: {name} ({age})");
        self.persist();
        Ok(())
    }

    pub fn set_avatar(&mut self, avatar: Avatar) {
        self.state.avatar = avatar;
        self.persist();
    }

    /// Apply the outcome of one quiz answer.
    ///
    /// A correct answer awards points, counts a completed activity and
    /// advances `firstSteps`. A wrong answer changes nothing.
    pub fn record_math_answer_outcome(&mut self, correct: bool) -> Unlocks {
        if !correct {
            return Unlocks::default();
        }
        self.state.points = self
            .state
            .points
            .saturating_add(self.config.correct_answer_points);
        self.state.activities_completed = self.state.activities_completed.saturating_add(1);
        let first_steps = self.state.achievements.get_mut(AchievementKey::FirstSteps);
        first_steps.progress = first_steps.progress.saturating_add(1);
        let unlocks = self.unlock_reached();
        self.persist();
        unlocks
    }

    /// Advance one achievement by `amount`, for activities beyond the quiz.
    pub fn record_progress(&mut self, key: AchievementKey, amount: u32) -> Unlocks {
        let record = self.state.achievements.get_mut(key);
        record.progress = record.progress.saturating_add(amount);
        let unlocks = self.unlock_reached();
        self.persist();
        unlocks
    }

    /// Unlock every achievement whose target has been reached.
    ///
    /// Repeated calls without new progress return an empty set.
    pub fn evaluate_achievements(&mut self) -> Unlocks {
        let unlocks = self.unlock_reached();
        if !unlocks.is_empty() {
            self.persist();
        }
        unlocks
    }

    /// Unlock pass without a save; callers persist once afterwards.
    fn unlock_reached(&mut self) -> Unlocks {
        let unlocks = self.state.achievements.evaluate();
        for key in unlocks.iter() {
            log::info!("achievement unlocked: {key}");
        }
        unlocks
    }

    pub fn update_setting(&mut self, key: SettingKey, value: bool) {
        self.state.settings.set(key, value);
        log::debug!("setting {key} = {value}");
        self.persist();
    }

    /// Serialized save payload for the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be encoded.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }

    /// Replace the state from an exported payload, merged the same way as a
    /// restore. On error the current state is kept.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializationError`] if the text is not a JSON object.
    pub fn import_json(&mut self, text: &str) -> Result<(), DeserializationError> {
        self.state = merge_payload(GameState::default(), text)?;
        log::info!("imported save for `{}`", self.state.player_name);
        self.persist();
        Ok(())
    }

    /// Write the save slot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend rejects the write.
    pub fn try_persist(&self) -> Result<(), PersistError<S::Error>> {
        let payload = self.export_json()?;
        self.storage
            .set(&self.config.save_key, &payload)
            .map_err(PersistError::Storage)
    }

    /// Write the save slot, logging failures instead of returning them.
    pub fn persist(&self) {
        if let Err(err) = self.try_persist() {
            log::error!("could not save progress: {err}");
        }
    }

    /// Load the save slot over fresh defaults.
    ///
    /// An absent or unreadable slot leaves the defaults in place.
    pub fn restore(&mut self) {
        let defaults = GameState::default();
        let payload = match self.storage.get(&self.config.save_key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                log::debug!("no save in `{}`; starting fresh", self.config.save_key);
                self.state = defaults;
                return;
            }
            Err(err) => {
                log::warn!("could not read `{}`: {err}", self.config.save_key);
                self.state = defaults;
                return;
            }
        };
        self.state = match merge_payload(defaults, &payload) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("discarding unreadable save: {err}");
                GameState::default()
            }
        };
    }

    /// Start over: default state and an empty save slot.
    pub fn reset(&mut self) {
        self.state = GameState::default();
        if let Err(err) = self.storage.remove(&self.config.save_key) {
            log::error!("could not clear save: {err}");
        }
    }
}
