//! Overlaying a saved payload onto a default [`GameState`].
//!
//! Saves written by older builds may lack fields, achievements or settings
//! that exist today. Rather than deserializing the payload wholesale, each
//! known field is decoded on its own and written over the default value, so
//! anything the payload does not mention keeps its fresh default. A field
//! that fails to decode is skipped with a warning; the rest still apply.
//!
//! Achievement targets always come from [`AchievementKey::target`]; a saved
//! `target` is ignored.
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::achievements::{AchievementKey, AchievementRecord, Achievements};
use crate::settings::{SettingKey, Settings};
use crate::state::GameState;

#[derive(Debug, thiserror::Error)]
pub enum DeserializationError {
    #[error("save payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save payload is a JSON {found}, expected an object")]
    NotAnObject { found: &'static str },
}

/// Decodes `payload` and merges it onto `base`.
///
/// # Errors
///
/// Returns an error when the payload is not JSON or its top level is not an
/// object. Individual malformed fields are not errors.
pub fn merge_payload(base: GameState, payload: &str) -> Result<GameState, DeserializationError> {
    let value: Value = serde_json::from_str(payload)?;
    merge_value(base, value)
}

/// Same as [`merge_payload`] for an already parsed value.
///
/// # Errors
///
/// Returns an error when `value` is not a JSON object.
pub fn merge_value(mut base: GameState, value: Value) -> Result<GameState, DeserializationError> {
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(DeserializationError::NotAnObject {
                found: json_kind(&other),
            });
        }
    };

    for (name, field) in fields {
        match name.as_str() {
            "playerName" => overlay(&mut base.player_name, &name, field),
            "playerAge" => overlay(&mut base.player_age, &name, field),
            "avatar" => overlay(&mut base.avatar, &name, field),
            "points" => overlay(&mut base.points, &name, field),
            "activitiesCompleted" => overlay(&mut base.activities_completed, &name, field),
            "achievements" => merge_achievements(&mut base.achievements, field),
            "settings" => merge_settings(&mut base.settings, field),
            other => log::debug!("ignoring unknown save field `{other}`"),
        }
    }
    Ok(base)
}

fn overlay<T: DeserializeOwned>(slot: &mut T, name: &str, value: Value) {
    match serde_json::from_value(value) {
        Ok(decoded) => *slot = decoded,
        Err(err) => log::warn!("keeping default for save field `{name}`: {err}"),
    }
}

/// A saved record; both halves optional so a partial record still merges.
#[derive(Debug, Default, Deserialize)]
struct SavedRecord {
    #[serde(default)]
    unlocked: Option<bool>,
    #[serde(default)]
    progress: Option<u32>,
}

fn merge_achievements(slot: &mut Achievements, value: Value) {
    let Some(entries) = as_object(value, "achievements") else {
        return;
    };
    for (name, entry) in entries {
        let Ok(key) = name.parse::<AchievementKey>() else {
            log::debug!("dropping unknown achievement `{name}` from save");
            continue;
        };
        match serde_json::from_value::<SavedRecord>(entry) {
            Ok(saved) => apply_record(slot.get_mut(key), key, &saved),
            Err(err) => log::warn!("keeping default for achievement `{key}`: {err}"),
        }
    }
}

fn apply_record(record: &mut AchievementRecord, key: AchievementKey, saved: &SavedRecord) {
    if let Some(progress) = saved.progress {
        record.progress = progress;
    }
    if let Some(unlocked) = saved.unlocked {
        record.unlocked = unlocked;
    }
    record.target = key.target();
    if record.unlocked && !record.reached_target() {
        log::warn!(
            "achievement `{key}` saved as unlocked at {}/{}; raising progress to target",
            record.progress,
            record.target
        );
        record.progress = record.target;
    }
}

fn merge_settings(slot: &mut Settings, value: Value) {
    let Some(entries) = as_object(value, "settings") else {
        return;
    };
    for (name, entry) in entries {
        let Ok(key) = name.parse::<SettingKey>() else {
            log::debug!("dropping unknown setting `{name}` from save");
            continue;
        };
        match entry {
            Value::Bool(enabled) => slot.set(key, enabled),
            other => log::warn!(
                "keeping default for setting `{key}`: expected a boolean, found {}",
                json_kind(&other)
            ),
        }
    }
}

fn as_object(value: Value, name: &str) -> Option<Map<String, Value>> {
    match value {
        Value::Object(entries) => Some(entries),
        other => {
            log::warn!(
                "keeping default for save field `{name}`: expected an object, found {}",
                json_kind(&other)
            );
            None
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::Avatar;
    use serde_json::json;

    fn merged(value: Value) -> GameState {
        merge_value(GameState::default(), value).unwrap()
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(merged(json!({})), GameState::default());
    }

    #[test]
    fn present_fields_overwrite_defaults() {
        let state = merged(json!({
            "playerName": "Ana",
            "playerAge": "7",
            "avatar": "owl",
            "points": 30,
            "activitiesCompleted": 3
        }));
        assert_eq!(state.player_name, "Ana");
        assert_eq!(state.player_age, "7");
        assert_eq!(state.avatar, Avatar::Owl);
        assert_eq!(state.points, 30);
        assert_eq!(state.activities_completed, 3);
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn missing_achievement_keeps_default_record() {
        let state = merged(json!({
            "achievements": {
                "firstSteps": { "unlocked": false, "progress": 2, "target": 5 },
                "letterMaster": { "unlocked": false, "progress": 4, "target": 10 },
                "numberGenius": { "unlocked": false, "progress": 1, "target": 15 },
                "shiningStar": { "unlocked": true, "progress": 1, "target": 1 }
            }
        }));
        assert_eq!(state.achievements.explorer, AchievementRecord::locked(3));
        assert_eq!(state.achievements.first_steps.progress, 2);
        assert_eq!(state.achievements.letter_master.progress, 4);
        assert!(state.achievements.shining_star.unlocked);
    }

    #[test]
    fn saved_targets_are_ignored() {
        let state = merged(json!({
            "achievements": { "firstSteps": { "unlocked": false, "progress": 1, "target": 1 } }
        }));
        assert_eq!(state.achievements.first_steps.target, 5);
        assert!(!state.achievements.first_steps.unlocked);
    }

    #[test]
    fn unlocked_below_target_is_lifted_to_target() {
        let state = merged(json!({
            "achievements": { "numberGenius": { "unlocked": true, "progress": 3, "target": 15 } }
        }));
        let record = state.achievements.number_genius;
        assert!(record.unlocked);
        assert_eq!(record.progress, 15);
    }

    #[test]
    fn malformed_field_falls_back_alone() {
        let state = merged(json!({
            "playerName": "Rui",
            "points": -4,
            "avatar": "dragon",
            "settings": { "music": "loud", "uppercase": true }
        }));
        assert_eq!(state.player_name, "Rui");
        assert_eq!(state.points, 0);
        assert_eq!(state.avatar, Avatar::Monkey);
        assert!(state.settings.music);
        assert!(state.settings.uppercase);
    }

    #[test]
    fn missing_settings_keep_defaults() {
        let state = merged(json!({ "settings": { "opendyslexic": true } }));
        assert!(state.settings.opendyslexic);
        assert!(state.settings.audio);
        assert!(state.settings.sound);
    }

    #[test]
    fn unknown_fields_and_keys_are_dropped() {
        let state = merged(json!({
            "theme": "dark",
            "achievements": { "speedRunner": { "unlocked": true, "progress": 9 } },
            "settings": { "volume": false }
        }));
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn non_object_payloads_are_errors() {
        assert!(matches!(
            merge_payload(GameState::default(), "[1, 2]"),
            Err(DeserializationError::NotAnObject { found: "array" })
        ));
        assert!(matches!(
            merge_payload(GameState::default(), "{not json"),
            Err(DeserializationError::Json(_))
        ));
    }
}
