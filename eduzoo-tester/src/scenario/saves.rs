use anyhow::Result;
use eduzoo_game::{AchievementKey, Avatar, GameState, KeyValueStore, SettingKey};

use super::ScenarioCtx;

/// A save from before `explorer`, `music` and `activitiesCompleted` existed,
/// carrying a stale target and an unlock recorded below its target.
const LEGACY_SAVE: &str = r#"{
    "playerName": "Bia",
    "playerAge": "8",
    "avatar": "fox",
    "points": 40,
    "achievements": {
        "firstSteps": { "unlocked": true, "progress": 2, "target": 99 },
        "letterMaster": { "unlocked": false, "progress": 4, "target": 4 },
        "retired": { "unlocked": true, "progress": 1, "target": 1 }
    },
    "settings": { "opendyslexic": true, "audio": false, "volume": 11 }
}"#;

pub fn schema_evolution(ctx: &ScenarioCtx) -> Result<()> {
    let store = ctx.fresh_store()?;
    let save_key = store.config().save_key.clone();
    ctx.storage().set(&save_key, LEGACY_SAVE)?;

    let restored = ctx.reopen();
    let state = restored.state();
    anyhow::ensure!(
        state.player_name == "Bia" && state.player_age == "8",
        "player not carried over: {} ({})",
        state.player_name,
        state.player_age
    );
    anyhow::ensure!(state.avatar == Avatar::Fox, "avatar became {}", state.avatar);
    anyhow::ensure!(state.points == 40, "points became {}", state.points);
    anyhow::ensure!(
        state.activities_completed == 0,
        "missing activitiesCompleted should default to 0"
    );

    let first = state.achievements.get(AchievementKey::FirstSteps);
    anyhow::ensure!(
        first.unlocked && first.target == 5 && first.progress == 5,
        "firstSteps should stay unlocked at 5/5, got {first:?}"
    );
    let letters = state.achievements.get(AchievementKey::LetterMaster);
    anyhow::ensure!(
        !letters.unlocked && letters.progress == 4 && letters.target == 10,
        "letterMaster target must come from the code, got {letters:?}"
    );
    let explorer = state.achievements.get(AchievementKey::Explorer);
    anyhow::ensure!(
        !explorer.unlocked && explorer.progress == 0 && explorer.target == 3,
        "missing explorer should start locked, got {explorer:?}"
    );

    let settings = &state.settings;
    anyhow::ensure!(
        settings.opendyslexic && !settings.audio && settings.music && settings.sound,
        "settings merged wrongly: {settings:?}"
    );
    ctx.note("📜 legacy save upgraded");

    // The upgraded save is written back in the current layout.
    restored.persist();
    let rewritten = ctx
        .storage()
        .get(&save_key)?
        .ok_or_else(|| anyhow::anyhow!("upgraded save was not written"))?;
    let value: serde_json::Value = serde_json::from_str(&rewritten)?;
    let object = value
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("save is not an object"))?;
    anyhow::ensure!(
        object.len() == GameState::FIELDS.len()
            && GameState::FIELDS.iter().all(|field| object.contains_key(*field)),
        "rewritten save has fields {:?}",
        object.keys().collect::<Vec<_>>()
    );
    anyhow::ensure!(
        value["achievements"].get("retired").is_none(),
        "unknown achievement survived the upgrade"
    );
    Ok(())
}

pub fn corrupt_save(ctx: &ScenarioCtx) -> Result<()> {
    let store = ctx.fresh_store()?;
    let save_key = store.config().save_key.clone();
    let storage = ctx.storage();

    for payload in ["", "{{{", "null", "42", "[]", "\"eduzoo\""] {
        storage.set(&save_key, payload)?;
        let restored = ctx.reopen();
        anyhow::ensure!(
            restored.state() == &GameState::default(),
            "payload {payload:?} did not fall back to defaults"
        );
        ctx.note(format!("🧹 {payload:?} -> defaults"));
    }

    // A slot file that cannot be read at all behaves like a missing save.
    storage.write_raw("this is not json")?;
    let mut restored = ctx.reopen();
    anyhow::ensure!(
        restored.state() == &GameState::default(),
        "unreadable slot file did not fall back to defaults"
    );

    // A bad field costs only that field.
    storage.clear()?;
    storage.set(
        &save_key,
        r#"{"playerName":"Caio","points":"lots","avatar":"dragon","settings":{"uppercase":"yes","music":false}}"#,
    )?;
    restored = ctx.reopen();
    let state = restored.state();
    anyhow::ensure!(state.player_name == "Caio", "good field was lost");
    anyhow::ensure!(
        state.points == 0 && state.avatar == Avatar::default(),
        "malformed fields should fall back, got {} / {}",
        state.points,
        state.avatar
    );
    anyhow::ensure!(
        !state.settings.get(SettingKey::Uppercase) && !state.settings.get(SettingKey::Music),
        "settings merged wrongly: {:?}",
        state.settings
    );

    restored.reset();
    anyhow::ensure!(
        storage.get(&save_key)?.is_none(),
        "reset left the save slot behind"
    );
    Ok(())
}
