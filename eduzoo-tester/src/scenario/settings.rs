use anyhow::Result;
use eduzoo_game::{SettingKey, Settings};

use super::ScenarioCtx;

/// Flip each switch on its own and check that only it changes across a reload.
pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let defaults = Settings::default();
    for key in SettingKey::ALL {
        let mut store = ctx.fresh_store()?;
        let flipped = !defaults.get(key);
        store.update_setting(key, flipped);

        let reloaded = ctx.reopen();
        let settings = &reloaded.state().settings;
        for other in SettingKey::ALL {
            let expected = if other == key {
                flipped
            } else {
                defaults.get(other)
            };
            anyhow::ensure!(
                settings.get(other) == expected,
                "after setting {key}={flipped}, {other} reloaded as {}",
                settings.get(other)
            );
        }
        ctx.note(format!("⚙️  {key} -> {flipped}"));
    }

    let mut store = ctx.fresh_store()?;
    store.update_setting(SettingKey::OpenDyslexic, true);
    store.update_setting(SettingKey::Uppercase, true);
    let classes = ctx.reopen().state().settings.body_classes();
    anyhow::ensure!(
        classes == ["opendyslexic", "uppercase"],
        "unexpected body classes {classes:?}"
    );
    Ok(())
}
