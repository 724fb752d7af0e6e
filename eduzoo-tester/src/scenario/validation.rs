use anyhow::Result;
use eduzoo_game::{KeyValueStore, ValidationError};

use super::ScenarioCtx;

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let mut store = ctx.fresh_store()?;
    let save_key = store.config().save_key.clone();

    let cases = [
        ("", "7", ValidationError::EmptyName),
        ("   ", "7", ValidationError::EmptyName),
        ("Ana", "", ValidationError::EmptyAge),
        ("Ana", " \t", ValidationError::EmptyAge),
    ];
    for (name, age, expected) in cases {
        let result = store.set_player(name, age);
        anyhow::ensure!(
            result == Err(expected),
            "set_player({name:?}, {age:?}) returned {result:?}"
        );
    }
    anyhow::ensure!(
        !store.state().has_player(),
        "rejected input reached the state"
    );
    anyhow::ensure!(
        ctx.storage().get(&save_key)?.is_none(),
        "rejected input was saved"
    );

    // Any non-blank age is accepted as typed.
    store.set_player("Ana", "sete")?;
    let reloaded = ctx.reopen();
    anyhow::ensure!(
        reloaded.state().player_age == "sete",
        "age not stored verbatim: {:?}",
        reloaded.state().player_age
    );
    ctx.note("🔤 opaque age kept");
    Ok(())
}
