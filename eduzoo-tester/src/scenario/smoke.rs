use anyhow::Result;
use eduzoo_game::{Avatar, KeyValueStore};

use super::ScenarioCtx;

/// Onboard a player, answer once, and reload.
pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let mut store = ctx.fresh_store()?;
    anyhow::ensure!(!store.state().has_player(), "fresh store should have no player");

    store.set_player("Ana", "7")?;
    store.set_avatar(Avatar::Owl);
    let question = store.config().quiz.clone();
    anyhow::ensure!(question.is_playable(), "shipped quiz is not playable");
    store.record_math_answer_outcome(question.check(&question.answer));
    ctx.note(format!("🐼 answered `{}`", question.prompt));

    let points = store.config().correct_answer_points;
    anyhow::ensure!(
        store.state().points == points,
        "expected {points} points after one answer, got {}",
        store.state().points
    );

    let saved = ctx.storage().get(&store.config().save_key)?;
    anyhow::ensure!(saved.is_some(), "nothing was written to the save slot");

    let reloaded = ctx.reopen();
    anyhow::ensure!(
        reloaded.state() == store.state(),
        "reloaded state differs: {:?}",
        reloaded.state()
    );
    ctx.note(format!("💾 reloaded {} point(s)", reloaded.state().points));
    Ok(())
}
