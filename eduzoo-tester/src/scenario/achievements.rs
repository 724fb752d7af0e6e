use anyhow::Result;
use eduzoo_game::AchievementKey;

use super::ScenarioCtx;

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let mut store = ctx.fresh_store()?;
    let target = AchievementKey::FirstSteps.target();

    for answer in 1..target {
        let unlocks = store.record_math_answer_outcome(true);
        anyhow::ensure!(
            unlocks.is_empty(),
            "answer {answer} unlocked {:?} before the target",
            unlocks
        );
    }
    let before_wrong = store.snapshot();
    let unlocks = store.record_math_answer_outcome(false);
    anyhow::ensure!(unlocks.is_empty(), "a wrong answer unlocked something");
    anyhow::ensure!(store.state() == &before_wrong, "a wrong answer changed state");

    let unlocks = store.record_math_answer_outcome(true);
    anyhow::ensure!(
        unlocks.contains(AchievementKey::FirstSteps) && unlocks.len() == 1,
        "answer {target} should unlock firstSteps alone, got {unlocks:?}"
    );
    ctx.note(format!("🏆 {}", store.state().achievements.summary_label()));

    let again = store.record_math_answer_outcome(true);
    anyhow::ensure!(again.is_empty(), "firstSteps unlocked twice");
    anyhow::ensure!(
        store.evaluate_achievements().is_empty(),
        "re-evaluating without progress reported unlocks"
    );

    let explorer = AchievementKey::Explorer;
    let unlocks = store.record_progress(explorer, explorer.target());
    anyhow::ensure!(
        unlocks.contains(explorer),
        "explorer did not unlock at its target"
    );

    let reloaded = ctx.reopen();
    let achievements = &reloaded.state().achievements;
    anyhow::ensure!(
        achievements.get(AchievementKey::FirstSteps).unlocked
            && achievements.get(explorer).unlocked,
        "unlocks were not saved: {achievements:?}"
    );
    anyhow::ensure!(
        achievements.unlocked_count() == 2,
        "expected 2 unlocked, got {}",
        achievements.unlocked_count()
    );
    Ok(())
}
