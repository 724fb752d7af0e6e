//! Built-in scenarios.
//!
//! A scenario is a plain function over a [`ScenarioCtx`]; it drives one or
//! more [`GameProgressStore`]s over the context's slot file and fails with an
//! `anyhow` error describing the first broken expectation.
mod achievements;
mod saves;
mod settings;
mod smoke;
mod validation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use eduzoo_game::{GameConfig, GameProgressStore};

use crate::file_store::JsonFileStore;

pub struct ScenarioCtx {
    pub state_file: PathBuf,
    pub verbose: bool,
}

impl ScenarioCtx {
    pub fn storage(&self) -> JsonFileStore {
        JsonFileStore::new(&self.state_file)
    }

    /// Wipe the slot file and open a store over it.
    pub fn fresh_store(&self) -> Result<GameProgressStore<JsonFileStore>> {
        let storage = self.storage();
        storage
            .clear()
            .with_context(|| format!("failed to reset {}", self.state_file.display()))?;
        Ok(GameProgressStore::open(storage, GameConfig::load_from_static()))
    }

    /// Open a second store over the same file, as a page reload would.
    pub fn reopen(&self) -> GameProgressStore<JsonFileStore> {
        GameProgressStore::open(self.storage(), GameConfig::load_from_static())
    }

    pub fn note(&self, message: impl AsRef<str>) {
        if self.verbose {
            println!("  {}", message.as_ref());
        }
    }
}

pub type ScenarioFn = fn(&ScenarioCtx) -> Result<()>;

pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    run: ScenarioFn,
}

impl Scenario {
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        (self.run)(ctx)
    }
}

pub static SCENARIOS: [Scenario; 6] = [
    Scenario {
        key: "smoke",
        name: "Smoke Test",
        run: smoke::run,
    },
    Scenario {
        key: "achievements",
        name: "Achievement Progression",
        run: achievements::run,
    },
    Scenario {
        key: "settings",
        name: "Accessibility Settings",
        run: settings::run,
    },
    Scenario {
        key: "schema-evolution",
        name: "Older Save Upgrade",
        run: saves::schema_evolution,
    },
    Scenario {
        key: "corrupt-save",
        name: "Corrupt Save Recovery",
        run: saves::corrupt_save,
    },
    Scenario {
        key: "validation",
        name: "Player Validation",
        run: validation::run,
    },
];

pub fn get_scenario(name: &str) -> Option<&'static Scenario> {
    let name = name.to_lowercase();
    SCENARIOS.iter().find(|scenario| scenario.key == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS
        .iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ctx(label: &str) -> ScenarioCtx {
        ScenarioCtx {
            state_file: std::env::temp_dir().join(format!(
                "eduzoo-scenario-{label}-{}.json",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_nanos()
            )),
            verbose: false,
        }
    }

    #[test]
    fn scenario_keys_are_unique() {
        let mut keys: Vec<_> = SCENARIOS.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SCENARIOS.len());
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get_scenario("SMOKE").map(|s| s.name), Some("Smoke Test"));
        assert!(get_scenario("boss-fight").is_none());
    }

    #[test]
    fn every_builtin_scenario_passes() {
        for scenario in &SCENARIOS {
            let ctx = temp_ctx(scenario.key);
            scenario
                .run(&ctx)
                .unwrap_or_else(|err| panic!("{} failed: {err:#}", scenario.key));
            ctx.storage().clear().expect("remove temp slot file");
        }
    }
}
