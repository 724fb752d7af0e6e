use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::{Scenario, ScenarioCtx};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_key: String,
    pub scenario_name: String,
    pub passed: bool,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

pub struct ScenarioRunner {
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run(&self, scenario: &Scenario, ctx: &ScenarioCtx) -> ScenarioResult {
        if self.verbose {
            println!("▶️  {} ({})", scenario.name.bold(), scenario.key);
        }
        let start = Instant::now();
        let outcome = scenario.run(ctx);
        let duration = start.elapsed();

        let failures = match outcome {
            Ok(()) => {
                println!("✅ {} - {duration:?}", scenario.key.green());
                Vec::new()
            }
            Err(err) => {
                println!("❌ {} - {duration:?}: {err:#}", scenario.key.red());
                log::error!("scenario {} failed: {err:#}", scenario.key);
                vec![format!("{err:#}")]
            }
        };

        ScenarioResult {
            scenario_key: scenario.key.to_string(),
            scenario_name: scenario.name.to_string(),
            passed: failures.is_empty(),
            failures,
            duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
