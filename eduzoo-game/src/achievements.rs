//! Achievement records and the unlock pass.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::keys::ParseKeyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementKey {
    FirstSteps,
    LetterMaster,
    NumberGenius,
    Explorer,
    ShiningStar,
}

impl AchievementKey {
    pub const ALL: [Self; 5] = [
        Self::FirstSteps,
        Self::LetterMaster,
        Self::NumberGenius,
        Self::Explorer,
        Self::ShiningStar,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstSteps => "firstSteps",
            Self::LetterMaster => "letterMaster",
            Self::NumberGenius => "numberGenius",
            Self::Explorer => "explorer",
            Self::ShiningStar => "shiningStar",
        }
    }

    /// Progress needed to unlock. Never read from a save.
    #[must_use]
    pub const fn target(self) -> u32 {
        match self {
            Self::FirstSteps => 5,
            Self::LetterMaster => 10,
            Self::NumberGenius => 15,
            Self::Explorer => 3,
            Self::ShiningStar => 1,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::FirstSteps => "🏆",
            Self::LetterMaster => "🎯",
            Self::NumberGenius => "🔢",
            Self::Explorer => "🕵️",
            Self::ShiningStar => "⭐",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FirstSteps => "Primeiros Passos",
            Self::LetterMaster => "Mestre das Letras",
            Self::NumberGenius => "Gênio dos Números",
            Self::Explorer => "Explorador",
            Self::ShiningStar => "Estrela Brilhante",
        }
    }

    /// Card text for the achievements screen, phrased around `target`.
    #[must_use]
    pub fn description(self, target: u32) -> String {
        match self {
            Self::FirstSteps => format!("Complete {target} atividades"),
            Self::LetterMaster => format!("Acerte {target} palavras consecutivas"),
            Self::NumberGenius => format!("Resolva {target} problemas de matemática"),
            Self::Explorer => format!("Descubra {target} atividades secretas"),
            Self::ShiningStar => "Complete uma missão sem erros".to_string(),
        }
    }
}

impl fmt::Display for AchievementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AchievementKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.key() == s)
            .ok_or_else(|| ParseKeyError::new("achievement", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub unlocked: bool,
    pub progress: u32,
    pub target: u32,
}

impl AchievementRecord {
    #[must_use]
    pub const fn locked(target: u32) -> Self {
        Self {
            unlocked: false,
            progress: 0,
            target,
        }
    }

    #[must_use]
    pub const fn reached_target(&self) -> bool {
        self.progress >= self.target
    }

    /// Fill of the progress bar, `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.target == 0 {
            return 100;
        }
        let pct = u64::from(self.progress) * 100 / u64::from(self.target);
        u8::try_from(pct.min(100)).unwrap_or(100)
    }
}

/// One record per [`AchievementKey`], serialized as a camelCase map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievements {
    pub first_steps: AchievementRecord,
    pub letter_master: AchievementRecord,
    pub number_genius: AchievementRecord,
    pub explorer: AchievementRecord,
    pub shining_star: AchievementRecord,
}

impl Default for Achievements {
    fn default() -> Self {
        Self {
            first_steps: AchievementRecord::locked(AchievementKey::FirstSteps.target()),
            letter_master: AchievementRecord::locked(AchievementKey::LetterMaster.target()),
            number_genius: AchievementRecord::locked(AchievementKey::NumberGenius.target()),
            explorer: AchievementRecord::locked(AchievementKey::Explorer.target()),
            shining_star: AchievementRecord::locked(AchievementKey::ShiningStar.target()),
        }
    }
}

impl Achievements {
    #[must_use]
    pub const fn get(&self, key: AchievementKey) -> &AchievementRecord {
        match key {
            AchievementKey::FirstSteps => &self.first_steps,
            AchievementKey::LetterMaster => &self.letter_master,
            AchievementKey::NumberGenius => &self.number_genius,
            AchievementKey::Explorer => &self.explorer,
            AchievementKey::ShiningStar => &self.shining_star,
        }
    }

    pub fn get_mut(&mut self, key: AchievementKey) -> &mut AchievementRecord {
        match key {
            AchievementKey::FirstSteps => &mut self.first_steps,
            AchievementKey::LetterMaster => &mut self.letter_master,
            AchievementKey::NumberGenius => &mut self.number_genius,
            AchievementKey::Explorer => &mut self.explorer,
            AchievementKey::ShiningStar => &mut self.shining_star,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AchievementKey, &AchievementRecord)> {
        AchievementKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.iter().filter(|(_, record)| record.unlocked).count()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        AchievementKey::ALL.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Main-screen badge text, e.g. `"1/5"`.
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("{}/{}", self.unlocked_count(), self.len())
    }

    /// Unlocks every record whose progress has reached its target.
    ///
    /// Only records that flip during this call are reported, so a second pass
    /// without new progress returns an empty set.
    pub fn evaluate(&mut self) -> Unlocks {
        let mut unlocks = Unlocks::default();
        for key in AchievementKey::ALL {
            let record = self.get_mut(key);
            if !record.unlocked && record.reached_target() {
                record.unlocked = true;
                unlocks.newly_unlocked.insert(key);
            }
        }
        unlocks
    }
}

/// Keys unlocked by a single evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unlocks {
    pub newly_unlocked: BTreeSet<AchievementKey>,
}

impl Unlocks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.newly_unlocked.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.newly_unlocked.len()
    }

    #[must_use]
    pub fn contains(&self, key: AchievementKey) -> bool {
        self.newly_unlocked.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = AchievementKey> + '_ {
        self.newly_unlocked.iter().copied()
    }
}
