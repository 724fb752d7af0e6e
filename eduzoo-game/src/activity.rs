use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::keys::ParseKeyError;

/// Cards on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Math,
    Portuguese,
    Achievements,
    Secret,
}

/// Where a card leads: an open activity, or a notice for a locked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityRoute {
    MathQuiz,
    AchievementList,
    Notice(&'static str),
}

impl Activity {
    pub const ALL: [Self; 4] = [Self::Math, Self::Portuguese, Self::Achievements, Self::Secret];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Portuguese => "portuguese",
            Self::Achievements => "achievements",
            Self::Secret => "secret",
        }
    }

    #[must_use]
    pub const fn route(self) -> ActivityRoute {
        match self {
            Self::Math => ActivityRoute::MathQuiz,
            Self::Achievements => ActivityRoute::AchievementList,
            Self::Portuguese => ActivityRoute::Notice("Floresta das Letras Encantadas - Em breve!"),
            Self::Secret => ActivityRoute::Notice(
                "Missões Secretas - Complete mais atividades para desbloquear!",
            ),
        }
    }
}

impl FromStr for Activity {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.key() == s)
            .ok_or_else(|| ParseKeyError::new("activity", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_cards_route_to_screens() {
        assert_eq!(Activity::Math.route(), ActivityRoute::MathQuiz);
        assert_eq!(Activity::Achievements.route(), ActivityRoute::AchievementList);
    }

    #[test]
    fn locked_cards_show_notices() {
        let ActivityRoute::Notice(text) = Activity::Portuguese.route() else {
            panic!("portuguese should be locked");
        };
        assert!(text.contains("Em breve"));
        assert!(matches!(Activity::Secret.route(), ActivityRoute::Notice(_)));
        assert!("chess".parse::<Activity>().is_err());
    }
}
