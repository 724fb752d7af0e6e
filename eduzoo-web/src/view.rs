//! Render models handed to the page script.
use serde::Serialize;

use crate::game::{AchievementKey, GameState, MathQuestion};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainView {
    pub player_name: String,
    pub avatar: &'static str,
    pub avatar_emoji: &'static str,
    pub points: u32,
    pub achievements_label: String,
}

impl MainView {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player_name: state.player_name.clone(),
            avatar: state.avatar.key(),
            avatar_emoji: state.avatar.emoji(),
            points: state.points,
            achievements_label: state.achievements.summary_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCard {
    pub key: AchievementKey,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: String,
    pub unlocked: bool,
    pub progress_percent: u8,
}

#[must_use]
pub fn achievement_cards(state: &GameState) -> Vec<AchievementCard> {
    state
        .achievements
        .iter()
        .map(|(key, record)| AchievementCard {
            key,
            icon: key.icon(),
            title: key.title(),
            description: key.description(record.target),
            unlocked: record.unlocked,
            progress_percent: record.progress_percent(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView<'a> {
    pub prompt: &'a str,
    pub options: &'a [String],
}

impl<'a> QuizView<'a> {
    #[must_use]
    pub fn new(question: &'a MathQuestion) -> Self {
        Self {
            prompt: &question.prompt,
            options: question.options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Avatar;

    #[test]
    fn main_view_reflects_state() {
        let mut state = GameState {
            player_name: "Ana".into(),
            avatar: Avatar::Owl,
            points: 30,
            ..GameState::default()
        };
        state.achievements.first_steps.unlocked = true;
        state.achievements.first_steps.progress = 5;
        let view = MainView::from_state(&state);
        assert_eq!(view.avatar_emoji, "🦉");
        assert_eq!(view.points, 30);
        assert_eq!(view.achievements_label, "1/5");
    }

    #[test]
    fn cards_show_progress_for_every_achievement() {
        let mut state = GameState::default();
        state.achievements.first_steps.progress = 2;
        let cards = achievement_cards(&state);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].key, AchievementKey::FirstSteps);
        assert_eq!(cards[0].progress_percent, 40);
        assert_eq!(cards[0].description, "Complete 5 atividades");
        assert!(cards.iter().all(|card| !card.unlocked));
    }
}
