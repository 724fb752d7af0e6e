//! Translates page events into store commands and describes what the page
//! should do next.
//!
//! Everything here is plain data so the flow can be exercised without a
//! browser; `app` carries the resulting [`Effects`] out to the DOM.
use serde::Serialize;

use crate::game::{
    AchievementKey, Activity, ActivityRoute, Avatar, GameProgressStore, KeyValueStore,
    ParseKeyError, SettingKey, SoundCue,
};
use crate::router::{Router, Screen};

pub const MISSING_PLAYER_PROMPT: &str = "Por favor, digite seu nome e idade!";

/// Raw event as read off the DOM: element ids and `data-*` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent<'a> {
    StartClicked { name: &'a str, age: &'a str },
    ButtonClicked(&'a str),
    AvatarClicked(&'a str),
    ActivityClicked(&'a str),
    MathOptionClicked(&'a str),
    CheckboxChanged { id: &'a str, checked: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartGame { name: String, age: String },
    ShowSettings,
    ShowMain,
    SelectAvatar(Avatar),
    OpenActivity(Activity),
    AnswerMath(String),
    ChangeSetting { key: SettingKey, enabled: bool },
}

impl Command {
    /// # Errors
    ///
    /// Returns [`ParseKeyError`] when an id or `data-*` value names nothing
    /// this game knows about.
    pub fn from_event(event: UiEvent<'_>) -> Result<Self, ParseKeyError> {
        Ok(match event {
            UiEvent::StartClicked { name, age } => Self::StartGame {
                name: name.trim().to_string(),
                age: age.to_string(),
            },
            UiEvent::ButtonClicked("settings-btn") => Self::ShowSettings,
            UiEvent::ButtonClicked(
                "settings-back" | "avatar-back" | "math-back" | "achievements-back",
            ) => Self::ShowMain,
            UiEvent::ButtonClicked(other) => return Err(ParseKeyError::new("button", other)),
            UiEvent::AvatarClicked(key) => Self::SelectAvatar(key.parse()?),
            UiEvent::ActivityClicked(key) => Self::OpenActivity(key.parse()?),
            UiEvent::MathOptionClicked(answer) => Self::AnswerMath(answer.to_string()),
            UiEvent::CheckboxChanged { id, checked } => Self::ChangeSetting {
                key: id.parse()?,
                enabled: checked,
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerFeedback {
    Correct,
    Wrong,
}

/// What the page should do after a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effects {
    /// Screen to switch to, after `delay_ms`.
    pub screen: Option<Screen>,
    pub delay_ms: u32,
    /// How long the wrong-answer highlight stays on.
    pub flash_ms: u32,
    /// Requested cues; playback is still gated on the sound setting.
    pub sounds: Vec<SoundCue>,
    pub celebrate: bool,
    pub unlocked: Vec<AchievementKey>,
    pub feedback: Option<AnswerFeedback>,
    pub notice: Option<String>,
    /// Blocking prompt to show instead of advancing.
    pub prompt: Option<String>,
    pub settings_changed: bool,
}

impl Effects {
    fn go(screen: Screen) -> Self {
        Self {
            screen: Some(screen),
            ..Self::default()
        }
    }
}

pub struct Controller<S: KeyValueStore> {
    store: GameProgressStore<S>,
    router: Router,
}

impl<S: KeyValueStore> Controller<S> {
    pub fn new(store: GameProgressStore<S>) -> Self {
        Self {
            store,
            router: Router::new(),
        }
    }

    pub const fn store(&self) -> &GameProgressStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GameProgressStore<S> {
        &mut self.store
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.router.current()
    }

    /// Parse and apply one page event. Unknown keys are logged and ignored.
    pub fn handle_event(&mut self, event: UiEvent<'_>) -> Effects {
        match Command::from_event(event) {
            Ok(command) => self.handle(command),
            Err(err) => {
                log::warn!("ignoring event {event:?}: {err}");
                Effects::default()
            }
        }
    }

    pub fn handle(&mut self, command: Command) -> Effects {
        let effects = match command {
            Command::StartGame { name, age } => self.start_game(&name, &age),
            Command::ShowSettings => Effects::go(Screen::Settings),
            Command::ShowMain => Effects::go(Screen::Main),
            Command::SelectAvatar(avatar) => {
                self.store.set_avatar(avatar);
                Effects {
                    delay_ms: self.store.config().avatar_transition_ms,
                    ..Effects::go(Screen::Main)
                }
            }
            Command::OpenActivity(activity) => match activity.route() {
                ActivityRoute::MathQuiz => Effects::go(Screen::Math),
                ActivityRoute::AchievementList => Effects::go(Screen::Achievements),
                ActivityRoute::Notice(text) => Effects {
                    notice: Some(text.to_string()),
                    ..Effects::default()
                },
            },
            Command::AnswerMath(choice) => self.answer_math(&choice),
            Command::ChangeSetting { key, enabled } => {
                self.store.update_setting(key, enabled);
                Effects {
                    settings_changed: true,
                    ..Effects::default()
                }
            }
        };
        if let Some(screen) = effects.screen {
            // Delayed switches are committed now; the page only defers the paint.
            self.router.show(screen);
        }
        effects
    }

    fn start_game(&mut self, name: &str, age: &str) -> Effects {
        match self.store.set_player(name, age) {
            Ok(()) => Effects::go(Screen::Avatar),
            Err(err) => {
                log::debug!("start rejected: {err}");
                Effects {
                    prompt: Some(MISSING_PLAYER_PROMPT.to_string()),
                    ..Effects::default()
                }
            }
        }
    }

    fn answer_math(&mut self, choice: &str) -> Effects {
        let correct = self.store.config().quiz.check(choice);
        let unlocks = self.store.record_math_answer_outcome(correct);
        if !correct {
            return Effects {
                feedback: Some(AnswerFeedback::Wrong),
                flash_ms: self.store.config().wrong_answer_flash_ms,
                ..Effects::default()
            };
        }
        let celebrate = !unlocks.is_empty();
        let mut sounds = vec![SoundCue::Correct];
        if celebrate {
            sounds.push(SoundCue::Success);
        }
        Effects {
            screen: Some(Screen::Main),
            delay_ms: self.store.config().correct_answer_transition_ms,
            sounds,
            celebrate,
            unlocked: unlocks.iter().collect(),
            feedback: Some(AnswerFeedback::Correct),
            ..Effects::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_trims_name_but_not_age() {
        let command = Command::from_event(UiEvent::StartClicked {
            name: "  Ana ",
            age: "7",
        })
        .unwrap();
        assert_eq!(
            command,
            Command::StartGame {
                name: "Ana".into(),
                age: "7".into()
            }
        );
    }

    #[test]
    fn back_buttons_lead_home() {
        for id in ["settings-back", "avatar-back", "math-back", "achievements-back"] {
            assert_eq!(
                Command::from_event(UiEvent::ButtonClicked(id)).unwrap(),
                Command::ShowMain
            );
        }
        assert!(Command::from_event(UiEvent::ButtonClicked("nope")).is_err());
    }

    #[test]
    fn checkbox_ids_map_to_settings() {
        let command = Command::from_event(UiEvent::CheckboxChanged {
            id: "sound-effects",
            checked: false,
        })
        .unwrap();
        assert_eq!(
            command,
            Command::ChangeSetting {
                key: SettingKey::Sound,
                enabled: false
            }
        );
    }
}
