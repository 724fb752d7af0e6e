//! `#[wasm_bindgen]` surface called by the page script's event listeners.
//!
//! Each handler feeds one [`UiEvent`] to the [`Controller`], carries out the
//! DOM side of the returned [`Effects`] (screen switch, sounds, celebration,
//! accessibility classes) and hands the effects back as a JS object so the
//! script can show prompts, notices and answer feedback.
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::a11y;
use crate::audio::HtmlAudioPlayer;
use crate::controller::{Controller, Effects, UiEvent};
use crate::dom;
use crate::game::{LocalStorageStore, SoundBoard, open_web_progress};
use crate::router::Screen;
use crate::view::{MainView, QuizView, achievement_cards};

/// Body class held while a wrong answer is highlighted.
pub const WRONG_ANSWER_CLASS: &str = "wrong-answer";

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub struct EduZooApp {
    controller: Controller<LocalStorageStore>,
    sounds: SoundBoard<HtmlAudioPlayer>,
}

#[wasm_bindgen]
impl EduZooApp {
    /// Restore saved progress and apply its settings to the page.
    ///
    /// # Errors
    ///
    /// Fails when `localStorage` cannot be opened.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<EduZooApp, JsValue> {
        let store = open_web_progress().map_err(|err| JsValue::from_str(&err.to_string()))?;
        a11y::apply_settings(&store.state().settings);
        let app = Self {
            controller: Controller::new(store),
            sounds: SoundBoard::new(HtmlAudioPlayer),
        };
        show_screen(app.controller.screen());
        Ok(app)
    }

    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&mut self, name: &str, age: &str) -> Result<JsValue, JsValue> {
        self.dispatch(UiEvent::StartClicked { name, age })
    }

    #[wasm_bindgen(js_name = buttonClicked)]
    pub fn button_clicked(&mut self, id: &str) -> Result<JsValue, JsValue> {
        self.dispatch(UiEvent::ButtonClicked(id))
    }

    #[wasm_bindgen(js_name = avatarClicked)]
    pub fn avatar_clicked(&mut self, key: &str) -> Result<JsValue, JsValue> {
        self.dispatch(UiEvent::AvatarClicked(key))
    }

    #[wasm_bindgen(js_name = activityClicked)]
    pub fn activity_clicked(&mut self, key: &str) -> Result<JsValue, JsValue> {
        self.dispatch(UiEvent::ActivityClicked(key))
    }

    #[wasm_bindgen(js_name = mathOptionClicked)]
    pub fn math_option_clicked(&mut self, answer: &str) -> Result<JsValue, JsValue> {
        self.dispatch(UiEvent::MathOptionClicked(answer))
    }

    #[wasm_bindgen(js_name = settingChanged)]
    pub fn setting_changed(&mut self, id: &str, checked: bool) -> Result<JsValue, JsValue> {
        self.dispatch(UiEvent::CheckboxChanged { id, checked })
    }

    /// Deep copy of the game state.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.controller.store().snapshot())
    }

    #[wasm_bindgen(js_name = mainView)]
    pub fn main_view(&self) -> Result<JsValue, JsValue> {
        to_js(&MainView::from_state(self.controller.store().state()))
    }

    #[wasm_bindgen(js_name = achievementCards)]
    pub fn achievement_cards(&self) -> Result<JsValue, JsValue> {
        to_js(&achievement_cards(self.controller.store().state()))
    }

    #[wasm_bindgen(js_name = quiz)]
    pub fn quiz(&self) -> Result<JsValue, JsValue> {
        to_js(&QuizView::new(&self.controller.store().config().quiz))
    }

    /// Flush progress to `localStorage`.
    pub fn save(&self) {
        self.controller.store().persist();
    }

    #[wasm_bindgen(js_name = exportSave)]
    pub fn export_save(&self) -> Result<String, JsValue> {
        self.controller
            .store()
            .export_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    #[wasm_bindgen(js_name = importSave)]
    pub fn import_save(&mut self, text: &str) -> Result<(), JsValue> {
        self.controller
            .store_mut()
            .import_json(text)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        a11y::apply_settings(&self.controller.store().state().settings);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.controller.store_mut().reset();
        a11y::apply_settings(&self.controller.store().state().settings);
    }
}

impl EduZooApp {
    fn dispatch(&mut self, event: UiEvent<'_>) -> Result<JsValue, JsValue> {
        let effects = self.controller.handle_event(event);
        self.apply(&effects);
        to_js(&effects)
    }

    fn apply(&self, effects: &Effects) {
        let store = self.controller.store();
        let settings = &store.state().settings;
        if effects.settings_changed {
            a11y::apply_settings(settings);
        }
        for cue in &effects.sounds {
            self.sounds.play(*cue, settings);
        }
        if effects.celebrate {
            flash_body_class(a11y::CELEBRATION_CLASS, store.config().celebration_ms);
        }
        if effects.flash_ms > 0 {
            flash_body_class(WRONG_ANSWER_CLASS, effects.flash_ms);
        }
        if let Some(screen) = effects.screen {
            schedule_screen(screen, effects.delay_ms);
        }
    }
}

/// Mark exactly one screen section as active.
pub fn show_screen(screen: Screen) {
    for candidate in Screen::ALL {
        if let Some(section) = dom::element(candidate.element_id()) {
            dom::set_class(&section, "active", candidate == screen);
        }
    }
}

fn schedule_screen(screen: Screen, delay_ms: u32) {
    if delay_ms == 0 {
        show_screen(screen);
        return;
    }
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = dom::sleep_ms(delay).await {
            log::warn!("screen timer failed: {}", dom::js_error_message(&err));
        }
        show_screen(screen);
    });
}

/// Put `class` on `<body>` for `duration_ms`.
fn flash_body_class(class: &'static str, duration_ms: u32) {
    let Some(body) = dom::body() else {
        return;
    };
    dom::set_class(&body, class, true);
    let delay = i32::try_from(duration_ms).unwrap_or(i32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = dom::sleep_ms(delay).await {
            log::warn!("{class} timer failed: {}", dom::js_error_message(&err));
        }
        dom::set_class(&body, class, false);
    });
}
