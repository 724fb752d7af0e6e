// Accessibility helpers

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom;
use crate::game::{SettingKey, Settings};

/// Body class toggled while an achievement celebration plays.
pub const CELEBRATION_CLASS: &str = "celebration";

/// Apply the text-styling switches to `<body>` and sync the settings checkboxes.
///
/// Switches the OpenDyslexic font and uppercase lettering on or off for
/// young readers. Missing elements are skipped.
pub fn apply_settings(settings: &Settings) {
    if let Some(body) = dom::body() {
        for key in SettingKey::ALL {
            if let Some(class) = key.body_class() {
                dom::set_class(&body, class, settings.get(key));
            }
        }
    }
    for key in SettingKey::ALL {
        if let Some(input) = dom::element(key.input_id())
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_checked(settings.get(key));
        }
    }
}

/// Test whether `<body>` currently carries `class`.
#[must_use]
pub fn body_has_class(class: &str) -> bool {
    dom::body().is_some_and(|body| body.class_list().contains(class))
}
