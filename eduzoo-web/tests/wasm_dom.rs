#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use eduzoo_web::a11y;
use eduzoo_web::app::show_screen;
use eduzoo_web::dom;
use eduzoo_web::game::{
    GameConfig, GameProgressStore, KeyValueStore, LocalStorageStore, SAVE_KEY, SettingKey,
    Settings,
};
use eduzoo_web::router::Screen;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount_screens() {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    for screen in Screen::ALL {
        if doc.get_element_by_id(screen.element_id()).is_none() {
            let section = doc.create_element("section").expect("create section");
            section.set_id(screen.element_id());
            body.append_child(&section).expect("append section");
        }
    }
}

#[wasm_bindgen_test]
fn exactly_one_screen_is_active() {
    mount_screens();
    show_screen(Screen::Math);
    for screen in Screen::ALL {
        let section = dom::element(screen.element_id()).expect("section");
        assert_eq!(
            section.class_list().contains("active"),
            screen == Screen::Math,
            "{screen:?}"
        );
    }
}

#[wasm_bindgen_test]
fn settings_toggle_body_classes() {
    let mut settings = Settings::default();
    settings.set(SettingKey::OpenDyslexic, true);
    a11y::apply_settings(&settings);
    assert!(a11y::body_has_class("opendyslexic"));
    assert!(!a11y::body_has_class("uppercase"));

    settings.set(SettingKey::OpenDyslexic, false);
    a11y::apply_settings(&settings);
    assert!(!a11y::body_has_class("opendyslexic"));
}

#[wasm_bindgen_test]
fn progress_survives_a_reload_through_local_storage() {
    let storage = LocalStorageStore::open().expect("localStorage");
    storage.remove(SAVE_KEY).expect("clear");

    let mut store = GameProgressStore::with_config(storage, GameConfig::default());
    store.set_player("Ana", "7").expect("valid player");
    store.record_math_answer_outcome(true);

    let reopened = GameProgressStore::open(
        LocalStorageStore::open().expect("localStorage"),
        GameConfig::default(),
    );
    assert_eq!(reopened.state().player_name, "Ana");
    assert_eq!(reopened.state().points, 10);
    reopened.storage().remove(SAVE_KEY).expect("cleanup");
}
