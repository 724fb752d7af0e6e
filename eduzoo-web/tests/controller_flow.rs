use eduzoo_web::controller::{
    AnswerFeedback, Command, Controller, Effects, MISSING_PLAYER_PROMPT, UiEvent,
};
use eduzoo_web::game::{
    AchievementKey, Avatar, GameConfig, GameProgressStore, MemoryStore, SAVE_KEY, SoundCue,
};
use eduzoo_web::router::Screen;

fn controller() -> (Controller<MemoryStore>, MemoryStore) {
    let slots = MemoryStore::new();
    let store = GameProgressStore::with_config(slots.clone(), GameConfig::default());
    (Controller::new(store), slots)
}

fn onboard(controller: &mut Controller<MemoryStore>) {
    controller.handle_event(UiEvent::StartClicked {
        name: "Ana",
        age: "7",
    });
    controller.handle_event(UiEvent::AvatarClicked("owl"));
}

#[test]
fn blank_start_prompts_and_stays_on_welcome() {
    let (mut controller, _) = controller();
    let effects = controller.handle_event(UiEvent::StartClicked {
        name: "   ",
        age: "7",
    });
    assert_eq!(effects.prompt.as_deref(), Some(MISSING_PLAYER_PROMPT));
    assert_eq!(effects.screen, None);
    assert_eq!(controller.screen(), Screen::Welcome);
}

#[test]
fn start_then_avatar_lands_on_main_after_delay() {
    let (mut controller, _) = controller();
    let start = controller.handle_event(UiEvent::StartClicked {
        name: " Ana ",
        age: "7",
    });
    assert_eq!(start.screen, Some(Screen::Avatar));
    assert_eq!(controller.store().state().player_name, "Ana");

    let picked = controller.handle_event(UiEvent::AvatarClicked("owl"));
    assert_eq!(picked.screen, Some(Screen::Main));
    assert_eq!(picked.delay_ms, 500);
    assert_eq!(controller.store().state().avatar, Avatar::Owl);
}

#[test]
fn unknown_avatar_is_ignored() {
    let (mut controller, _) = controller();
    let effects = controller.handle_event(UiEvent::AvatarClicked("dragon"));
    assert_eq!(effects, Effects::default());
    assert_eq!(controller.store().state().avatar, Avatar::Monkey);
}

#[test]
fn correct_answers_celebrate_only_on_unlock() {
    let (mut controller, _) = controller();
    onboard(&mut controller);
    controller.handle(Command::OpenActivity(eduzoo_web::game::Activity::Math));
    assert_eq!(controller.screen(), Screen::Math);

    for _ in 0..4 {
        let effects = controller.handle_event(UiEvent::MathOptionClicked("5"));
        assert_eq!(effects.feedback, Some(AnswerFeedback::Correct));
        assert_eq!(effects.sounds, vec![SoundCue::Correct]);
        assert!(!effects.celebrate);
        assert_eq!(effects.delay_ms, 1_500);
        assert_eq!(effects.flash_ms, 0);
    }
    let fifth = controller.handle_event(UiEvent::MathOptionClicked("5"));
    assert!(fifth.celebrate);
    assert_eq!(fifth.unlocked, vec![AchievementKey::FirstSteps]);
    assert_eq!(fifth.sounds, vec![SoundCue::Correct, SoundCue::Success]);
    assert_eq!(controller.store().state().points, 50);
}

#[test]
fn wrong_answer_flashes_without_saving() {
    let (mut controller, slots) = controller();
    let effects = controller.handle_event(UiEvent::MathOptionClicked("4"));
    assert_eq!(effects.feedback, Some(AnswerFeedback::Wrong));
    assert_eq!(effects.flash_ms, 1_000);
    assert_eq!(effects.delay_ms, 0);
    assert!(effects.sounds.is_empty());
    assert_eq!(effects.screen, None);
    assert!(slots.slot(SAVE_KEY).is_none());
}

#[test]
fn locked_activities_show_notices() {
    let (mut controller, _) = controller();
    for key in ["portuguese", "secret"] {
        let effects = controller.handle_event(UiEvent::ActivityClicked(key));
        assert!(effects.notice.is_some(), "{key}");
        assert_eq!(effects.screen, None);
    }
    let list = controller.handle_event(UiEvent::ActivityClicked("achievements"));
    assert_eq!(list.screen, Some(Screen::Achievements));
}

#[test]
fn checkbox_change_persists_setting() {
    let (mut controller, slots) = controller();
    let effects = controller.handle_event(UiEvent::CheckboxChanged {
        id: "opendyslexic-font",
        checked: true,
    });
    assert!(effects.settings_changed);
    let saved = slots.slot(SAVE_KEY).expect("saved");
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["settings"]["opendyslexic"], true);
    assert_eq!(value["settings"]["uppercase"], false);
}

#[test]
fn settings_and_back_navigation() {
    let (mut controller, _) = controller();
    controller.handle_event(UiEvent::ButtonClicked("settings-btn"));
    assert_eq!(controller.screen(), Screen::Settings);
    controller.handle_event(UiEvent::ButtonClicked("settings-back"));
    assert_eq!(controller.screen(), Screen::Main);
}

#[test]
fn effects_serialize_for_the_page() {
    let (mut controller, _) = controller();
    onboard(&mut controller);
    let effects = controller.handle_event(UiEvent::MathOptionClicked("5"));
    let value = serde_json::to_value(&effects).unwrap();
    assert_eq!(value["screen"], "main");
    assert_eq!(value["delayMs"], 1500);
    assert_eq!(value["sounds"][0], "correct");
    assert_eq!(value["feedback"], "correct");

    let wrong = controller.handle_event(UiEvent::MathOptionClicked("3"));
    let value = serde_json::to_value(&wrong).unwrap();
    assert_eq!(value["flashMs"], 1000);
    assert_eq!(value["feedback"], "wrong");
}
