//! Accessibility and audio switches.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::keys::ParseKeyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKey {
    OpenDyslexic,
    Uppercase,
    Audio,
    Sound,
    Music,
}

impl SettingKey {
    pub const ALL: [Self; 5] = [
        Self::OpenDyslexic,
        Self::Uppercase,
        Self::Audio,
        Self::Sound,
        Self::Music,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OpenDyslexic => "opendyslexic",
            Self::Uppercase => "uppercase",
            Self::Audio => "audio",
            Self::Sound => "sound",
            Self::Music => "music",
        }
    }

    /// Id of the checkbox on the settings screen.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::OpenDyslexic => "opendyslexic-font",
            Self::Uppercase => "uppercase-letters",
            Self::Audio => "audio-reading",
            Self::Sound => "sound-effects",
            Self::Music => "theme-music",
        }
    }

    /// Body class applied while the switch is on, for switches that restyle text.
    #[must_use]
    pub const fn body_class(self) -> Option<&'static str> {
        match self {
            Self::OpenDyslexic => Some("opendyslexic"),
            Self::Uppercase => Some("uppercase"),
            Self::Audio | Self::Sound | Self::Music => None,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.key() == s || key.input_id() == s)
            .ok_or_else(|| ParseKeyError::new("setting", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub opendyslexic: bool,
    pub uppercase: bool,
    pub audio: bool,
    pub sound: bool,
    pub music: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opendyslexic: false,
            uppercase: false,
            audio: true,
            sound: true,
            music: true,
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::OpenDyslexic => self.opendyslexic,
            SettingKey::Uppercase => self.uppercase,
            SettingKey::Audio => self.audio,
            SettingKey::Sound => self.sound,
            SettingKey::Music => self.music,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        let slot = match key {
            SettingKey::OpenDyslexic => &mut self.opendyslexic,
            SettingKey::Uppercase => &mut self.uppercase,
            SettingKey::Audio => &mut self.audio,
            SettingKey::Sound => &mut self.sound,
            SettingKey::Music => &mut self.music,
        };
        *slot = value;
    }

    /// Classes the page body should carry for the current switches.
    #[must_use]
    pub fn body_classes(&self) -> Vec<&'static str> {
        SettingKey::ALL
            .into_iter()
            .filter(|key| self.get(*key))
            .filter_map(SettingKey::body_class)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_audio_only() {
        let settings = Settings::default();
        assert!(!settings.opendyslexic);
        assert!(!settings.uppercase);
        assert!(settings.audio && settings.sound && settings.music);
        assert!(settings.body_classes().is_empty());
    }

    #[test]
    fn set_touches_a_single_switch() {
        for key in SettingKey::ALL {
            let mut settings = Settings::default();
            let before = settings;
            settings.set(key, !before.get(key));
            for other in SettingKey::ALL {
                if other == key {
                    assert_ne!(settings.get(other), before.get(other));
                } else {
                    assert_eq!(settings.get(other), before.get(other), "{key} changed {other}");
                }
            }
        }
    }

    #[test]
    fn body_classes_track_text_switches() {
        let mut settings = Settings::default();
        settings.set(SettingKey::Uppercase, true);
        settings.set(SettingKey::Music, false);
        assert_eq!(settings.body_classes(), vec!["uppercase"]);
        settings.set(SettingKey::OpenDyslexic, true);
        assert_eq!(settings.body_classes(), vec!["opendyslexic", "uppercase"]);
    }

    #[test]
    fn parses_save_keys_and_checkbox_ids() {
        assert_eq!("sound".parse::<SettingKey>().unwrap(), SettingKey::Sound);
        assert_eq!(
            "opendyslexic-font".parse::<SettingKey>().unwrap(),
            SettingKey::OpenDyslexic
        );
        assert!("volume".parse::<SettingKey>().is_err());
    }
}
