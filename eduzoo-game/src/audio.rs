//! Sound effects, gated by `settings.sound`.
use serde::Serialize;

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Correct,
    Success,
}

impl SoundCue {
    /// Id of the `<audio>` element carrying the clip.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Correct => "correct-sound",
            Self::Success => "success-sound",
        }
    }
}

/// Playback capability provided by the presentation layer.
pub trait AudioPlayer {
    fn play(&self, cue: SoundCue);
}

/// Wraps a player so cues are dropped while sound effects are switched off.
pub struct SoundBoard<P> {
    player: P,
}

impl<P: AudioPlayer> SoundBoard<P> {
    pub const fn new(player: P) -> Self {
        Self { player }
    }

    /// Plays `cue` if enabled; returns whether it was forwarded.
    pub fn play(&self, cue: SoundCue, settings: &Settings) -> bool {
        if !settings.sound {
            log::debug!("sound off, skipping {cue:?}");
            return false;
        }
        self.player.play(cue);
        true
    }

    pub const fn player(&self) -> &P {
        &self.player
    }
}
