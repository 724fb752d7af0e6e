use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::dom;
use crate::game::{AudioPlayer, SoundCue};

/// Plays cues through the page's `<audio id="…-sound">` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAudioPlayer;

impl AudioPlayer for HtmlAudioPlayer {
    fn play(&self, cue: SoundCue) {
        let Some(audio) = dom::element(cue.element_id())
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
        else {
            log::debug!("no audio element for {cue:?}");
            return;
        };
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                // Rejected until the page has seen a user gesture.
                if let Err(err) = JsFuture::from(promise).await {
                    log::info!("audio playback blocked: {}", dom::js_error_message(&err));
                }
            }),
            Err(err) => log::info!("audio playback failed: {}", dom::js_error_message(&err)),
        }
    }
}
