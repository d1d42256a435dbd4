use super::cache::{release_playback, SpeechUrlCache};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;

/// Audio state shared by all answers of one conversation.
///
/// Only one answer plays at a time: starting playback reuses the single audio
/// element and stops whatever was playing before.
#[derive(Clone, Copy)]
pub struct SpeechConfig {
    /// Synthesized audio URL per answer index
    pub speech_urls: RwSignal<SpeechUrlCache>,
    /// Answer index currently playing
    pub playing: RwSignal<Option<usize>>,
    audio: StoredValue<Option<HtmlAudioElement>, LocalStorage>,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let audio = HtmlAudioElement::new()
            .map_err(|e| log::warn!("Audio element unavailable: {:?}", e))
            .ok();
        Self {
            speech_urls: RwSignal::new(SpeechUrlCache::default()),
            playing: RwSignal::new(None),
            audio: StoredValue::new_local(audio),
        }
    }

    pub fn is_playing(&self, index: usize) -> bool {
        self.playing.get() == Some(index)
    }

    pub fn generation(&self) -> u64 {
        self.speech_urls.with_untracked(|cache| cache.generation())
    }

    pub fn cached_url(&self, index: usize) -> Option<String> {
        self.speech_urls.with_untracked(|cache| cache.get(index))
    }

    /// Cache `url` unless the conversation was cleared after the request began
    pub fn cache_url(&self, generation: u64, index: usize, url: String) -> bool {
        let stored = self
            .speech_urls
            .try_update(|cache| cache.insert(generation, index, url.clone()))
            .unwrap_or(false);
        if !stored {
            revoke(&url);
        }
        stored
    }

    /// Stop playback and drop every cached URL
    pub fn clear(&self) {
        self.stop();
        let dropped = self.speech_urls.try_update(|cache| cache.clear()).unwrap_or_default();
        for url in dropped {
            revoke(&url);
        }
    }

    /// Play `url` on behalf of answer `index`, stopping any other answer
    pub fn play(&self, index: usize, url: &str) {
        self.stop();
        let playing = self.playing;
        self.audio.with_value(|audio| {
            let Some(audio) = audio else {
                return;
            };
            audio.set_src(url);
            let ended = Closure::once_into_js(move || {
                playing.try_update(|p| *p = release_playback(*p, index));
            });
            audio.set_onended(Some(ended.unchecked_ref()));
            match audio.play() {
                Ok(promise) => {
                    playing.set(Some(index));
                    // Autoplay policies reject the promise instead of failing the call.
                    leptos::task::spawn_local(async move {
                        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                            log::error!("Audio playback was rejected: {:?}", e);
                            playing.try_update(|p| *p = release_playback(*p, index));
                        }
                    });
                }
                Err(e) => log::error!("Failed to play audio: {:?}", e),
            }
        });
    }

    pub fn stop(&self) {
        self.audio.with_value(|audio| {
            if let Some(audio) = audio {
                audio.set_onended(None);
                let _ = audio.pause();
                audio.set_current_time(0.0);
            }
        });
        self.playing.try_set(None);
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn revoke(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::warn!("Failed to release audio URL: {:?}", e);
    }
}
