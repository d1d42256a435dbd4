use crate::components::answer::strip_for_copy;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn speech_synthesis() -> Option<web_sys::SpeechSynthesis> {
    web_sys::window()?.speech_synthesis().ok()
}

/// Reads the answer aloud with the browser's built-in voices
#[component]
#[allow(non_snake_case)]
pub fn SpeechOutputBrowser(#[prop(into)] answer: Signal<String>) -> impl IntoView {
    let is_playing = RwSignal::new(false);
    let supported = speech_synthesis().is_some();

    let toggle = move |_| {
        let Some(synth) = speech_synthesis() else {
            return;
        };
        if is_playing.get_untracked() {
            synth.cancel();
            is_playing.set(false);
            return;
        }

        let text = strip_for_copy(&answer.get_untracked());
        let utterance = match web_sys::SpeechSynthesisUtterance::new_with_text(&text) {
            Ok(u) => u,
            Err(e) => {
                log::error!("Speech synthesis failed: {:?}", e);
                return;
            }
        };
        if let Some(lang) = web_sys::window().and_then(|w| w.navigator().language()) {
            utterance.set_lang(&lang);
        }
        let ended = Closure::once_into_js(move || {
            is_playing.try_set(false);
        });
        utterance.set_onend(Some(ended.unchecked_ref()));

        synth.cancel();
        synth.speak(&utterance);
        is_playing.set(true);
    };

    view! {
        <Button
            appearance=ButtonAppearance::Transparent
            disabled=Signal::derive(move || !supported)
            attr:title=move || if is_playing.get() { "Stop speaking" } else { "Speak answer" }
            on_click=toggle
        >
            {move || if is_playing.get() { icon("volume-off") } else { icon("volume") }}
        </Button>
    }
}
