use super::config::SpeechConfig;
use crate::api::speech_api;
use crate::components::answer::strip_for_copy;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Plays backend-synthesized audio for one answer.
///
/// The audio URL is fetched on first use and cached per answer index.
#[component]
#[allow(non_snake_case)]
pub fn SpeechOutputAzure(
    #[prop(into)] answer: Signal<String>,
    index: usize,
    speech_config: SpeechConfig,
    #[prop(into)] is_streaming: Signal<bool>,
) -> impl IntoView {
    let is_loading = RwSignal::new(false);

    let toggle = move |_| {
        if speech_config.playing.get_untracked() == Some(index) {
            speech_config.stop();
            return;
        }
        if let Some(url) = speech_config.cached_url(index) {
            speech_config.play(index, &url);
            return;
        }

        let text = strip_for_copy(&answer.get_untracked());
        let generation = speech_config.generation();
        is_loading.set(true);
        leptos::task::spawn_local(async move {
            match speech_api(&text).await {
                Ok(Some(url)) => {
                    // The answer may be gone (chat cleared) by the time audio arrives.
                    let alive = is_loading.try_get_untracked().is_some();
                    if speech_config.cache_url(generation, index, url.clone()) && alive {
                        speech_config.play(index, &url);
                    }
                }
                Ok(None) => log::warn!("Speech output is not available on the backend"),
                Err(e) => log::error!("Failed to synthesize speech: {}", e),
            }
            is_loading.try_set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Transparent
            disabled=Signal::derive(move || is_streaming.get() || is_loading.get())
            attr:title=move || {
                if speech_config.is_playing(index) { "Stop speaking" } else { "Speak answer" }
            }
            on_click=toggle
        >
            {move || {
                if is_loading.get() {
                    view! { <Spinner /> }.into_any()
                } else if speech_config.is_playing(index) {
                    icon("volume-off")
                } else {
                    icon("volume")
                }
            }}
        </Button>
    }
}
