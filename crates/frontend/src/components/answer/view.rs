//! Answer - View Component

use super::parser::parse_answer_to_html;
use super::sanitize::{render_answer_body, sanitize_html, strip_for_copy};
use super::state::{
    citation_label, show_followups, supporting_content_disabled, thought_process_disabled,
    FeedbackGuard, FeedbackVote, COPIED_RESET_MS,
};
use super::view_model::AnswerVm;
use crate::api::{get_citation_file_path, send_feedback_api};
use crate::components::speech::{SpeechConfig, SpeechOutputAzure, SpeechOutputBrowser};
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::icons::icon;
use crate::shared::storage::get_access_token;
use contracts::chat::ChatAppResponse;
use contracts::feedback::FeedbackRequest;
use leptos::prelude::*;
use thaw::*;

/// One assistant answer with its toolbar, citations and follow-ups.
///
/// All user actions are reported through the callbacks; the component itself
/// only owns the copy indicator and the feedback vote.
#[component]
#[allow(non_snake_case)]
pub fn Answer(
    #[prop(into)] answer: Signal<ChatAppResponse>,
    /// Position of the answer in the conversation, used as feedback message index
    index: usize,
    speech_config: SpeechConfig,
    #[prop(optional, into)] is_selected: MaybeProp<bool>,
    #[prop(into)] is_streaming: Signal<bool>,
    /// Receives the document URL of the clicked citation
    on_citation_clicked: Callback<String>,
    on_thought_process_clicked: Callback<()>,
    on_supporting_content_clicked: Callback<()>,
    #[prop(optional)] on_followup_question_clicked: Option<Callback<String>>,
    #[prop(optional, into)] show_followup_questions: MaybeProp<bool>,
    #[prop(optional, into)] show_speech_output_browser: MaybeProp<bool>,
    #[prop(optional, into)] show_speech_output_azure: MaybeProp<bool>,
) -> impl IntoView {
    let vm = AnswerVm::new();

    // Parse once per response value, not on every render.
    let parsed = Memo::new(move |_| {
        answer.with(|a| parse_answer_to_html(a, is_streaming.get_untracked()))
    });
    let sanitized_answer_html = Memo::new(move |_| parsed.with(|p| sanitize_html(&p.answer_html)));
    let answer_body = Memo::new(move |_| render_answer_body(&sanitized_answer_html.get()));

    let handle_copy = move |_| {
        let text = strip_for_copy(&sanitized_answer_html.get_untracked());
        leptos::task::spawn_local(async move {
            if let Err(e) = copy_to_clipboard(&text).await {
                log::error!("Failed to copy text: {}", e);
                return;
            }
            let Some(ticket) = vm.copy.try_update(|c| c.mark_copied()) else {
                return;
            };
            gloo_timers::future::TimeoutFuture::new(COPIED_RESET_MS).await;
            vm.copy.try_update(|c| c.expire(ticket));
        });
    };

    let handle_feedback = move |vote: FeedbackVote| {
        let session_id = answer.with_untracked(|a| a.session_id());
        let guard = FeedbackGuard {
            is_streaming: is_streaming.get_untracked(),
            has_session: session_id.is_some(),
        };
        let started = vm.feedback.try_update(|s| s.begin(vote, guard)).flatten();
        let (Some(feedback_type), Some(session_id)) = (started, session_id) else {
            return;
        };

        let request = FeedbackRequest::new(session_id, index, feedback_type);
        let token = get_access_token();
        leptos::task::spawn_local(async move {
            let ok = match send_feedback_api(&request, token.as_deref()).await {
                Ok(_) => true,
                Err(e) => {
                    log::error!("Failed to send feedback: {}", e);
                    false
                }
            };
            // No-op when the answer was unmounted while the request was in flight.
            vm.feedback.try_update(|s| s.finish(ok));
        });
    };

    // Inline citation anchors come from sanitized HTML, so clicks are delegated.
    let handle_body_click = move |ev: leptos::ev::MouseEvent| {
        use wasm_bindgen::JsCast;
        let Some(target) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if let Ok(Some(anchor)) = target.closest("a.supContainer") {
            if let Some(citation) = anchor.get_attribute("title") {
                ev.prevent_default();
                on_citation_clicked.run(get_citation_file_path(&citation));
            }
        }
    };

    let feedback_disabled =
        Signal::derive(move || vm.feedback.get().is_loading() || is_streaming.get());
    let feedback_style = move |vote: FeedbackVote, active_color: &'static str| {
        move || {
            let state = vm.feedback.get();
            let color = if state.selected() == Some(vote) {
                active_color
            } else {
                "inherit"
            };
            let opacity = if state.is_loading() { 0.5 } else { 1.0 };
            format!("display: inline-flex; color: {}; opacity: {};", color, opacity)
        }
    };

    view! {
        <div class=move || {
            if is_selected.get().unwrap_or(false) {
                "answer-container answer-container--selected"
            } else {
                "answer-container"
            }
        }>
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <span class="answer-icon">{icon("answer")}</span>
                <div style="display: flex; align-items: center; gap: 2px;">
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title=move || if vm.copy.get().is_copied() { "Copied" } else { "Copy" }
                        on_click=handle_copy
                    >
                        {move || if vm.copy.get().is_copied() { icon("check") } else { icon("copy") }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title="Show thought process"
                        disabled=Signal::derive(move || answer.with(|a| thought_process_disabled(&a.context)))
                        on_click=move |_| on_thought_process_clicked.run(())
                    >
                        {icon("lightbulb")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title="Show supporting content"
                        disabled=Signal::derive(move || answer.with(|a| supporting_content_disabled(&a.context)))
                        on_click=move |_| on_supporting_content_clicked.run(())
                    >
                        {icon("clipboard-list")}
                    </Button>
                    <Show when=move || show_speech_output_azure.get().unwrap_or(false)>
                        <SpeechOutputAzure
                            answer=sanitized_answer_html
                            index=index
                            speech_config=speech_config
                            is_streaming=is_streaming
                        />
                    </Show>
                    <Show when=move || show_speech_output_browser.get().unwrap_or(false)>
                        <SpeechOutputBrowser answer=sanitized_answer_html />
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title="Thumbs up"
                        disabled=feedback_disabled
                        on_click=move |_| handle_feedback(FeedbackVote::Positive)
                    >
                        <span style=feedback_style(FeedbackVote::Positive, "#0078d4")>
                            {icon("like")}
                        </span>
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title="Thumbs down"
                        disabled=feedback_disabled
                        on_click=move |_| handle_feedback(FeedbackVote::Negative)
                    >
                        <span style=feedback_style(FeedbackVote::Negative, "#d13438")>
                            {icon("dislike")}
                        </span>
                    </Button>
                </div>
            </div>

            <div class="answer-text" inner_html=move || answer_body.get() on:click=handle_body_click></div>

            {move || {
                let citations = parsed.with(|p| p.citations.clone());
                (!citations.is_empty())
                    .then(|| {
                        view! {
                            <div style="display: flex; flex-wrap: wrap; gap: 5px; margin-top: 8px;">
                                <span class="citation-learn-more">"Citations:"</span>
                                {citations
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, citation)| {
                                        let path = get_citation_file_path(&citation);
                                        let label = citation_label(i, &citation);
                                        view! {
                                            <a
                                                class="citation"
                                                title=citation
                                                on:click=move |_| on_citation_clicked.run(path.clone())
                                            >
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}

            {move || {
                let enabled = show_followup_questions.get().unwrap_or(false);
                let has_handler = on_followup_question_clicked.is_some();
                let questions = answer.with(|a| {
                    show_followups(&a.context, enabled, has_handler)
                        .then(|| a.context.followups().to_vec())
                })?;
                let on_followup = on_followup_question_clicked?;
                let after_citations = parsed.with(|p| !p.citations.is_empty());
                Some(view! {
                    <div
                        class=if after_citations { "followup-questions followup-questions--spaced" } else { "followup-questions" }
                        style="display: flex; flex-wrap: wrap; gap: 6px; margin-top: 8px;"
                    >
                        <span class="followup-learn-more">"Follow-up questions:"</span>
                        {questions
                            .into_iter()
                            .map(|question| {
                                let title = question.clone();
                                let text = question.clone();
                                view! {
                                    <a
                                        class="followup-question"
                                        title=title
                                        on:click=move |_| on_followup.run(question.clone())
                                    >
                                        {text}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
