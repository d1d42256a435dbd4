//! Chat Page - View Component

use super::model::{build_request, toggle_panel, ChatTurn, EXAMPLE_QUESTIONS};
use super::view_model::ChatVm;
use crate::api::chat_api;
use crate::components::analysis_panel::{AnalysisPanel, AnalysisPanelTab};
use crate::components::answer::Answer;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::storage::get_access_token;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new();
    let app_config = use_app_config();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let ask = Callback::new(move |question: String| {
        let question = question.trim().to_string();
        if question.is_empty() || vm.is_loading.get_untracked() {
            return;
        }

        vm.error.set(None);
        vm.is_loading.set(true);
        vm.last_question.set(question.clone());
        vm.question.set(String::new());
        vm.active_citation.set(None);
        scroll_to_bottom();

        let request = vm.turns.with_untracked(|turns| build_request(turns, &question));
        let token = get_access_token();
        leptos::task::spawn_local(async move {
            match chat_api(&request, token.as_deref()).await {
                Ok(response) => {
                    vm.turns.update(|turns| turns.push(ChatTurn::new(question, response)));
                    scroll_to_bottom();
                }
                Err(e) => {
                    log::error!("Chat request failed: {}", e);
                    vm.error.set(Some(e));
                }
            }
            vm.is_loading.set(false);
        });
    });

    let open_tab = move |tab: AnalysisPanelTab, index: usize| {
        let next = toggle_panel(vm.panel.get_untracked(), tab, index);
        if let Some((tab, _)) = next {
            vm.active_tab.set(tab);
        }
        vm.panel.set(next);
    };

    let show_citation = move |path: String, index: usize| {
        let same = vm.active_citation.get_untracked().as_deref() == Some(path.as_str());
        if same && vm.panel.get_untracked() == Some((AnalysisPanelTab::Citation, index)) {
            vm.panel.set(None);
            return;
        }
        vm.active_citation.set(Some(path));
        vm.active_tab.set(AnalysisPanelTab::Citation);
        vm.panel.set(Some((AnalysisPanelTab::Citation, index)));
    };

    // Tab switches made inside the panel must be reflected in the selection.
    Effect::new(move |_| {
        let tab = vm.active_tab.get();
        if let Some((current, index)) = vm.panel.get_untracked() {
            if current != tab {
                vm.panel.set(Some((tab, index)));
            }
        }
    });

    let selected_answer = Signal::derive(move || {
        let index = vm.panel.get().map(|(_, index)| index)?;
        vm.turns.with(|turns| turns.get(index).map(|t| t.response.clone()))
    });

    let show_speech_output_browser =
        Signal::derive(move || app_config.config.with(|c| c.show_speech_output_browser));
    let show_speech_output_azure =
        Signal::derive(move || app_config.config.with(|c| c.show_speech_output_azure));

    view! {
        <div style="height: 100%; display: flex; gap: 16px; padding: 20px;">
            <div style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
                <Flex
                    justify=FlexJustify::SpaceBetween
                    align=FlexAlign::Center
                    style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
                >
                    <h2 style="font-size: 18px; font-weight: bold;">"Chat with your data"</h2>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || vm.turns.with(|t| t.is_empty()) || vm.is_loading.get())
                        on_click=move |_| vm.clear()
                    >
                        {icon("trash")}
                        " Clear chat"
                    </Button>
                </Flex>

                <div
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 16px; margin-bottom: 16px;"
                >
                    <Show when=move || vm.turns.with(|t| t.is_empty()) && !vm.is_loading.get()>
                        <div class="chat-empty-state" style="display: flex; flex-direction: column; align-items: center; gap: 12px; margin-top: 48px;">
                            {icon("answer")}
                            <h3>"Ask anything or try an example"</h3>
                            <Flex style="gap: 8px; flex-wrap: wrap; justify-content: center;">
                                {EXAMPLE_QUESTIONS
                                    .iter()
                                    .map(|example| {
                                        let question = example.to_string();
                                        view! {
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| ask.run(question.clone())
                                            >
                                                {*example}
                                            </Button>
                                        }
                                    })
                                    .collect_view()}
                            </Flex>
                        </div>
                    </Show>

                    <For
                        each=move || vm.turns.get().into_iter().enumerate()
                        key=|(_, turn)| turn.id
                        let:item
                    >
                        {{
                            let (index, turn) = item;
                            view! {
                                <div style="display: flex; flex-direction: column; gap: 8px;">
                                    <div style="align-self: flex-end; max-width: 70%; background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px; white-space: pre-wrap;">
                                        {turn.question.clone()}
                                    </div>
                                    <div style="align-self: flex-start; max-width: 90%;">
                                        <Answer
                                            answer=turn.response.clone()
                                            index=index
                                            speech_config=vm.speech
                                            is_selected=Signal::derive(move || {
                                                vm.panel.get().map(|(_, i)| i) == Some(index)
                                            })
                                            is_streaming=false
                                            on_citation_clicked=Callback::new(move |path: String| {
                                                show_citation(path, index)
                                            })
                                            on_thought_process_clicked=Callback::new(move |_| {
                                                open_tab(AnalysisPanelTab::ThoughtProcess, index)
                                            })
                                            on_supporting_content_clicked=Callback::new(move |_| {
                                                open_tab(AnalysisPanelTab::SupportingContent, index)
                                            })
                                            on_followup_question_clicked=Callback::new(move |q: String| ask.run(q))
                                            show_followup_questions=true
                                            show_speech_output_browser=show_speech_output_browser
                                            show_speech_output_azure=show_speech_output_azure
                                        />
                                    </div>
                                </div>
                            }
                        }}
                    </For>

                    <Show when=move || vm.is_loading.get()>
                        <div style="display: flex; flex-direction: column; gap: 8px;">
                            <div style="align-self: flex-end; max-width: 70%; background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px; white-space: pre-wrap;">
                                {move || vm.last_question.get()}
                            </div>
                            <div style="align-self: flex-start; display: flex; align-items: center; gap: 8px;">
                                <Spinner />
                                <span>"Generating answer..."</span>
                            </div>
                        </div>
                    </Show>

                    {move || {
                        vm.error
                            .get()
                            .map(|e| {
                                view! {
                                    <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; display: flex; justify-content: space-between; align-items: center;">
                                        <span style="color: var(--color-error);">{e}</span>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| ask.run(vm.last_question.get_untracked())
                                        >
                                            "Retry"
                                        </Button>
                                    </div>
                                }
                            })
                    }}
                </div>

                <Flex style="gap: 8px; align-items: flex-end;">
                    <div style="flex: 1;">
                        <Textarea
                            value=vm.question
                            placeholder="Type a new question... (Shift+Enter for a new line)"
                            attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                            disabled=vm.is_loading
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    ask.run(vm.question.get_untracked());
                                }
                            }
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.is_loading.get() || vm.question.with(|q| q.trim().is_empty()))
                        on_click=move |_| ask.run(vm.question.get_untracked())
                    >
                        {icon("send")}
                        " Ask"
                    </Button>
                </Flex>
            </div>

            <Show when=move || vm.panel.get().is_some()>
                <div style="width: 40%; min-width: 320px; border-left: 1px solid var(--colorNeutralStroke2); padding-left: 16px; display: flex; flex-direction: column;">
                    <Flex justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            attr:title="Close"
                            on_click=move |_| vm.panel.set(None)
                        >
                            {icon("close")}
                        </Button>
                    </Flex>
                    <AnalysisPanel
                        answer=selected_answer
                        active_tab=vm.active_tab
                        active_citation=vm.active_citation
                    />
                </div>
            </Show>
        </div>
    }
}
