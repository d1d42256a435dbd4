//! Analysis Panel - View Component

use super::model::{parse_supporting_content_item, thought_description, AnalysisPanelTab};
use crate::components::answer::sanitize_html;
use contracts::chat::ChatAppResponse;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn AnalysisPanel(
    #[prop(into)] answer: Signal<Option<ChatAppResponse>>,
    active_tab: RwSignal<AnalysisPanelTab>,
    #[prop(into)] active_citation: Signal<Option<String>>,
) -> impl IntoView {
    let selected_tab_value = RwSignal::new(active_tab.get_untracked().value().to_string());

    // Sync selected_tab_value <-> active_tab
    Effect::new(move |_| {
        let value = selected_tab_value.get();
        if let Some(tab) = AnalysisPanelTab::from_value(&value) {
            if active_tab.get_untracked() != tab {
                active_tab.set(tab);
            }
        }
    });
    Effect::new(move |_| {
        let value = active_tab.get().value();
        if selected_tab_value.with_untracked(|v| v != value) {
            selected_tab_value.set(value.to_string());
        }
    });

    let thought_process = move || {
        let thoughts = answer.with(|a| a.as_ref().map(|a| a.context.thoughts.clone()).unwrap_or_default());
        if thoughts.is_empty() {
            return view! { <div class="analysis-empty">"No thought process for this answer."</div> }
                .into_any();
        }
        view! {
            <ol class="thought-steps">
                {thoughts
                    .into_iter()
                    .map(|thought| {
                        let description = thought_description(&thought.description);
                        let props = thought
                            .props
                            .map(|props| {
                                props
                                    .into_iter()
                                    .map(|(key, value)| format!("{}: {}", key, value))
                                    .collect::<Vec<_>>()
                            })
                            .unwrap_or_default();
                        view! {
                            <li class="thought-step">
                                <div class="thought-title" style="font-weight: bold;">{thought.title}</div>
                                {(!props.is_empty())
                                    .then(|| {
                                        view! {
                                            <div style="display: flex; flex-wrap: wrap; gap: 4px;">
                                                {props
                                                    .into_iter()
                                                    .map(|p| {
                                                        view! {
                                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                                                {p}
                                                            </Badge>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })}
                                <pre style="white-space: pre-wrap; font-size: 12px;">{description}</pre>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
        .into_any()
    };

    let supporting_content = move || {
        let data_points = answer.with(|a| a.as_ref().map(|a| a.context.data_points.clone()).unwrap_or_default());
        if data_points.is_empty() {
            return view! { <div class="analysis-empty">"No supporting content for this answer."</div> }
                .into_any();
        }
        view! {
            <ul class="supporting-content" style="list-style: none; padding: 0;">
                {data_points
                    .iter()
                    .map(|item| {
                        let item = parse_supporting_content_item(item);
                        view! {
                            <li style="margin-bottom: 12px;">
                                <h4 style="margin: 0 0 4px 0;">{item.title}</h4>
                                <p style="margin: 0;" inner_html=sanitize_html(&item.content)></p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    let citation = move || match active_citation.get() {
        Some(url) => view! {
            <iframe title="Citation" src=url width="100%" style="height: 80vh; border: none;"></iframe>
        }
        .into_any(),
        None => view! { <div class="analysis-empty">"Select a citation to preview it."</div> }.into_any(),
    };

    view! {
        <div class="analysis-panel">
            <TabList selected_value=selected_tab_value>
                {AnalysisPanelTab::all()
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.value()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>
            <div class="tab-content" style="padding: 12px; overflow-y: auto;">
                {move || match active_tab.get() {
                    AnalysisPanelTab::ThoughtProcess => thought_process(),
                    AnalysisPanelTab::SupportingContent => supporting_content(),
                    AnalysisPanelTab::Citation => citation(),
                }}
            </div>
        </div>
    }
}
