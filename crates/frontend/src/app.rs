use crate::pages::chat::ChatPage;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Backend feature flags (speech output etc.), shared with every page.
    let app_config = AppConfig::new();
    provide_context(app_config);
    app_config.load();

    view! {
        <ChatPage />
    }
}
