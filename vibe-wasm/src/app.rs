use leptos::prelude::*;
use vibe_core::Tab;

use crate::components::explore_panel::ExplorePanel;
use crate::components::feed_panel::FeedPanel;
use crate::components::header::{Header, TabNav};
use crate::components::image_modal::ImageModal;
use crate::components::login_panel::LoginPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    let error_text = move || state.error.get().unwrap_or_default();

    view! {
        <Show
            when=move || state.is_logged_in()
            fallback=move || view! { <LoginPanel state=state /> }
        >
            <Header state=state />

            <Show when=move || state.error.get().is_some()>
                <div class="error-banner" on:click=move |_| state.clear_error()>
                    <strong>"Ошибка: "</strong>
                    {error_text}
                </div>
            </Show>

            <div class="layout">
                <TabNav state=state />
                <main class="content">
                    {move || match state.tab() {
                        Tab::Home => view! { <FeedPanel state=state /> }.into_any(),
                        Tab::Profile => view! { <ProfilePanel state=state /> }.into_any(),
                        Tab::Search => view! { <ExplorePanel state=state /> }.into_any(),
                    }}
                </main>
            </div>

            <ImageModal state=state />
        </Show>
    }
}
