use leptos::prelude::*;
use vibe_core::Tab;

use crate::state::AppState;

#[component]
pub(crate) fn Header(state: AppState) -> impl IntoView {
    let me = Memo::new(move |_| state.session.with(|session| session.store().current_user()));

    view! {
        <header class="header">
            <div class="brand">"🌟 SocialVibe"</div>
            {move || me.get().map(|user| view! {
                <div class="me">
                    <span class="avatar">{user.initial().to_string()}</span>
                    <span class="name">{user.display_name}</span>
                </div>
            })}
        </header>
    }
}

#[component]
pub(crate) fn TabNav(state: AppState) -> impl IntoView {
    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        class:active=move || state.tab() == tab
                        on:click=move |_| state.session.update(|session| session.select_tab(tab))
                    >
                        {tab.label()}
                    </button>
                })
                .collect_view()}
        </nav>
    }
}
