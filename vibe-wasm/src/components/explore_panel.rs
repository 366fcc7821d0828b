use leptos::prelude::*;

use crate::state::AppState;

/// Другие пользователи. Кнопка Follow ничего не делает.
#[component]
pub(crate) fn ExplorePanel(state: AppState) -> impl IntoView {
    let users = Memo::new(move |_| state.session.with(|session| session.explore()));

    view! {
        <section class="explore">
            <h2>"Discover people"</h2>
            <Show
                when=move || !users.with(|users| users.is_empty())
                fallback=|| view! { <p class="empty">"No other users yet."</p> }
            >
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| view! {
                            <div class="user-card">
                                <div class="avatar">{user.initial.to_string()}</div>
                                <div class="user-info">
                                    <h3>{user.display_name}</h3>
                                    <p class="meta">{format!("@{}", user.handle)}</p>
                                    {user.bio.map(|bio| view! { <p class="bio">{bio}</p> })}
                                </div>
                                <button class="follow">"Follow"</button>
                            </div>
                        })
                        .collect_view()
                }}
            </Show>
        </section>
    }
}
