use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::post_card::PostCardView;
use crate::state::AppState;

#[component]
pub(crate) fn FeedPanel(state: AppState) -> impl IntoView {
    // Memo не пересобирает ленту, пока меняются только черновики.
    let cards = Memo::new(move |_| state.session.with(|session| session.feed_cards()));

    view! {
        <section class="feed">
            <Composer state=state />

            <Show
                when=move || !cards.with(|cards| cards.is_empty())
                fallback=|| view! {
                    <p class="empty">"No posts yet. Be the first to share something!"</p>
                }
            >
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| view! { <PostCardView state=state card=card /> })
                        .collect_view()
                }}
            </Show>
        </section>
    }
}
