use leptos::prelude::*;
use vibe_core::ProfileView;

use crate::components::post_card::PostCardView;
use crate::state::AppState;

#[component]
pub(crate) fn ProfilePanel(state: AppState) -> impl IntoView {
    let profile = Memo::new(move |_| state.session.with(|session| session.profile()));

    view! {
        <section class="profile">
            {move || profile.get().map(|profile| profile_body(state, profile))}
        </section>
    }
}

fn profile_body(state: AppState, profile: ProfileView) -> impl IntoView {
    let ProfileView { user, stats, posts } = profile;
    let joined = user.created_at.format("%Y-%m-%d").to_string();
    let initial = user.initial().to_string();

    view! {
        <div class="profile-card">
            <div class="avatar large">{initial}</div>
            <h2>{user.display_name}</h2>
            <p class="meta">{format!("@{}", user.handle)}</p>
            {user.bio.map(|bio| view! { <p class="bio">{bio}</p> })}
            <div class="stats">
                <div><strong>{stats.posts}</strong>" Posts"</div>
                <div><strong>{stats.followers}</strong>" Followers"</div>
                <div><strong>{stats.following}</strong>" Following"</div>
            </div>
            <p class="meta">{format!("Joined {joined}")}</p>
        </div>

        <div class="profile-posts">
            {if posts.is_empty() {
                view! { <p class="empty">"No posts yet."</p> }.into_any()
            } else {
                posts
                    .into_iter()
                    .map(|card| view! { <PostCardView state=state card=card /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
