use leptos::prelude::*;
use vibe_core::{CommentLine, PostCard};

use crate::state::AppState;

/// Карточка поста: шапка, текст, картинка, действия и комментарии.
#[component]
pub(crate) fn PostCardView(state: AppState, card: PostCard) -> impl IntoView {
    let PostCard {
        id,
        author,
        age,
        text,
        image,
        like_count,
        liked_by_me,
        comment_count,
        comments,
    } = card;

    let draft = move || state.session.with(|session| session.view().comment_draft(id).to_string());
    let can_comment = move || state.session.with(|session| session.view().can_comment(id));
    let heart = if liked_by_me { "♥" } else { "♡" };

    view! {
        <article class="post">
            <div class="post-header">
                <div class="avatar">{author.initial.to_string()}</div>
                <div>
                    <h3>{author.display_name}</h3>
                    <p class="meta">{format!("@{} · {}", author.handle, age)}</p>
                </div>
            </div>

            {text.map(|text| view! { <p class="post-text">{text}</p> })}

            {image.map(|image| view! {
                <img
                    class="post-image"
                    src=image.as_str().to_string()
                    alt="Post content"
                    on:click=move |_| state.session.update(|session| {
                        session.open_image(id);
                    })
                />
            })}

            <div class="post-actions">
                <button
                    class="like"
                    class:liked=liked_by_me
                    on:click=move |_| state.session.update(|session| {
                        session.like(id);
                    })
                >
                    {format!("{heart} {like_count}")}
                </button>
                <span class="comment-count">{format!("💬 {comment_count}")}</span>
                <button class="share">"Share"</button>
            </div>

            <div class="comments">
                {comments.into_iter().map(comment_line).collect_view()}
            </div>

            <div class="comment-form">
                <input
                    type="text"
                    placeholder="Write a comment..."
                    prop:value=draft
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.session.update(|session| session.view_mut().set_comment_draft(id, text));
                    }
                />
                <button
                    disabled=move || !can_comment()
                    on:click=move |_| state.session.update(|session| {
                        session.submit_comment(id);
                    })
                >
                    "Send"
                </button>
            </div>
        </article>
    }
}

fn comment_line(comment: CommentLine) -> impl IntoView {
    view! {
        <div class="comment">
            <div class="avatar small">{comment.author.initial.to_string()}</div>
            <div class="bubble">
                <span class="name">{comment.author.display_name}</span>
                " "
                <span class="meta">{comment.age.to_string()}</span>
                <p>{comment.text}</p>
            </div>
        </div>
    }
}
