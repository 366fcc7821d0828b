use std::fmt::Write as _;

use vibe_core::{ImageBlob, PostCard, ProfileView, Tab, UserCard};

pub(crate) fn render_tabs(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn render_feed(cards: &[PostCard]) -> String {
    if cards.is_empty() {
        return "Лента пуста. Напишите первый пост: `post <текст>`\n".to_string();
    }

    let mut out = String::new();
    for card in cards {
        render_card(&mut out, card);
    }
    out
}

pub(crate) fn render_profile(profile: Option<&ProfileView>) -> String {
    let Some(profile) = profile else {
        return "Сначала войдите: `login <handle> <имя>`\n".to_string();
    };

    let user = &profile.user;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} @{}",
        user.initial(),
        user.display_name,
        user.handle
    );
    if let Some(bio) = &user.bio {
        let _ = writeln!(out, "{bio}");
    }
    let _ = writeln!(
        out,
        "posts: {}  followers: {}  following: {}",
        profile.stats.posts, profile.stats.followers, profile.stats.following
    );
    let _ = writeln!(out, "joined: {}", user.created_at.format("%Y-%m-%d"));
    out.push('\n');

    if profile.posts.is_empty() {
        out.push_str("Постов пока нет.\n");
    } else {
        for card in &profile.posts {
            render_card(&mut out, card);
        }
    }
    out
}

pub(crate) fn render_explore(users: &[UserCard]) -> String {
    if users.is_empty() {
        return "Других пользователей пока нет.\n".to_string();
    }

    let mut out = String::new();
    for user in users {
        let _ = writeln!(
            out,
            "{} {} @{}  [Follow]",
            user.initial, user.display_name, user.handle
        );
        if let Some(bio) = &user.bio {
            let _ = writeln!(out, "    {bio}");
        }
    }
    out
}

pub(crate) fn render_modal(image: Option<&ImageBlob>) -> String {
    match image {
        Some(image) => format!("{image}\n{}\n", image.as_str()),
        None => String::new(),
    }
}

fn render_card(out: &mut String, card: &PostCard) {
    let _ = writeln!(
        out,
        "#{} {} {} @{} · {}",
        card.id, card.author.initial, card.author.display_name, card.author.handle, card.age
    );
    if let Some(text) = &card.text {
        let _ = writeln!(out, "  {text}");
    }
    if let Some(image) = &card.image {
        let _ = writeln!(out, "  {image}");
    }

    let heart = if card.liked_by_me { "♥" } else { "♡" };
    let _ = writeln!(
        out,
        "  {heart} {}  💬 {}",
        card.like_count, card.comment_count
    );
    for comment in &card.comments {
        let _ = writeln!(
            out,
            "    {} {} · {}: {}",
            comment.author.initial, comment.author.display_name, comment.age, comment.text
        );
    }
    out.push('\n');
}
