use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use vibe_core::{
    CreateCommentRequest, CreatePostRequest, DomainError, ManualClock, MemoryFeedStore,
    MemorySession, NewUserRequest, PostId, RelativeAge, UserId, relative_age,
};

fn store() -> MemoryFeedStore {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap(),
    ));
    MemoryFeedStore::in_memory_with_clock(clock)
}

fn ada(store: &mut MemoryFeedStore) -> UserId {
    store
        .create_user(NewUserRequest {
            handle: "ada".to_string(),
            display_name: "Ada Lovelace".to_string(),
            bio: String::new(),
        })
        .expect("ada must be created")
        .id
}

fn text(text: &str) -> CreatePostRequest {
    CreatePostRequest {
        text: text.to_string(),
        image: None,
    }
}

#[test]
fn like_by_second_user_round_trip() {
    let mut store = store();
    let ada = ada(&mut store);
    let post = store
        .create_post(ada, text("hello world"))
        .expect("post must be created");
    let second = UserId(ada.0 + 1_000);

    let liked = store.toggle_like(post.id, second).expect("like");
    assert!(liked.liked);
    assert_eq!(liked.like_count, 1);
    let stored = store.get_post(post.id).expect("post");
    assert_eq!(stored.like_count(), 1);
    assert_eq!(stored.liked_by().iter().copied().collect::<Vec<_>>(), [second]);

    let unliked = store.toggle_like(post.id, second).expect("unlike");
    assert!(!unliked.liked);
    let stored = store.get_post(post.id).expect("post");
    assert_eq!(stored.like_count(), 0);
    assert!(stored.liked_by().is_empty());
}

#[test]
fn like_count_matches_liker_set_for_long_sequences() {
    let mut store = store();
    let ada = ada(&mut store);
    let posts: Vec<PostId> = (0..3)
        .map(|i| {
            store
                .create_post(ada, text(&format!("post {i}")))
                .expect("post")
                .id
        })
        .collect();

    // детерминированная "случайная" последовательность
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let post = posts[(seed % posts.len() as u64) as usize];
        let user = UserId((seed >> 8) as i64 % 7);
        store.toggle_like(post, user).expect("toggle");
    }

    for post in store.feed().expect("feed") {
        assert_eq!(post.like_count(), post.liked_by().len());
        assert!(post.like_count() <= 7);
    }
}

#[test]
fn feed_is_newest_first_by_insertion() {
    let mut store = store();
    let ada = ada(&mut store);
    let p1 = store.create_post(ada, text("P1")).expect("p1");
    let p2 = store.create_post(ada, text("P2")).expect("p2");

    let feed = store.feed().expect("feed");
    assert_eq!(feed[0].id, p2.id);
    assert_eq!(feed[1].id, p1.id);
}

#[test]
fn blank_post_without_image_is_rejected() {
    let mut store = store();
    let ada = ada(&mut store);
    let before = store.feed().expect("feed");

    let err = store.create_post(ada, text(" \t ")).expect_err("blank");
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(store.feed().expect("feed"), before);
}

#[test]
fn comments_grow_by_one_in_submission_order() {
    let mut store = store();
    let ada = ada(&mut store);
    let post = store.create_post(ada, text("post")).expect("post");

    for (i, body) in ["a", "b", "c"].into_iter().enumerate() {
        store
            .add_comment(
                post.id,
                ada,
                CreateCommentRequest {
                    text: body.to_string(),
                },
            )
            .expect("comment");
        assert_eq!(store.get_post(post.id).expect("post").comments().len(), i + 1);
    }

    let bodies: Vec<_> = store
        .get_post(post.id)
        .expect("post")
        .comments()
        .iter()
        .map(|c| c.text.clone())
        .collect();
    assert_eq!(bodies, ["a", "b", "c"]);
}

#[test]
fn relative_age_examples() {
    let now = Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap();
    assert_eq!(relative_age(now - Duration::seconds(30), now), RelativeAge::JustNow);
    assert_eq!(relative_age(now - Duration::minutes(5), now).to_string(), "5m");
    assert_eq!(relative_age(now - Duration::hours(2), now).to_string(), "2h");
    assert_eq!(relative_age(now - Duration::days(3), now).to_string(), "3d");
}

#[test]
fn session_cards_serialize_to_json() {
    let mut session = MemorySession::in_memory();
    assert!(session.login("ada", "Ada Lovelace", ""));
    session.view_mut().set_draft_text("hello world");
    session.publish().expect("published");

    let json = serde_json::to_value(session.feed_cards()).expect("serialize");
    assert_eq!(json[0]["text"], "hello world");
    assert_eq!(json[0]["author"]["handle"], "ada");
    assert_eq!(json[0]["age"]["unit"], "just_now");
    assert_eq!(json[0]["like_count"], 0);
}
