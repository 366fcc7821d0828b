use std::sync::Arc;

use tracing::{debug, warn};

use super::cards::{CommentLine, PostCard, ProfileView, UserCard};
use super::state::{Tab, ViewState};
use crate::application::clock::Clock;
use crate::application::feed_store::{FeedStore, MemoryFeedStore};
use crate::data::post_repository::PostRepository;
use crate::data::repositories::memory::{MemoryPostRepository, MemoryUserRepository};
use crate::data::user_repository::UserRepository;
use crate::domain::comment::CreateCommentRequest;
use crate::domain::ids::{CommentId, PostId};
use crate::domain::image::ImageBlob;
use crate::domain::post::{CreatePostRequest, Post};
use crate::domain::user::NewUserRequest;

/// Связка хранилища и состояния экрана, которой пользуются фронтенды.
///
/// Обработчики не возвращают ошибок: недопустимое действие просто ничего
/// не меняет (как неактивная кнопка), а причина пишется в лог на уровне
/// `debug`. Черновики очищаются только после успешного действия.
pub struct Session<U: UserRepository, P: PostRepository> {
    store: FeedStore<U, P>,
    view: ViewState,
}

pub type MemorySession = Session<MemoryUserRepository, MemoryPostRepository>;

impl MemorySession {
    pub fn in_memory() -> Self {
        Self::new(MemoryFeedStore::in_memory())
    }

    pub fn in_memory_with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(MemoryFeedStore::in_memory_with_clock(clock))
    }
}

impl<U: UserRepository, P: PostRepository> Session<U, P> {
    pub fn new(store: FeedStore<U, P>) -> Self {
        Self {
            store,
            view: ViewState::new(),
        }
    }

    pub fn store(&self) -> &FeedStore<U, P> {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.current_user_id().is_some()
    }

    pub fn login(&mut self, handle: &str, display_name: &str, bio: &str) -> bool {
        let req = NewUserRequest {
            handle: handle.to_string(),
            display_name: display_name.to_string(),
            bio: bio.to_string(),
        };
        match self.store.create_user(req) {
            Ok(_) => true,
            Err(err) => {
                debug!(error = %err, "login ignored");
                false
            }
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.view.select_tab(tab);
    }

    pub fn publish(&mut self) -> Option<PostId> {
        let Some(author_id) = self.store.current_user_id() else {
            debug!("publish ignored: no session");
            return None;
        };

        let req = CreatePostRequest {
            text: self.view.draft_text().to_string(),
            image: self.view.draft_image().cloned(),
        };
        match self.store.create_post(author_id, req) {
            Ok(post) => {
                self.view.clear_post_draft();
                Some(post.id)
            }
            Err(err) => {
                debug!(error = %err, "publish ignored");
                None
            }
        }
    }

    /// Лайк от имени текущего пользователя. Возвращает `true`, если
    /// состояние поста изменилось.
    pub fn like(&mut self, post_id: PostId) -> bool {
        let Some(user_id) = self.store.current_user_id() else {
            debug!(post_id = %post_id, "like ignored: no session");
            return false;
        };

        match self.store.toggle_like(post_id, user_id) {
            Ok(_) => true,
            Err(err) => {
                debug!(post_id = %post_id, error = %err, "like ignored");
                false
            }
        }
    }

    pub fn submit_comment(&mut self, post_id: PostId) -> Option<CommentId> {
        let Some(author_id) = self.store.current_user_id() else {
            debug!(post_id = %post_id, "comment ignored: no session");
            return None;
        };

        let req = CreateCommentRequest {
            text: self.view.comment_draft(post_id).to_string(),
        };
        match self.store.add_comment(post_id, author_id, req) {
            Ok(comment) => {
                self.view.clear_comment_draft(post_id);
                Some(comment.id)
            }
            Err(err) => {
                debug!(post_id = %post_id, error = %err, "comment ignored");
                None
            }
        }
    }

    /// Открывает картинку поста на весь экран; посты без картинки игнорируются.
    pub fn open_image(&mut self, post_id: PostId) -> bool {
        match self.store.get_post(post_id) {
            Ok(post) if post.image.is_some() => {
                self.view.open_modal(post_id);
                true
            }
            Ok(_) => {
                debug!(post_id = %post_id, "open image ignored: post has no image");
                false
            }
            Err(err) => {
                debug!(post_id = %post_id, error = %err, "open image ignored");
                false
            }
        }
    }

    pub fn close_image(&mut self) {
        self.view.close_modal();
    }

    pub fn modal_image(&self) -> Option<ImageBlob> {
        let post_id = self.view.modal_target()?;
        self.store.get_post(post_id).ok()?.image
    }

    pub fn feed_cards(&self) -> Vec<PostCard> {
        match self.store.feed() {
            Ok(posts) => posts.iter().map(|post| self.post_card(post)).collect(),
            Err(err) => {
                warn!(error = %err, "failed to load feed");
                Vec::new()
            }
        }
    }

    pub fn profile(&self) -> Option<ProfileView> {
        let user = self.store.current_user()?;
        let stats = self
            .store
            .profile_stats(user.id)
            .map_err(|err| warn!(error = %err, "failed to load profile stats"))
            .ok()?;
        let posts = self
            .store
            .posts_by(user.id)
            .map_err(|err| warn!(error = %err, "failed to load profile posts"))
            .ok()?
            .iter()
            .map(|post| self.post_card(post))
            .collect();

        Some(ProfileView { user, stats, posts })
    }

    pub fn explore(&self) -> Vec<UserCard> {
        match self.store.other_users() {
            Ok(users) => users.iter().map(UserCard::from).collect(),
            Err(err) => {
                warn!(error = %err, "failed to load users");
                Vec::new()
            }
        }
    }

    fn post_card(&self, post: &Post) -> PostCard {
        let viewer = self.store.current_user_id();
        let comments = post
            .comments()
            .iter()
            .map(|comment| CommentLine {
                id: comment.id,
                author: self.store.author_label(comment.author_id),
                age: self.store.age_of(comment.created_at),
                text: comment.text.clone(),
            })
            .collect::<Vec<_>>();

        PostCard {
            id: post.id,
            author: self.store.author_label(post.author_id),
            age: self.store.age_of(post.created_at),
            text: post.text.clone(),
            image: post.image.clone(),
            like_count: post.like_count(),
            liked_by_me: viewer.is_some_and(|viewer| post.is_liked_by(viewer)),
            comment_count: comments.len(),
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};

    use super::MemorySession;
    use crate::application::clock::ManualClock;
    use crate::domain::age::RelativeAge;
    use crate::domain::ids::PostId;
    use crate::domain::image::ImageBlob;
    use crate::ui::state::Tab;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn session() -> (MemorySession, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 4, 10, 18, 30, 0).unwrap(),
        ));
        (MemorySession::in_memory_with_clock(clock.clone()), clock)
    }

    fn logged_in() -> (MemorySession, Arc<ManualClock>) {
        let (mut session, clock) = session();
        assert!(session.login("ada", "Ada Lovelace", "first programmer"));
        (session, clock)
    }

    fn publish_text(session: &mut MemorySession, text: &str) -> PostId {
        session.view_mut().set_draft_text(text);
        session.publish().expect("post must be published")
    }

    #[test]
    fn login_with_blank_fields_is_a_no_op() {
        let (mut session, _) = session();
        assert!(!session.login("", "Ada", ""));
        assert!(!session.login("ada", "   ", ""));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn actions_without_session_are_ignored() {
        let (mut session, _) = session();
        session.view_mut().set_draft_text("hello");
        assert!(session.publish().is_none());
        assert_eq!(session.view().draft_text(), "hello");

        assert!(!session.like(PostId(1)));
        session.view_mut().set_comment_draft(PostId(1), "hey");
        assert!(session.submit_comment(PostId(1)).is_none());
        assert_eq!(session.view().comment_draft(PostId(1)), "hey");
    }

    #[test]
    fn publish_clears_draft_only_on_success() {
        let (mut session, _) = logged_in();

        session.view_mut().set_draft_text("   ");
        assert!(session.publish().is_none());
        assert_eq!(session.view().draft_text(), "   ");
        assert!(session.feed_cards().is_empty());

        session.view_mut().set_draft_text("  hello world ");
        session
            .view_mut()
            .attach_image(ImageBlob::from_bytes(PNG).expect("png"));
        let id = session.publish().expect("published");

        assert_eq!(session.view().draft_text(), "");
        assert!(session.view().draft_image().is_none());

        let cards = session.feed_cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, id);
        assert_eq!(cards[0].text.as_deref(), Some("  hello world "));
        assert!(cards[0].image.is_some());
        assert_eq!(cards[0].author.handle, "ada");
        assert_eq!(cards[0].author.initial, 'A');
    }

    #[test]
    fn like_marks_card_as_liked_by_me() {
        let (mut session, _) = logged_in();
        let id = publish_text(&mut session, "post");

        assert!(session.like(id));
        let card = &session.feed_cards()[0];
        assert!(card.liked_by_me);
        assert_eq!(card.like_count, 1);

        assert!(session.like(id));
        let card = &session.feed_cards()[0];
        assert!(!card.liked_by_me);
        assert_eq!(card.like_count, 0);

        assert!(!session.like(PostId(12345)));
    }

    #[test]
    fn submit_comment_appends_and_clears_draft() {
        let (mut session, clock) = logged_in();
        let id = publish_text(&mut session, "post");

        assert!(session.submit_comment(id).is_none());

        session.view_mut().set_comment_draft(id, "first");
        session.submit_comment(id).expect("first comment");
        clock.advance(Duration::minutes(3));
        session.view_mut().set_comment_draft(id, "second");
        session.submit_comment(id).expect("second comment");

        assert_eq!(session.view().comment_draft(id), "");
        let card = &session.feed_cards()[0];
        assert_eq!(card.comment_count, 2);
        let texts: Vec<_> = card.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(card.comments[0].age, RelativeAge::Minutes(3));
        assert_eq!(card.comments[1].age, RelativeAge::JustNow);
    }

    #[test]
    fn image_modal_opens_only_for_posts_with_images() {
        let (mut session, _) = logged_in();
        let text_only = publish_text(&mut session, "no picture");

        session
            .view_mut()
            .attach_image(ImageBlob::from_bytes(PNG).expect("png"));
        let with_image = session.publish().expect("image post");

        assert!(!session.open_image(text_only));
        assert!(session.modal_image().is_none());

        assert!(session.open_image(with_image));
        assert_eq!(
            session.modal_image().map(|img| img.mime_type().to_string()),
            Some("image/png".to_string())
        );

        session.close_image();
        assert!(session.modal_image().is_none());
    }

    #[test]
    fn profile_lists_own_posts_and_stats() {
        let (mut session, _) = logged_in();
        publish_text(&mut session, "one");
        publish_text(&mut session, "two");
        session.select_tab(Tab::Profile);

        let profile = session.profile().expect("profile");
        assert_eq!(session.view().tab(), Tab::Profile);
        assert_eq!(profile.user.bio.as_deref(), Some("first programmer"));
        assert_eq!(profile.stats.posts, 2);
        assert_eq!(profile.posts[0].text.as_deref(), Some("two"));
    }

    #[test]
    fn explore_lists_everyone_but_current_user() {
        let (mut session, _) = session();
        assert!(session.explore().is_empty());

        assert!(session.login("grace", "Grace Hopper", ""));
        assert!(session.login("ada", "Ada Lovelace", ""));

        let cards = session.explore();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].handle, "grace");
        assert_eq!(cards[0].initial, 'G');
    }
}
