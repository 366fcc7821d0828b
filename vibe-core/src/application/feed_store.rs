use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use crate::data::post_repository::{NewComment, NewPost, PostRepository};
use crate::data::repositories::memory::{MemoryPostRepository, MemoryUserRepository};
use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::age::{RelativeAge, relative_age};
use crate::domain::comment::{Comment, CreateCommentRequest};
use crate::domain::error::DomainError;
use crate::domain::ids::{PostId, UserId};
use crate::domain::post::{CreatePostRequest, LikeOutcome, Post};
use crate::domain::user::{DEFAULT_AVATAR, NewUserRequest, User};

const UNKNOWN_NAME: &str = "User";
const UNKNOWN_HANDLE: &str = "unknown";

/// Как показывать автора поста или комментария.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLabel {
    pub display_name: String,
    pub handle: String,
    pub initial: char,
    pub avatar: String,
}

impl AuthorLabel {
    /// Заглушка для автора, которого не удалось найти в реестре.
    pub fn placeholder() -> Self {
        Self {
            display_name: UNKNOWN_NAME.to_string(),
            handle: UNKNOWN_HANDLE.to_string(),
            initial: '?',
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

impl From<&User> for AuthorLabel {
    fn from(user: &User) -> Self {
        Self {
            display_name: user.display_name.clone(),
            handle: user.handle.clone(),
            initial: user.initial(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub posts: usize,
    pub followers: u32,
    pub following: u32,
}

/// Всё состояние приложения: реестр пользователей, лента и текущая сессия.
///
/// Авторы постов и комментариев хранятся только как `UserId` и
/// разрешаются через [`FeedStore::lookup_user`], так что реализацию
/// реестра можно заменить, не трогая структуры постов.
pub struct FeedStore<U: UserRepository, P: PostRepository> {
    users: U,
    posts: P,
    clock: Arc<dyn Clock>,
    current_user: Option<UserId>,
}

pub type MemoryFeedStore = FeedStore<MemoryUserRepository, MemoryPostRepository>;

impl MemoryFeedStore {
    pub fn in_memory() -> Self {
        Self::new(
            MemoryUserRepository::new(),
            MemoryPostRepository::new(),
            Arc::new(SystemClock),
        )
    }

    pub fn in_memory_with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(MemoryUserRepository::new(), MemoryPostRepository::new(), clock)
    }
}

impl<U: UserRepository, P: PostRepository> FeedStore<U, P> {
    pub fn new(users: U, posts: P, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            posts,
            clock,
            current_user: None,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Создаёт пользователя и делает его текущим для сессии.
    ///
    /// Уникальность handle не проверяется.
    pub fn create_user(&mut self, req: NewUserRequest) -> Result<User, DomainError> {
        let req = req.validate()?;
        let bio = Some(req.bio).filter(|bio| !bio.is_empty());

        let user = self.users.create_user(NewUser {
            handle: req.handle,
            display_name: req.display_name,
            bio,
            created_at: self.clock.now(),
        })?;
        self.current_user = Some(user.id);

        info!(user_id = %user.id, handle = %user.handle, "user created");
        Ok(user)
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.current_user
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.and_then(|id| self.lookup_user(id))
    }

    pub fn create_post(
        &mut self,
        author_id: UserId,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        self.require_session()?;
        let req = req.validate()?;

        let post = self.posts.create_post(NewPost {
            author_id,
            text: Some(req.text).filter(|text| !text.is_empty()),
            image: req.image,
            created_at: self.clock.now(),
        })?;

        debug!(
            post_id = %post.id,
            author_id = %author_id,
            has_image = post.image.is_some(),
            "post created"
        );
        Ok(post)
    }

    pub fn toggle_like(
        &mut self,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<LikeOutcome, DomainError> {
        self.require_session()?;

        let outcome = self
            .posts
            .toggle_like(post_id, user_id)?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {post_id}")))?;

        debug!(
            post_id = %post_id,
            user_id = %user_id,
            liked = outcome.liked,
            like_count = outcome.like_count,
            "like toggled"
        );
        Ok(outcome)
    }

    pub fn add_comment(
        &mut self,
        post_id: PostId,
        author_id: UserId,
        req: CreateCommentRequest,
    ) -> Result<Comment, DomainError> {
        self.require_session()?;
        let req = req.validate()?;

        let comment = self
            .posts
            .add_comment(
                post_id,
                NewComment {
                    author_id,
                    text: req.text,
                    created_at: self.clock.now(),
                },
            )?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {post_id}")))?;

        debug!(post_id = %post_id, comment_id = %comment.id, "comment added");
        Ok(comment)
    }

    /// Ищет пользователя по id. Ошибка реестра не пробрасывается:
    /// для отображения она неотличима от "не найден".
    pub fn lookup_user(&self, id: UserId) -> Option<User> {
        match self.users.find_by_id(id) {
            Ok(user) => user,
            Err(err) => {
                warn!(user_id = %id, error = %err, "user lookup failed");
                None
            }
        }
    }

    pub fn author_label(&self, id: UserId) -> AuthorLabel {
        self.lookup_user(id)
            .map(|user| AuthorLabel::from(&user))
            .unwrap_or_else(AuthorLabel::placeholder)
    }

    pub fn age_of(&self, timestamp: DateTime<Utc>) -> RelativeAge {
        relative_age(timestamp, self.clock.now())
    }

    pub fn feed(&self) -> Result<Vec<Post>, DomainError> {
        self.posts.list_posts()
    }

    pub fn get_post(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .get_post(id)?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {id}")))
    }

    pub fn posts_by(&self, author_id: UserId) -> Result<Vec<Post>, DomainError> {
        self.posts.list_posts_by_author(author_id)
    }

    pub fn total_posts(&self) -> Result<usize, DomainError> {
        self.posts.total_posts()
    }

    /// Все пользователи, кроме текущего, в порядке регистрации.
    pub fn other_users(&self) -> Result<Vec<User>, DomainError> {
        let current = self.current_user;
        Ok(self
            .users
            .list_users()?
            .into_iter()
            .filter(|user| Some(user.id) != current)
            .collect())
    }

    pub fn profile_stats(&self, user_id: UserId) -> Result<ProfileStats, DomainError> {
        let user = self
            .users
            .find_by_id(user_id)?
            .ok_or_else(|| DomainError::NotFound(format!("user id: {user_id}")))?;
        let posts = self.posts.list_posts_by_author(user_id)?.len();

        Ok(ProfileStats {
            posts,
            followers: user.followers,
            following: user.following,
        })
    }

    fn require_session(&self) -> Result<UserId, DomainError> {
        self.current_user.ok_or(DomainError::NoSession)
    }
}
