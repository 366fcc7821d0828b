use chrono::{DateTime, Utc};

use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::ids::{PostId, UserId};
use crate::domain::image::ImageBlob;
use crate::domain::post::{LikeOutcome, Post};

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: UserId,
    pub text: Option<String>,
    pub image: Option<ImageBlob>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Хранилище ленты. `list_posts` возвращает посты от новых к старым
/// в порядке вставки, а не по сравнению меток времени.
///
/// Отсутствующий пост возвращается как `Ok(None)`, а не ошибка.
pub trait PostRepository: Send + Sync {
    fn create_post(&mut self, input: NewPost) -> Result<Post, DomainError>;
    fn get_post(&self, id: PostId) -> Result<Option<Post>, DomainError>;
    fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
    fn list_posts_by_author(&self, author_id: UserId) -> Result<Vec<Post>, DomainError>;
    fn toggle_like(
        &mut self,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<Option<LikeOutcome>, DomainError>;
    fn add_comment(
        &mut self,
        post_id: PostId,
        input: NewComment,
    ) -> Result<Option<Comment>, DomainError>;
    fn total_posts(&self) -> Result<usize, DomainError>;
}
