use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::comment::Comment;
use super::error::DomainError;
use super::ids::{PostId, UserId};
use super::image::ImageBlob;

#[derive(Debug, Clone, Default)]
pub struct CreatePostRequest {
    pub text: String,
    pub image: Option<ImageBlob>,
}

impl CreatePostRequest {
    /// Пустой после `trim` текст считается отсутствующим, непустой
    /// сохраняется как есть.
    pub fn validate(self) -> Result<Self, DomainError> {
        let blank = self.text.trim().is_empty();
        if blank && self.image.is_none() {
            return Err(DomainError::Validation {
                field: "post",
                message: "text or image is required",
            });
        }
        Ok(Self {
            text: if blank { String::new() } else { self.text },
            image: self.image,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeOutcome {
    pub liked: bool,
    pub like_count: usize,
}

/// Пост в ленте.
///
/// Счётчик лайков не хранится отдельно: он всегда равен размеру множества
/// лайкнувших, поэтому разойтись они не могут. Создаётся только через
/// `new` после проверки `CreatePostRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub text: Option<String>,
    pub image: Option<ImageBlob>,
    pub created_at: DateTime<Utc>,
    liked_by: BTreeSet<UserId>,
    comments: Vec<Comment>,
}

impl Post {
    pub fn new(
        id: PostId,
        author_id: UserId,
        text: Option<String>,
        image: Option<ImageBlob>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            text,
            image,
            created_at,
            liked_by: BTreeSet::new(),
            comments: Vec::new(),
        }
    }

    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    pub fn liked_by(&self) -> &BTreeSet<UserId> {
        &self.liked_by
    }

    pub fn is_liked_by(&self, user_id: UserId) -> bool {
        self.liked_by.contains(&user_id)
    }

    pub fn toggle_like(&mut self, user_id: UserId) -> LikeOutcome {
        let liked = if self.liked_by.remove(&user_id) {
            false
        } else {
            self.liked_by.insert(user_id);
            true
        };
        LikeOutcome {
            liked,
            like_count: self.like_count(),
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
