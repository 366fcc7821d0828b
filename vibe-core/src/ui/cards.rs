use serde::Serialize;

use crate::application::feed_store::{AuthorLabel, ProfileStats};
use crate::domain::age::RelativeAge;
use crate::domain::ids::{CommentId, PostId, UserId};
use crate::domain::image::ImageBlob;
use crate::domain::user::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentLine {
    pub id: CommentId,
    pub author: AuthorLabel,
    pub age: RelativeAge,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub id: PostId,
    pub author: AuthorLabel,
    pub age: RelativeAge,
    pub text: Option<String>,
    pub image: Option<ImageBlob>,
    pub like_count: usize,
    pub liked_by_me: bool,
    pub comment_count: usize,
    pub comments: Vec<CommentLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub user: User,
    pub stats: ProfileStats,
    pub posts: Vec<PostCard>,
}

/// Карточка во вкладке поиска. Кнопка "Follow" у неё ни на что не влияет.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCard {
    pub id: UserId,
    pub display_name: String,
    pub handle: String,
    pub initial: char,
    pub bio: Option<String>,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name.clone(),
            handle: user.handle.clone(),
            initial: user.initial(),
            bio: user.bio.clone(),
        }
    }
}
