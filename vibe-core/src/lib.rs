//! Модель данных и правила изменения для SocialVibe.
//!
//! Всё состояние хранится в памяти процесса:
//! - `domain`: пользователи, посты, комментарии, картинки, "давность";
//! - `data`: трейты репозиториев и реализации в памяти;
//! - `application`: [`FeedStore`], операции над лентой;
//! - `ui`: состояние экрана и [`Session`], которой пользуются фронтенды.

pub mod application;
pub mod data;
pub mod domain;
pub mod ui;

pub use application::clock::{Clock, ManualClock, SystemClock};
pub use application::feed_store::{AuthorLabel, FeedStore, MemoryFeedStore, ProfileStats};
pub use domain::age::{RelativeAge, relative_age};
pub use domain::comment::{Comment, CreateCommentRequest};
pub use domain::error::DomainError;
pub use domain::ids::{CommentId, PostId, UserId};
pub use domain::image::{DEFAULT_MAX_IMAGE_BYTES, ImageBlob, ImageError};
pub use domain::post::{CreatePostRequest, LikeOutcome, Post};
pub use domain::user::{NewUserRequest, User};
pub use ui::cards::{CommentLine, PostCard, ProfileView, UserCard};
pub use ui::session::{MemorySession, Session};
pub use ui::state::{Tab, ViewState};
