use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::domain::ids::PostId;
use crate::domain::image::ImageBlob;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Profile,
    Search,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Profile, Tab::Search];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Profile => "Profile",
            Tab::Search => "Explore",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tab: {0}")]
pub struct UnknownTab(String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "feed" => Ok(Tab::Home),
            "profile" | "me" => Ok(Tab::Profile),
            "search" | "explore" => Ok(Tab::Search),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

/// Состояние экрана: вкладка, черновики и открытая картинка.
///
/// Живёт отдельно от [`FeedStore`](crate::application::feed_store::FeedStore)
/// и ничего не знает о пользователях и постах, кроме их id.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    tab: Tab,
    draft_text: String,
    draft_image: Option<ImageBlob>,
    comment_drafts: HashMap<PostId, String>,
    modal: Option<PostId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    pub fn draft_image(&self) -> Option<&ImageBlob> {
        self.draft_image.as_ref()
    }

    pub fn attach_image(&mut self, image: ImageBlob) {
        self.draft_image = Some(image);
    }

    pub fn remove_image(&mut self) {
        self.draft_image = None;
    }

    /// Кнопка публикации активна, если есть непустой текст или картинка.
    pub fn can_publish(&self) -> bool {
        !self.draft_text.trim().is_empty() || self.draft_image.is_some()
    }

    pub fn clear_post_draft(&mut self) {
        self.draft_text.clear();
        self.draft_image = None;
    }

    pub fn comment_draft(&self, post_id: PostId) -> &str {
        self.comment_drafts
            .get(&post_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set_comment_draft(&mut self, post_id: PostId, text: impl Into<String>) {
        self.comment_drafts.insert(post_id, text.into());
    }

    pub fn clear_comment_draft(&mut self, post_id: PostId) {
        self.comment_drafts.remove(&post_id);
    }

    pub fn can_comment(&self, post_id: PostId) -> bool {
        !self.comment_draft(post_id).trim().is_empty()
    }

    pub fn modal_target(&self) -> Option<PostId> {
        self.modal
    }

    pub fn open_modal(&mut self, post_id: PostId) {
        self.modal = Some(post_id);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}
