pub(crate) mod composer;
pub(crate) mod explore_panel;
pub(crate) mod feed_panel;
pub(crate) mod header;
pub(crate) mod image_modal;
pub(crate) mod login_panel;
pub(crate) mod post_card;
pub(crate) mod profile_panel;
