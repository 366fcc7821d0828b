pub mod clock;
pub mod feed_store;
