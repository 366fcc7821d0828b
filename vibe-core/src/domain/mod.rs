pub mod age;
pub mod comment;
pub mod error;
pub mod ids;
pub mod image;
pub mod post;
pub mod user;
