mod post_repository;
mod user_repository;

pub use post_repository::MemoryPostRepository;
pub use user_repository::MemoryUserRepository;
