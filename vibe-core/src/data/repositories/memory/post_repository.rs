use crate::data::post_repository::{NewComment, NewPost, PostRepository};
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::ids::{CommentId, IdSequence, PostId, UserId};
use crate::domain::post::{LikeOutcome, Post};

#[derive(Debug, Default, Clone)]
pub struct MemoryPostRepository {
    // newest first
    posts: Vec<Post>,
    post_ids: IdSequence,
    comment_ids: IdSequence,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id == id)
    }
}

impl PostRepository for MemoryPostRepository {
    fn create_post(&mut self, input: NewPost) -> Result<Post, DomainError> {
        let id = PostId(self.post_ids.next(input.created_at));
        let post = Post::new(
            id,
            input.author_id,
            input.text,
            input.image,
            input.created_at,
        );
        self.posts.insert(0, post.clone());
        Ok(post)
    }

    fn get_post(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.iter().find(|post| post.id == id).cloned())
    }

    fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.clone())
    }

    fn list_posts_by_author(&self, author_id: UserId) -> Result<Vec<Post>, DomainError> {
        Ok(self
            .posts
            .iter()
            .filter(|post| post.author_id == author_id)
            .cloned()
            .collect())
    }

    fn toggle_like(
        &mut self,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<Option<LikeOutcome>, DomainError> {
        Ok(self
            .find_mut(post_id)
            .map(|post| post.toggle_like(user_id)))
    }

    fn add_comment(
        &mut self,
        post_id: PostId,
        input: NewComment,
    ) -> Result<Option<Comment>, DomainError> {
        let Some(post) = self.posts.iter_mut().find(|post| post.id == post_id) else {
            return Ok(None);
        };

        let comment = Comment {
            id: CommentId(self.comment_ids.next(input.created_at)),
            author_id: input.author_id,
            text: input.text,
            created_at: input.created_at,
        };
        post.push_comment(comment.clone());
        Ok(Some(comment))
    }

    fn total_posts(&self) -> Result<usize, DomainError> {
        Ok(self.posts.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::MemoryPostRepository;
    use crate::data::post_repository::{NewComment, NewPost, PostRepository};
    use crate::domain::ids::{PostId, UserId};

    fn new_post(author: i64, text: &str) -> NewPost {
        NewPost {
            author_id: UserId(author),
            text: Some(text.to_string()),
            image: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_post_prepends_to_feed() {
        let mut repo = MemoryPostRepository::new();
        let p1 = repo.create_post(new_post(1, "first")).expect("p1");
        let p2 = repo.create_post(new_post(1, "second")).expect("p2");

        let feed = repo.list_posts().expect("list");
        assert_eq!(feed[0].id, p2.id);
        assert_eq!(feed[1].id, p1.id);
        assert_eq!(repo.total_posts().expect("total"), 2);
    }

    #[test]
    fn list_posts_by_author_filters_and_keeps_order() {
        let mut repo = MemoryPostRepository::new();
        repo.create_post(new_post(1, "a1")).expect("a1");
        repo.create_post(new_post(2, "b1")).expect("b1");
        repo.create_post(new_post(1, "a2")).expect("a2");

        let texts: Vec<_> = repo
            .list_posts_by_author(UserId(1))
            .expect("list")
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        assert_eq!(texts, ["a2", "a1"]);
    }

    #[test]
    fn toggle_like_on_missing_post_is_none() {
        let mut repo = MemoryPostRepository::new();
        let outcome = repo.toggle_like(PostId(9), UserId(1)).expect("toggle");
        assert!(outcome.is_none());
    }

    #[test]
    fn add_comment_appends_and_persists() {
        let mut repo = MemoryPostRepository::new();
        let post = repo.create_post(new_post(1, "post")).expect("post");

        for text in ["one", "two"] {
            let comment = repo
                .add_comment(
                    post.id,
                    NewComment {
                        author_id: UserId(2),
                        text: text.to_string(),
                        created_at: Utc::now(),
                    },
                )
                .expect("add_comment")
                .expect("post exists");
            assert_eq!(comment.text, text);
        }

        let stored = repo.get_post(post.id).expect("get").expect("exists");
        let texts: Vec<_> = stored.comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["one", "two"]);
        assert_ne!(stored.comments()[0].id, stored.comments()[1].id);
    }

    #[test]
    fn add_comment_on_missing_post_is_none() {
        let mut repo = MemoryPostRepository::new();
        let result = repo
            .add_comment(
                PostId(1),
                NewComment {
                    author_id: UserId(1),
                    text: "x".to_string(),
                    created_at: Utc::now(),
                },
            )
            .expect("add_comment");
        assert!(result.is_none());
    }
}
