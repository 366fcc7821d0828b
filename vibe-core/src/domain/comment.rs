use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::ids::{CommentId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

impl CreateCommentRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.text.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "comment",
                message: "must not be empty",
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
