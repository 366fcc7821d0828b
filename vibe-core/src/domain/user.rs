use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::ids::UserId;

pub const DEFAULT_AVATAR: &str = "👤";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub handle: String,
    pub display_name: String,
    pub bio: String,
}

impl NewUserRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        let handle = normalize_required("handle", &self.handle)?;
        let display_name = normalize_required("display_name", &self.display_name)?;
        Ok(Self {
            handle,
            display_name,
            bio: self.bio.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub handle: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: UserId,
        handle: impl Into<String>,
        display_name: impl Into<String>,
        bio: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let handle = normalize_required("handle", &handle.into())?;
        let display_name = normalize_required("display_name", &display_name.into())?;
        let bio = bio
            .map(|bio| bio.trim().to_string())
            .filter(|bio| !bio.is_empty());

        Ok(Self {
            id,
            handle,
            display_name,
            bio,
            followers: 0,
            following: 0,
            avatar: DEFAULT_AVATAR.to_string(),
            created_at,
        })
    }

    /// Первая буква отображаемого имени в верхнем регистре.
    pub fn initial(&self) -> char {
        initial_of(&self.display_name)
    }
}

pub(crate) fn initial_of(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

fn normalize_required(field: &'static str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation {
            field,
            message: "must not be empty",
        });
    }
    Ok(value.to_string())
}
