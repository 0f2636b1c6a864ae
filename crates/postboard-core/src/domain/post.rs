use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a short status update with engagement counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub name: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    /// Assigned by the store on insert; `None` until the row is persisted.
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub name: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
}

impl NewPost {
    /// Validate creation input. Name and content must be non-empty.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        likes: u32,
        comments: u32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let content = content.into();

        if name.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Name and content are required".to_string(),
            ));
        }

        Ok(Self {
            name,
            content,
            likes,
            comments,
        })
    }

    /// Attach an identifier, producing a post ready to insert.
    pub fn into_post(self, id: String) -> Post {
        Post {
            id,
            name: self.name,
            content: self.content,
            likes: self.likes,
            comments: self.comments,
            created_at: None,
        }
    }
}

/// Validate replacement content for the "set content" operation.
pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.is_empty() {
        return Err(DomainError::Validation("Content is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_requires_name_and_content() {
        assert!(NewPost::new("", "body", 0, 0).is_err());
        assert!(NewPost::new("Ann", "", 0, 0).is_err());

        let post = NewPost::new("Ann", "body", 3, 1)
            .unwrap()
            .into_post("id-1".to_string());
        assert_eq!(post.id, "id-1");
        assert_eq!(post.likes, 3);
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_validate_content() {
        assert!(validate_content("").is_err());
        assert!(validate_content("updated").is_ok());
    }
}
