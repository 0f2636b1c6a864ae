//! Form bodies posted by the server-rendered pages.

use serde::{Deserialize, Serialize};

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{field} must be a non-negative whole number")]
    InvalidCounter { field: &'static str },
}

/// POST /posts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    pub likes: Option<String>,
    pub comments: Option<String>,
}

impl NewPostForm {
    /// `(likes, comments)`, with missing or blank fields read as 0.
    pub fn counters(&self) -> Result<(u32, u32), FormError> {
        Ok((
            parse_counter("likes", self.likes.as_deref())?,
            parse_counter("comments", self.comments.as_deref())?,
        ))
    }
}

fn parse_counter(field: &'static str, raw: Option<&str>) -> Result<u32, FormError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value
            .parse()
            .map_err(|_| FormError::InvalidCounter { field }),
    }
}

/// PATCH /posts/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContentForm {
    #[serde(default)]
    pub content: String,
}

/// POST /users/add
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUserForm {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// PATCH /users/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameUserForm {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub password: String,
}

/// DELETE /users/{id}/delete
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteUserForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `?_method=` query parameter carried by HTML forms that mean PATCH or DELETE.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodOverride {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}
