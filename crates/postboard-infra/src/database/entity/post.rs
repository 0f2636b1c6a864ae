//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub likes: i32,
    pub comments: i32,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for postboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            content: model.content,
            likes: u32::try_from(model.likes).unwrap_or_default(),
            comments: u32::try_from(model.comments).unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// `created_at` is left unset so the store assigns it.
impl From<postboard_core::domain::Post> for ActiveModel {
    fn from(post: postboard_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            name: Set(post.name),
            content: Set(post.content),
            likes: Set(i32::try_from(post.likes).unwrap_or(i32::MAX)),
            comments: Set(i32::try_from(post.comments).unwrap_or(i32::MAX)),
            created_at: NotSet,
        }
    }
}
