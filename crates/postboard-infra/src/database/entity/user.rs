//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for postboard_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name,
            email: model.email,
            password_hash: model.password_hash,
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<postboard_core::domain::User> for ActiveModel {
    fn from(user: postboard_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            user_name: Set(user.user_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
        }
    }
}
