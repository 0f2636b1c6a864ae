//! SQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use postboard_core::domain::{Post, User};
use postboard_core::error::RepoError;
use postboard_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sql_base::{SqlBaseRepository, map_db_err};

/// SQL user repository.
pub type SqlUserRepository = SqlBaseRepository<UserEntity>;

/// SQL post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_content(&self, id: String, content: String) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Content, Expr::value(content))
            .filter(post::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.count_rows().await
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<(), RepoError> {
        if posts.is_empty() {
            return Ok(());
        }

        let rows = posts.len();
        let models: Vec<post::ActiveModel> = posts.into_iter().map(Into::into).collect();

        // One multi-row INSERT: the store applies all rows or none.
        PostEntity::insert_many(models)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        tracing::debug!(rows, "Inserted post batch");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::UserName)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn rename(&self, id: String, user_name: String) -> Result<(), RepoError> {
        tracing::debug!(user_id = %id, "Renaming user");

        let result = UserEntity::update_many()
            .col_expr(user::Column::UserName, Expr::value(user_name))
            .filter(user::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.count_rows().await
    }
}
