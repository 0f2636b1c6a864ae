use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    PrimaryKeyTrait, SqlErr,
};

use postboard_core::error::RepoError;
use postboard_core::ports::BaseRepository;

/// Generic SQL repository implementation. Clones share one pool.
pub struct SqlBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> SqlBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) async fn count_rows(&self) -> Result<u64, RepoError>
    where
        E::Model: Sync,
    {
        E::find().count(self.db.as_ref()).await.map_err(map_db_err)
    }
}

impl<E> Clone for SqlBaseRepository<E>
where
    E: EntityTrait,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

/// Map a SeaORM error onto the repository taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            let lowered = err_str.to_lowercase();
            if lowered.contains("duplicate") || lowered.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl<E, T> BaseRepository<T, String> for SqlBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = String>,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: String) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: T) -> Result<(), RepoError> {
        let active_model: E::ActiveModel = entity.into();

        E::insert(active_model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
