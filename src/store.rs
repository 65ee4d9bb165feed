//! Data access for the movie table. Reads run on the pool; writes each run in their own transaction.

use crate::error::StoreError;
use crate::model::{Movie, MoviePatch, NewMovie};
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

/// Movie persistence operations.
#[async_trait]
pub trait MovieDatabase: Send + Sync {
    /// Fetch exactly one movie by id.
    async fn get(&self, id: Uuid) -> Result<Movie, StoreError>;
    /// Fetch every movie. An empty table yields an empty vec.
    async fn get_all(&self) -> Result<Vec<Movie>, StoreError>;
    /// Insert a movie and return the generated id as a string.
    async fn insert(&self, movie: &NewMovie) -> Result<String, StoreError>;
    /// Set the supplied columns of an existing movie.
    async fn update(&self, id: Uuid, patch: &MoviePatch) -> Result<(), StoreError>;
    /// Remove a movie.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// PostgreSQL-backed [`MovieDatabase`].
#[derive(Clone)]
pub struct PgMovieDatabase {
    pool: PgPool,
}

impl PgMovieDatabase {
    pub fn new(pool: PgPool) -> Self {
        PgMovieDatabase { pool }
    }
}

#[async_trait]
impl MovieDatabase for PgMovieDatabase {
    async fn get(&self, id: Uuid) -> Result<Movie, StoreError> {
        let q = sql::select_by_id(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = q.query().fetch_all(&self.pool).await?;
        let row = exactly_one(rows)?;
        Ok(Movie::from_row(&row)?)
    }

    async fn get_all(&self) -> Result<Vec<Movie>, StoreError> {
        let q = sql::select_all();
        tracing::debug!(sql = %q.sql, "query");
        let rows = q.query().fetch_all(&self.pool).await?;
        let movies = rows.iter().map(Movie::from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(movies)
    }

    async fn insert(&self, movie: &NewMovie) -> Result<String, StoreError> {
        let q = sql::insert(movie);
        let mut tx = self.pool.begin().await?;
        let result = insert_returning_id(&mut tx, &q).await;
        finish(tx, result).await.map(|id| id.to_string())
    }

    async fn update(&self, id: Uuid, patch: &MoviePatch) -> Result<(), StoreError> {
        let q = sql::update(id, patch)?;
        let mut tx = self.pool.begin().await?;
        let result = execute_one(&mut tx, &q).await;
        finish(tx, result).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let q = sql::delete(id);
        let mut tx = self.pool.begin().await?;
        let result = execute_one(&mut tx, &q).await;
        finish(tx, result).await
    }
}

async fn insert_returning_id(tx: &mut Transaction<'_, Postgres>, q: &QueryBuf) -> Result<Uuid, StoreError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
    let rows = q.query().fetch_all(&mut **tx).await?;
    let row = exactly_one(rows)?;
    Ok(row.try_get::<Uuid, _>("id")?)
}

/// Execute a statement that must touch at least one row.
async fn execute_one(tx: &mut Transaction<'_, Postgres>, q: &QueryBuf) -> Result<(), StoreError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
    let done = q.query().execute(&mut **tx).await?;
    if done.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

/// Commit on success, roll back on failure. A failed rollback is logged and the original error returned.
async fn finish<T>(tx: Transaction<'_, Postgres>, result: Result<T, StoreError>) -> Result<T, StoreError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, cause = %e, "rollback failed");
            }
            Err(e)
        }
    }
}

fn exactly_one<T>(mut rows: Vec<T>) -> Result<T, StoreError> {
    match rows.len() {
        0 => Err(StoreError::NotFound),
        1 => Ok(rows.remove(0)),
        n => Err(StoreError::TooManyRows(n)),
    }
}
