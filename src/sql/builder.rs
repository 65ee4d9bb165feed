//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the movie table.

use crate::error::StoreError;
use crate::model::{MoviePatch, NewMovie};
use crate::sql::params::BindValue;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use uuid::Uuid;

const MOVIE_COLUMNS: &str = "id, name, release_year, rating, coalesce(genres, '{}') as genres, director";

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a value and return its 1-based placeholder index.
    fn push_param(&mut self, v: impl Into<BindValue>) -> usize {
        self.params.push(v.into());
        self.params.len()
    }

    /// sqlx query with every param bound in order.
    pub fn query(&self) -> Query<'_, Postgres, PgArguments> {
        self.params
            .iter()
            .fold(sqlx::query::<Postgres>(&self.sql), |query, p| p.bind_to(query))
    }
}

/// SELECT one movie by id.
pub fn select_by_id(id: Uuid) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("select {} from movie where id = ${}", MOVIE_COLUMNS, n);
    q
}

/// SELECT every movie, ordered by id.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("select {} from movie order by id", MOVIE_COLUMNS);
    q
}

/// INSERT all mutable columns; the store generates the id and returns it.
pub fn insert(movie: &NewMovie) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders = [
        q.push_param(movie.name.as_str()),
        q.push_param(movie.release_year),
        q.push_param(movie.rating.clone()),
        q.push_param(movie.genres.clone()),
        q.push_param(movie.director.as_str()),
    ]
    .iter()
    .map(|n| format!("${}", n))
    .collect::<Vec<_>>()
    .join(", ");
    q.sql = format!(
        "insert into movie(name, release_year, rating, genres, director) values ({}) returning id",
        placeholders
    );
    q
}

/// UPDATE by id: SET only the columns the patch supplies, in column order, id bound last.
/// An empty patch is rejected instead of producing `set where`.
pub fn update(id: Uuid, patch: &MoviePatch) -> Result<QueryBuf, StoreError> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(name) = &patch.name {
        let n = q.push_param(name.as_str());
        sets.push(format!("name = ${}", n));
    }
    if let Some(year) = patch.release_year {
        let n = q.push_param(year);
        sets.push(format!("release_year = ${}", n));
    }
    if let Some(rating) = &patch.rating {
        let n = q.push_param(rating.clone());
        sets.push(format!("rating = ${}", n));
    }
    if let Some(genres) = &patch.genres {
        let n = q.push_param(genres.clone());
        sets.push(format!("genres = ${}", n));
    }
    if let Some(director) = &patch.director {
        let n = q.push_param(director.as_str());
        sets.push(format!("director = ${}", n));
    }
    if sets.is_empty() {
        return Err(StoreError::NoFieldsToUpdate);
    }
    let id_param = q.push_param(id);
    q.sql = format!("update movie set {} where id = ${}", sets.join(", "), id_param);
    Ok(q)
}

/// DELETE by id.
pub fn delete(id: Uuid) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("delete from movie where id = ${}", n);
    q
}
