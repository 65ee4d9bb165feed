//! Movie operations over a [`MovieDatabase`], annotating failures with the operation that hit them.

use crate::error::AppError;
use crate::model::{Movie, MoviePatch, NewMovie};
use crate::store::MovieDatabase;
use async_trait::async_trait;
use uuid::Uuid;

/// Operations the HTTP layer calls.
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn get_movie(&self, id: Uuid) -> Result<Movie, AppError>;
    async fn get_all_movies(&self) -> Result<Vec<Movie>, AppError>;
    /// Returns the id of the created movie.
    async fn create_movie(&self, movie: NewMovie) -> Result<String, AppError>;
    async fn update_movie(&self, id: Uuid, patch: MoviePatch) -> Result<(), AppError>;
    async fn delete_movie(&self, id: Uuid) -> Result<(), AppError>;
}

pub struct MovieCatalog<D> {
    db: D,
}

impl<D: MovieDatabase> MovieCatalog<D> {
    pub fn new(db: D) -> Self {
        MovieCatalog { db }
    }
}

#[async_trait]
impl<D: MovieDatabase> MovieService for MovieCatalog<D> {
    async fn get_movie(&self, id: Uuid) -> Result<Movie, AppError> {
        self.db
            .get(id)
            .await
            .map_err(AppError::service("error fetching by id"))
    }

    async fn get_all_movies(&self) -> Result<Vec<Movie>, AppError> {
        self.db
            .get_all()
            .await
            .map_err(AppError::service("error fetching movies"))
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<String, AppError> {
        self.db
            .insert(&movie)
            .await
            .map_err(AppError::service("error creating movie"))
    }

    async fn update_movie(&self, id: Uuid, patch: MoviePatch) -> Result<(), AppError> {
        self.db
            .update(id, &patch)
            .await
            .map_err(AppError::service("error updating movie"))
    }

    async fn delete_movie(&self, id: Uuid) -> Result<(), AppError> {
        self.db
            .delete(id)
            .await
            .map_err(AppError::service("error deleting movie"))
    }
}
