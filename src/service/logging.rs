//! Logging decorator: records each call's arguments, result, elapsed time and error, and returns the delegate's result untouched.

use crate::error::AppError;
use crate::model::{Movie, MoviePatch, NewMovie};
use crate::service::MovieService;
use async_trait::async_trait;
use std::time::Instant;
use uuid::Uuid;

pub struct LoggingService<S> {
    next: S,
}

impl<S: MovieService> LoggingService<S> {
    pub fn new(next: S) -> Self {
        LoggingService { next }
    }
}

#[async_trait]
impl<S: MovieService> MovieService for LoggingService<S> {
    async fn get_movie(&self, id: Uuid) -> Result<Movie, AppError> {
        let start = Instant::now();
        let result = self.next.get_movie(id).await;
        match &result {
            Ok(movie) => tracing::info!(op = "get_movie", %id, ?movie, elapsed = ?start.elapsed(), "ok"),
            Err(e) => tracing::warn!(op = "get_movie", %id, error = %e, elapsed = ?start.elapsed(), "failed"),
        }
        result
    }

    async fn get_all_movies(&self) -> Result<Vec<Movie>, AppError> {
        let start = Instant::now();
        let result = self.next.get_all_movies().await;
        match &result {
            Ok(movies) => {
                tracing::info!(op = "get_all_movies", count = movies.len(), elapsed = ?start.elapsed(), "ok");
                for movie in movies {
                    tracing::debug!(op = "get_all_movies", ?movie);
                }
            }
            Err(e) => tracing::warn!(op = "get_all_movies", error = %e, elapsed = ?start.elapsed(), "failed"),
        }
        result
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<String, AppError> {
        let start = Instant::now();
        let args = format!("{:?}", movie);
        let result = self.next.create_movie(movie).await;
        match &result {
            Ok(id) => tracing::info!(op = "create_movie", movie = %args, %id, elapsed = ?start.elapsed(), "ok"),
            Err(e) => tracing::warn!(op = "create_movie", movie = %args, error = %e, elapsed = ?start.elapsed(), "failed"),
        }
        result
    }

    async fn update_movie(&self, id: Uuid, patch: MoviePatch) -> Result<(), AppError> {
        let start = Instant::now();
        let args = format!("{:?}", patch);
        let result = self.next.update_movie(id, patch).await;
        match &result {
            Ok(()) => tracing::info!(op = "update_movie", %id, patch = %args, elapsed = ?start.elapsed(), "ok"),
            Err(e) => {
                tracing::warn!(op = "update_movie", %id, patch = %args, error = %e, elapsed = ?start.elapsed(), "failed")
            }
        }
        result
    }

    async fn delete_movie(&self, id: Uuid) -> Result<(), AppError> {
        let start = Instant::now();
        let result = self.next.delete_movie(id).await;
        match &result {
            Ok(()) => tracing::info!(op = "delete_movie", %id, elapsed = ?start.elapsed(), "ok"),
            Err(e) => tracing::warn!(op = "delete_movie", %id, error = %e, elapsed = ?start.elapsed(), "failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use bigdecimal::BigDecimal;

    struct Fixed {
        movie: Movie,
    }

    #[async_trait]
    impl MovieService for Fixed {
        async fn get_movie(&self, _id: Uuid) -> Result<Movie, AppError> {
            Ok(self.movie.clone())
        }
        async fn get_all_movies(&self) -> Result<Vec<Movie>, AppError> {
            Ok(vec![self.movie.clone()])
        }
        async fn create_movie(&self, _movie: NewMovie) -> Result<String, AppError> {
            Ok(self.movie.id.to_string())
        }
        async fn update_movie(&self, _id: Uuid, _patch: MoviePatch) -> Result<(), AppError> {
            Err(AppError::service("error updating movie")(StoreError::NotFound))
        }
        async fn delete_movie(&self, _id: Uuid) -> Result<(), AppError> {
            Ok(())
        }
    }

    fn movie() -> Movie {
        Movie {
            id: Uuid::new_v4(),
            name: "test".into(),
            release_year: 2024,
            rating: BigDecimal::from(10),
            genres: vec!["test".into()],
            director: "someone".into(),
        }
    }

    #[tokio::test]
    async fn results_pass_through_unchanged() {
        let m = movie();
        let svc = LoggingService::new(Fixed { movie: m.clone() });

        assert_eq!(svc.get_movie(m.id).await.unwrap(), m);
        assert_eq!(svc.get_all_movies().await.unwrap(), vec![m.clone()]);
        assert_eq!(svc.create_movie(NewMovie::default()).await.unwrap(), m.id.to_string());
        svc.delete_movie(m.id).await.unwrap();

        let err = svc.update_movie(m.id, MoviePatch::default()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Service {
                source: StoreError::NotFound,
                ..
            }
        ));
    }
}
