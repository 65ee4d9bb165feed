//! Movie API: CRUD REST service for movies backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Movie, MoviePatch, NewMovie};
pub use routes::{common_routes, common_routes_with_ready, movie_routes, BODY_LIMIT};
pub use service::{LoggingService, MovieCatalog, MovieService};
pub use state::AppState;
pub use store::{MovieDatabase, PgMovieDatabase};
