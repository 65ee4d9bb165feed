//! Shared application state for the movie routes.

use crate::service::MovieService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieService>,
}

impl AppState {
    pub fn new(movies: impl MovieService + 'static) -> Self {
        AppState {
            movies: Arc::new(movies),
        }
    }
}
