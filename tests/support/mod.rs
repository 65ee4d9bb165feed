//! In-memory `MovieDatabase` and request helpers shared by the API tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use movie_api::{movie_routes, AppState, Movie, MovieCatalog, MovieDatabase, MoviePatch, NewMovie, StoreError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    rows: Mutex<BTreeMap<Uuid, Movie>>,
    calls: AtomicUsize,
}

/// Map-backed store. Clones share rows, so a test can inspect what the router wrote.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    inner: Arc<Inner>,
}

impl InMemoryDatabase {
    /// Number of store operations invoked so far.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.rows.lock().unwrap().len()
    }

    fn touch(&self) {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MovieDatabase for InMemoryDatabase {
    async fn get(&self, id: Uuid) -> Result<Movie, StoreError> {
        self.touch();
        self.inner.rows.lock().unwrap().get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Movie>, StoreError> {
        self.touch();
        Ok(self.inner.rows.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, movie: &NewMovie) -> Result<String, StoreError> {
        self.touch();
        let id = Uuid::new_v4();
        self.inner
            .rows
            .lock()
            .unwrap()
            .insert(id, Movie::from_new(id, movie.clone()));
        Ok(id.to_string())
    }

    async fn update(&self, id: Uuid, patch: &MoviePatch) -> Result<(), StoreError> {
        movie_api::sql::update(id, patch)?;
        self.touch();
        let mut rows = self.inner.rows.lock().unwrap();
        let movie = rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        movie.apply(patch);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.touch();
        self.inner
            .rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

pub fn app(db: &InMemoryDatabase) -> Router {
    movie_routes(AppState::new(MovieCatalog::new(db.clone())))
}

/// Send one request; returns status and the JSON body (`Null` when empty).
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub const TEST_MOVIE: &str = r#"{
    "name": "test",
    "release_year": 2024,
    "rating": "10",
    "genres": ["test"],
    "director": "someone"
}"#;
