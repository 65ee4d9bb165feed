//! Movie API server: loads settings, connects the pool, mounts common and movie routes.

use movie_api::{
    common_routes_with_ready, movie_routes, AppState, LoggingService, MovieCatalog, PgMovieDatabase, Settings,
};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("movie_api=info,tower_http=info")),
        )
        .init();

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await?;

    let db = PgMovieDatabase::new(pool.clone());
    let state = AppState::new(LoggingService::new(MovieCatalog::new(db)));

    let app = Router::new()
        .merge(common_routes_with_ready(pool))
        .merge(movie_routes(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
