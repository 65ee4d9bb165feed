//! Router assembly.

mod common;
mod movie;
pub use common::{common_routes, common_routes_with_ready};
pub use movie::{movie_routes, BODY_LIMIT};
