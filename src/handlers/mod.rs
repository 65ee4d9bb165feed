//! HTTP handlers for movie CRUD.

pub mod movie;
pub use movie::*;
