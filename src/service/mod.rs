//! Movie service: store delegation with error context, plus a logging decorator.

mod logging;
mod movie;
pub use logging::LoggingService;
pub use movie::{MovieCatalog, MovieService};
