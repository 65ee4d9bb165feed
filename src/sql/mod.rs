//! SQL for the movie table: fixed statements plus the dynamic partial update. Values always go as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
