//! Binds rendered arguments as `tokio-postgres` parameters.

pub mod array;
pub mod params;
