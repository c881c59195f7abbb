pub mod config;
pub mod error;

pub use config::AtlasConfig;
pub use error::{AtlasError, Result, SharedError};
