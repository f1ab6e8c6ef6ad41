pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod preprocessor;
pub mod server;
pub mod store;

pub use error::{Error, Result};
