//! Core building blocks: error types and logging initialization.

pub mod error;
pub mod logger;

pub use error::{BackendError, Result};
pub use logger::init_tracing;
