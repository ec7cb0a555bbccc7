pub mod config;
pub mod error;
pub mod forwarder;
pub mod gemini;
pub mod server;

pub use error::{Error, ForwardError, Result};
