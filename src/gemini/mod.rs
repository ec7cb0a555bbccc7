mod client;
mod types;

pub use client::{GeminiClient, GenerativeClient, MODEL_ID};
pub use types::*;
