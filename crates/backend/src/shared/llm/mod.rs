pub mod gemini_provider;
pub mod prompt;
pub mod types;

pub use types::*;
