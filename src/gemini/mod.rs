mod backend;
mod core;

pub use self::core::*;
pub use backend::GeminiBackend;
