mod core;
mod models;
pub mod render;

pub use self::core::*;
pub use models::*;
