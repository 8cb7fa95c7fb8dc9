pub mod document;
pub mod health;

pub use document::*;
pub use health::*;
