pub mod analysis;
pub mod document;
pub mod health;
