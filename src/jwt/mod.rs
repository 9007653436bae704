pub mod error;
pub mod payload;
