//! Application constants module.
//!
//! Centralizes the database and collection names and the document field keys
//! that the repository targets directly.

pub mod collections;
pub mod fields;

pub use collections::*;
pub use fields::*;
