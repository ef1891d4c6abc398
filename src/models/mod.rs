//! Data models organized by type.

pub mod field_value;
pub mod user;

pub use field_value::*;
pub use user::*;
