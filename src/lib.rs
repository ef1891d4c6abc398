//! Data-access layer over the MongoDB `blog.users` collection.
//!
//! The [`UserRepository`] owns the driver handles and exposes the read, write,
//! update, delete and index operations; everything else in the crate supports it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod repositories;

pub use errors::{RepositoryError, Result};
pub use models::{FieldValue, User};
pub use repositories::UserRepository;
