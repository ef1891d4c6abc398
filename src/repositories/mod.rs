//! Repository layer for database operations.
//!
//! Keeps all collection access behind one type so hosts never touch the
//! driver directly.

pub mod user_repository;

pub use user_repository::UserRepository;
