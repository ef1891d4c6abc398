//! MongoDB database and collection names.

/// Database holding the user documents.
pub const DATABASE_BLOG: &str = "blog";

pub const COLLECTION_USERS: &str = "users";
