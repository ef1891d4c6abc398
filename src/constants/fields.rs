//! Document field keys used in filters, updates and index definitions.

pub const FIELD_ID: &str = "_id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_AGE: &str = "age";
pub const FIELD_BLOG: &str = "blog";
pub const FIELD_LOCATION: &str = "location";
