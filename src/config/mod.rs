use std::env;

use lazy_static::lazy_static;

use crate::constants::{COLLECTION_USERS, DATABASE_BLOG};

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";

/// Connection settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub users_collection: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: DATABASE_BLOG.to_string(),
            users_collection: COLLECTION_USERS.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            mongodb_uri: lookup("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database_name: lookup("DATABASE_NAME").unwrap_or(defaults.database_name),
            users_collection: lookup("USERS_COLLECTION").unwrap_or(defaults.users_collection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_point_at_blog_users() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.mongodb_uri, "mongodb://127.0.0.1:27017");
        assert_eq!(config.database_name, "blog");
        assert_eq!(config.users_collection, "users");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("MONGODB_URI", "mongodb://db.internal:27018"),
            ("USERS_COLLECTION", "users_staging"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.mongodb_uri, "mongodb://db.internal:27018");
        assert_eq!(config.database_name, "blog");
        assert_eq!(config.users_collection, "users_staging");
    }
}
