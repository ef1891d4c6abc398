//! User repository for all MongoDB operations on the `users` collection.
//!
//! The repository owns the client, database and collection handles for its
//! whole lifetime. Every operation is a single request to the server; results
//! are translated into plain booleans, counts and lists.

use futures::TryStreamExt;
use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection, Database, IndexModel};

use crate::config::Config;
use crate::constants::{COLLECTION_USERS, DATABASE_BLOG, FIELD_ID, FIELD_NAME};
use crate::errors::{RepositoryError, Result};
use crate::models::{FieldValue, User};

/// Equality filter `{ field: value }`.
pub fn eq_filter(field_name: &str, field_value: impl Into<FieldValue>) -> Document {
    let mut filter = Document::new();
    filter.insert(field_name, Bson::from(field_value.into()));
    filter
}

/// Single-field update `{ "$set": { field: value } }`.
pub fn set_update(field_name: &str, field_value: impl Into<FieldValue>) -> Document {
    doc! { "$set": eq_filter(field_name, field_value) }
}

/// Repository for user-related database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    client: Client,
    database: Database,
    collection: Collection<User>,
}

impl UserRepository {
    /// Connect to `blog.users` at the given connection string.
    ///
    /// Only the URI is parsed here; the server is first contacted by the
    /// first operation (or [`check_connection`](Self::check_connection)).
    pub async fn new(connection_string: &str) -> Result<Self> {
        let client = Client::with_uri_str(connection_string).await?;
        Ok(Self::with_client(client, DATABASE_BLOG, COLLECTION_USERS))
    }

    /// Connect using the URI and names from a [`Config`].
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        Ok(Self::with_client(
            client,
            &config.database_name,
            &config.users_collection,
        ))
    }

    /// Build a repository over an existing client handle.
    pub fn with_client(client: Client, database_name: &str, collection_name: &str) -> Self {
        let database = client.database(database_name);
        let collection = database.collection(collection_name);
        Self {
            client,
            database,
            collection,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    /// Parse a hex string into a user id.
    pub fn parse_id(id: &str) -> Result<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
    }

    /// Check whether the database is reachable.
    ///
    /// Any failure (network, authentication, timeout) yields `false`; the
    /// error itself is only logged.
    pub async fn check_connection(&self) -> bool {
        match self.database.list_collection_names().await {
            Ok(_) => true,
            Err(err) => {
                warn!(
                    "Connection check failed for database {}: {}",
                    self.database.name(),
                    err
                );
                false
            }
        }
    }

    /// Return every document in the collection, in the server's natural order.
    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        debug!("Repository: Finding all users");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Return all users whose `field_name` equals `field_value`.
    pub async fn get_users_by_field(
        &self,
        field_name: &str,
        field_value: impl Into<FieldValue>,
    ) -> Result<Vec<User>> {
        let filter = eq_filter(field_name, field_value);
        debug!("Repository: Finding users with filter: {:?}", filter);
        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Return at most `count` users after skipping `starting_from`.
    ///
    /// No sort is applied, so pages are only stable while the collection is unchanged.
    pub async fn get_users(&self, starting_from: u64, count: u64) -> Result<Vec<User>> {
        // The driver reads a zero limit as "no limit".
        if count == 0 {
            return Ok(Vec::new());
        }

        debug!("Repository: Finding users, skip {} limit {}", starting_from, count);
        let limit = i64::try_from(count).unwrap_or(i64::MAX);
        let cursor = self
            .collection
            .find(doc! {})
            .skip(starting_from)
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Count the documents in the collection.
    pub async fn count_users(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    /// Insert one user. A server-assigned id is written back onto `user`.
    pub async fn insert_user(&self, user: &mut User) -> Result<()> {
        let result = self.collection.insert_one(&*user).await?;
        if user.id.is_none() {
            user.id = result.inserted_id.as_object_id();
        }
        debug!("Repository: Inserted user {:?}", result.inserted_id);
        Ok(())
    }

    /// Delete the user with the given id. Returns `false` when nothing matched.
    pub async fn delete_user_by_id(&self, id: ObjectId) -> Result<bool> {
        debug!("Repository: Deleting user by ID: {}", id);
        let result = self.collection.delete_one(doc! { FIELD_ID: id }).await?;
        Ok(result.deleted_count != 0)
    }

    /// Delete every user and return how many were removed.
    pub async fn delete_all_users(&self) -> Result<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        info!(
            "Deleted {} users from {}",
            result.deleted_count,
            self.collection.namespace()
        );
        Ok(result.deleted_count)
    }

    /// Set one field on the user with the given id.
    ///
    /// Returns `true` only when the document was actually modified: a missing
    /// id and a value equal to the stored one both report `false`.
    pub async fn update_user(
        &self,
        id: ObjectId,
        field_name: &str,
        field_value: impl Into<FieldValue>,
    ) -> Result<bool> {
        let update = set_update(field_name, field_value);
        debug!("Repository: Updating user {} with {:?}", id, update);
        let result = self
            .collection
            .update_one(doc! { FIELD_ID: id }, update)
            .await?;
        Ok(result.modified_count != 0)
    }

    /// Create an ascending index on `name`. Repeated calls are no-ops on the server.
    pub async fn create_index_on_name_field(&self) -> Result<()> {
        self.create_index_on_collection(&self.collection, FIELD_NAME).await
    }

    /// Create an ascending single-field index on any collection.
    ///
    /// Does not touch this repository's own handles; `collection` may live in
    /// any database reachable by the caller.
    pub async fn create_index_on_collection<T>(
        &self,
        collection: &Collection<T>,
        field_name: &str,
    ) -> Result<()>
    where
        T: Send + Sync,
    {
        let mut keys = Document::new();
        keys.insert(field_name, 1);
        let index = IndexModel::builder().keys(keys).build();

        let result = collection.create_index(index).await?;
        info!(
            "Index {} ready on {}",
            result.index_name,
            collection.namespace()
        );
        Ok(())
    }

    /// Release the client. Waits for in-flight operations to finish.
    pub async fn shutdown(self) {
        let Self {
            client,
            database,
            collection,
        } = self;
        drop(collection);
        drop(database);
        client.shutdown().await;
    }
}
