use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User document stored in the `users` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i32,
    pub blog: String,
    pub location: String,
}

impl User {
    /// Build a user that has not been stored yet; the server assigns its id on insert.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        blog: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            blog: blog.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|id| id.to_hex()).unwrap_or_else(|| "unsaved".to_string());
        write!(
            f,
            "{} ({}), age {}, blog {}, location {}",
            self.name, id, self.age, self.blog, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_unsaved_user_omits_id() {
        let user = User::new("Nikola", 30, "rubikscode.net", "Beograd");
        let document = to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("name").unwrap(), "Nikola");
        assert_eq!(document.get_i32("age").unwrap(), 30);
        assert_eq!(document.get_str("blog").unwrap(), "rubikscode.net");
        assert_eq!(document.get_str("location").unwrap(), "Beograd");
    }

    #[test]
    fn test_stored_document_maps_id() {
        let id = ObjectId::new();
        let user: User = from_document(doc! {
            "_id": id,
            "name": "Vanja",
            "age": 27,
            "blog": "eventroom.net",
            "location": "Beograd",
        })
        .unwrap();

        assert_eq!(user.id, Some(id));
        assert_eq!(user.name, "Vanja");
        assert_eq!(user.age, 27);
    }

    #[test]
    fn test_display_marks_unsaved() {
        let user = User::new("Simona", 0, "babystuff.com", "Beograd");
        assert_eq!(
            user.to_string(),
            "Simona (unsaved), age 0, blog babystuff.com, location Beograd"
        );
    }
}
