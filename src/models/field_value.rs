//! Typed values for equality filters and field updates.
//!
//! Filtering a numeric field with a string never matches in MongoDB, so the
//! repository accepts a `FieldValue` instead of a bare string. Conversions
//! from the common Rust types keep call sites short: `get_users_by_field("age", 27)`.

use mongodb::bson::{oid::ObjectId, Bson};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Bool(bool),
    ObjectId(ObjectId),
    Null,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int64(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<ObjectId> for FieldValue {
    fn from(value: ObjectId) -> Self {
        FieldValue::ObjectId(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

impl From<FieldValue> for Bson {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) => Bson::String(s),
            FieldValue::Int32(i) => Bson::Int32(i),
            FieldValue::Int64(i) => Bson::Int64(i),
            FieldValue::Double(d) => Bson::Double(d),
            FieldValue::Bool(b) => Bson::Boolean(b),
            FieldValue::ObjectId(id) => Bson::ObjectId(id),
            FieldValue::Null => Bson::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_stay_strings() {
        assert_eq!(Bson::from(FieldValue::from("Nikola")), Bson::String("Nikola".into()));
        assert_eq!(
            Bson::from(FieldValue::from("27".to_string())),
            Bson::String("27".into())
        );
    }

    #[test]
    fn test_numbers_keep_their_width() {
        assert_eq!(Bson::from(FieldValue::from(27)), Bson::Int32(27));
        assert_eq!(Bson::from(FieldValue::from(27_i64)), Bson::Int64(27));
        assert_eq!(Bson::from(FieldValue::from(1.5)), Bson::Double(1.5));
    }

    #[test]
    fn test_object_id_and_null() {
        let id = ObjectId::new();
        assert_eq!(Bson::from(FieldValue::from(id)), Bson::ObjectId(id));
        assert_eq!(Bson::from(FieldValue::from(None::<&str>)), Bson::Null);
        assert_eq!(FieldValue::from(Some(true)), FieldValue::Bool(true));
    }
}
