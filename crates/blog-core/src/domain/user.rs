use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as supplied by the client.
///
/// Only a few fields are named; anything else the client sends is kept in
/// `extra` and stored alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: UserFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_preserved() {
        let fields: UserFields = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","lastSignInTime":"yesterday"}"#,
        )
        .unwrap();

        assert_eq!(fields.name.as_deref(), Some("Ada"));
        assert_eq!(fields.extra["lastSignInTime"], "yesterday");

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["lastSignInTime"], "yesterday");
        assert_eq!(json["email"], "ada@example.com");
    }
}
