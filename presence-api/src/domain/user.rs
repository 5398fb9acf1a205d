use serde::{Deserialize, Deserializer, Serialize};

/// A user available in the dashboard selector.
///
/// The plain listing carries numeric ids; the XML-backed roster serializes
/// the same ids as strings and adds an avatar URL. Both shapes decode into
/// this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(deserialize_with = "user_id_from_number_or_string")]
    pub user_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Avatar lookup result from `get_avatar/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Avatar {
    pub user_id: i64,
    pub avatar: String,
}

fn user_id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(i64),
        Str(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => Ok(n),
        IdRepr::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_plain_listing_entry() {
        let user: UserRef = serde_json::from_value(json!({
            "user_id": 141,
            "name": "User 141",
        }))
        .unwrap();
        assert_eq!(user.user_id, 141);
        assert_eq!(user.name, "User 141");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn decodes_roster_entry_with_string_id_and_avatar() {
        let user: UserRef = serde_json::from_value(json!({
            "user_id": "176",
            "name": "Adrian K.",
            "avatar": "https://intranet.example.com/api/images/users/176",
        }))
        .unwrap();
        assert_eq!(user.user_id, 176);
        assert_eq!(
            user.avatar.as_deref(),
            Some("https://intranet.example.com/api/images/users/176")
        );
    }

    #[test]
    fn rejects_non_numeric_string_id() {
        let result: Result<UserRef, _> = serde_json::from_value(json!({
            "user_id": "abc",
            "name": "Broken",
        }));
        assert!(result.is_err());
    }
}
