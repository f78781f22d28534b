use serde::{Deserialize, Serialize};

/// A user record as served by the remote endpoint.
///
/// Unknown fields in the response body are ignored; the record is replaced
/// wholesale on refetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let body = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {"name": "Romaguera-Crona"}
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.website, "hildegard.org");
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let body = r#"{"id": 1, "name": "Leanne Graham"}"#;
        assert!(serde_json::from_str::<User>(body).is_err());
    }
}
