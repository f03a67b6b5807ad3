//! User DTO and view-model

use serde::{Deserialize, Serialize};

/// Raw user record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub email_verified: bool,
}

/// User view-model consumed by screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub firstname: String,
    pub lastname: String,
    pub is_email_verified: bool,
}

impl User {
    /// Map the wire record into the view-model
    ///
    /// The only shape change is the `emailVerified` field, exposed as
    /// `is_email_verified`; everything else is copied verbatim.
    pub fn from_dto(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            roles: dto.roles,
            firstname: dto.firstname,
            lastname: dto.lastname,
            is_email_verified: dto.email_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> UserDto {
        UserDto {
            id: 7,
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            roles: vec!["ROLE_USER".to_string()],
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email_verified: true,
        }
    }

    #[test]
    fn test_from_dto_renames_email_verified() {
        let user = User::from_dto(sample_dto());
        assert!(user.is_email_verified);

        let mut dto = sample_dto();
        dto.email_verified = false;
        assert!(!User::from_dto(dto).is_email_verified);
    }

    #[test]
    fn test_from_dto_copies_fields_verbatim() {
        let dto = sample_dto();
        let user = User::from_dto(dto.clone());
        assert_eq!(user.id, dto.id);
        assert_eq!(user.username, dto.username);
        assert_eq!(user.email, dto.email);
        assert_eq!(user.roles, dto.roles);
        assert_eq!(user.firstname, dto.firstname);
        assert_eq!(user.lastname, dto.lastname);
    }

    #[test]
    fn test_dto_parses_camel_case_wire_format() {
        let dto: UserDto = serde_json::from_str(
            r#"{"id":1,"username":"a","email":"a@b.c","roles":[],
                "firstname":"A","lastname":"B","emailVerified":true}"#,
        )
        .unwrap();
        assert!(dto.email_verified);
    }
}
