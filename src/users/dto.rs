use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo::User;
use crate::validate::{Constraint, Field, Rule, ValidateRequest};

/// Request body for signup. Fields default so that absent JSON keys reach
/// the validator as empty values instead of failing at decode time.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl ValidateRequest for CreateUserRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::new("name", Field::Text(&self.name), Constraint::Required),
            Rule::new("email", Field::Text(&self.email), Constraint::Required),
            Rule::new("email", Field::Text(&self.email), Constraint::Email),
            Rule::new(
                "password",
                Field::Text(&self.password),
                Constraint::Required,
            ),
            Rule::new(
                "password",
                Field::Text(&self.password),
                Constraint::MinLen(8),
            ),
        ]
    }
}

/// Request body for the paginated user list.
#[derive(Debug, Deserialize)]
pub struct ListUsersRequest {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListUsersRequest {
    /// Valid after `validate()` succeeded; both fields are then present.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(1)
    }
}

impl ValidateRequest for ListUsersRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::new("page", Field::Number(self.page), Constraint::Required),
            Rule::new("page", Field::Number(self.page), Constraint::Min(1)),
            Rule::new("limit", Field::Number(self.limit), Constraint::Required),
            Rule::new("limit", Field::Number(self.limit), Constraint::Min(1)),
        ]
    }
}

/// Public projection of a user returned by the point lookup.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn absent_body_fields_fail_validation_not_decoding() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn complete_signup_body_validates() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"name": "Alice", "email": "alice@example.com", "password": "correcthorse"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn list_request_requires_page_and_limit() {
        let req: ListUsersRequest = serde_json::from_str(r#"{"limit": 10}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "page is required");
    }

    #[test]
    fn user_response_uses_rfc3339_created_at() {
        let response = UserResponse {
            id: Uuid::new_v4(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            created_at: datetime!(2024-03-01 12:30:45 UTC),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["createdAt"], "2024-03-01T12:30:45Z");
        assert_eq!(json["email"], "alice@example.com");
        assert!(json.get("password_hash").is_none());
    }
}
