use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// A single constraint attached to one request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    Email,
    Min(i64),
    Max(i64),
    MinLen(usize),
}

/// A view over one DTO field. Absent JSON fields deserialize to `""` /
/// `None` (serde defaults), so `Required` can observe absence.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Text(&'a str),
    Number(Option<i64>),
}

/// One (field, value, constraint) tuple.
#[derive(Debug, Clone, Copy)]
pub struct Rule<'a> {
    pub field: &'static str,
    pub value: Field<'a>,
    pub constraint: Constraint,
}

impl<'a> Rule<'a> {
    pub fn new(field: &'static str, value: Field<'a>, constraint: Constraint) -> Self {
        Self {
            field,
            value,
            constraint,
        }
    }
}

/// The first constraint violation found for a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

/// Request DTOs declare their rules in field order; `validate` evaluates
/// them in that order and returns the first violation.
pub trait ValidateRequest {
    fn rules(&self) -> Vec<Rule<'_>>;

    fn validate(&self) -> Result<(), ValidationError> {
        for rule in self.rules() {
            check(&rule)?;
        }
        Ok(())
    }
}

fn check(rule: &Rule) -> Result<(), ValidationError> {
    match (rule.constraint, rule.value) {
        (Constraint::Required, Field::Text(s)) => {
            if s.is_empty() {
                return Err(ValidationError::new(
                    rule.field,
                    format!("{} is required", rule.field),
                ));
            }
        }
        (Constraint::Required, Field::Number(n)) => {
            if n.is_none() {
                return Err(ValidationError::new(
                    rule.field,
                    format!("{} is required", rule.field),
                ));
            }
        }
        (Constraint::Email, Field::Text(s)) => {
            // Absence is Required's concern, not Email's.
            if !s.is_empty() && !EMAIL_RE.is_match(s) {
                return Err(ValidationError::new(
                    rule.field,
                    format!("{} must be a valid email address", rule.field),
                ));
            }
        }
        (Constraint::Min(min), Field::Number(Some(n))) => {
            if n < min {
                return Err(ValidationError::new(
                    rule.field,
                    format!("{} must be at least {}", rule.field, min),
                ));
            }
        }
        (Constraint::Max(max), Field::Number(Some(n))) => {
            if n > max {
                return Err(ValidationError::new(
                    rule.field,
                    format!("{} must be at most {}", rule.field, max),
                ));
            }
        }
        (Constraint::MinLen(min), Field::Text(s)) => {
            if !s.is_empty() && s.len() < min {
                return Err(ValidationError::new(
                    rule.field,
                    format!("{} must be at least {} characters", rule.field, min),
                ));
            }
        }
        // Min/Max on an absent number, or a length/email constraint on a
        // numeric field, have nothing to evaluate.
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Signup {
        name: String,
        email: String,
        password: String,
    }

    impl ValidateRequest for Signup {
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

    struct Paging {
        page: Option<i64>,
        limit: Option<i64>,
    }

    impl ValidateRequest for Paging {
        fn rules(&self) -> Vec<Rule<'_>> {
            vec![
                Rule::new("page", Field::Number(self.page), Constraint::Required),
                Rule::new("page", Field::Number(self.page), Constraint::Min(1)),
                Rule::new("limit", Field::Number(self.limit), Constraint::Required),
                Rule::new("limit", Field::Number(self.limit), Constraint::Min(1)),
                Rule::new("limit", Field::Number(self.limit), Constraint::Max(100)),
            ]
        }
    }

    fn signup(name: &str, email: &str, password: &str) -> Signup {
        Signup {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn valid_signup_passes() {
        assert!(signup("Alice", "alice@example.com", "correcthorse")
            .validate()
            .is_ok());
    }

    #[test]
    fn missing_required_field_fails() {
        let err = signup("", "alice@example.com", "correcthorse")
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn malformed_email_fails() {
        let err = signup("Alice", "not-an-email", "correcthorse")
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.message, "email must be a valid email address");
    }

    #[test]
    fn short_password_fails() {
        let err = signup("Alice", "alice@example.com", "short")
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "password must be at least 8 characters");
    }

    #[test]
    fn first_violation_wins_in_declaration_order() {
        // Both name and password are invalid; name is declared first.
        let err = signup("", "alice@example.com", "short").validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn missing_page_fails_before_limit() {
        let err = Paging {
            page: None,
            limit: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message, "page is required");
    }

    #[test]
    fn page_below_min_fails() {
        let err = Paging {
            page: Some(0),
            limit: Some(10),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message, "page must be at least 1");
    }

    #[test]
    fn limit_above_max_fails() {
        let err = Paging {
            page: Some(1),
            limit: Some(500),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message, "limit must be at most 100");
    }

    #[test]
    fn valid_paging_passes() {
        assert!(Paging {
            page: Some(2),
            limit: Some(25),
        }
        .validate()
        .is_ok());
    }
}
