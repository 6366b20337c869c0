use serde::Deserialize;
use uuid::Uuid;

use crate::validate::{Constraint, Field, Rule, ValidateRequest};

pub const DEFAULT_PRIORITY: i64 = 3;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl CreateTaskRequest {
    pub fn priority(&self) -> i64 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}

impl ValidateRequest for CreateTaskRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::new("title", Field::Text(&self.title), Constraint::Required),
            Rule::new("priority", Field::Number(self.priority), Constraint::Min(1)),
            Rule::new("priority", Field::Number(self.priority), Constraint::Max(5)),
        ]
    }
}

#[derive(Debug, Deserialize)]
pub struct ListTasksRequest {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListTasksRequest {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(1)
    }
}

impl ValidateRequest for ListTasksRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::new("page", Field::Number(self.page), Constraint::Required),
            Rule::new("page", Field::Number(self.page), Constraint::Min(1)),
            Rule::new("limit", Field::Number(self.limit), Constraint::Required),
            Rule::new("limit", Field::Number(self.limit), Constraint::Min(1)),
        ]
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl ValidateRequest for UpdateTaskRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        let mut rules = Vec::new();
        // A present-but-empty title is rejected; absence keeps the stored
        // title, so no rule applies.
        if let Some(title) = self.title.as_deref() {
            rules.push(Rule::new("title", Field::Text(title), Constraint::Required));
        }
        rules.push(Rule::new(
            "priority",
            Field::Number(self.priority),
            Constraint::Min(1),
        ));
        rules.push(Rule::new(
            "priority",
            Field::Number(self.priority),
            Constraint::Max(5),
        ));
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_required() {
        let req: CreateTaskRequest = serde_json::from_str(r#"{"priority": 2}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "title is required");
    }

    #[test]
    fn priority_bounds_are_enforced() {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "write tests", "priority": 9}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "priority must be at most 5");

        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "write tests", "priority": 0}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "priority must be at least 1");
    }

    #[test]
    fn absent_priority_defaults() {
        let req: CreateTaskRequest = serde_json::from_str(r#"{"title": "walk dog"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.priority(), DEFAULT_PRIORITY);
    }

    #[test]
    fn update_rejects_empty_title_but_allows_absent() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(req.validate().is_err());

        let req: UpdateTaskRequest = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
