use serde::Deserialize;

use crate::validate::{Constraint, Field, Rule, ValidateRequest};

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

impl ValidateRequest for CreateCategoryRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![Rule::new(
            "name",
            Field::Text(&self.name),
            Constraint::Required,
        )]
    }
}

#[derive(Debug, Deserialize)]
pub struct ListCategoriesRequest {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListCategoriesRequest {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(1)
    }
}

impl ValidateRequest for ListCategoriesRequest {
    fn rules(&self) -> Vec<Rule<'_>> {
        vec![
            Rule::new("page", Field::Number(self.page), Constraint::Required),
            Rule::new("page", Field::Number(self.page), Constraint::Min(1)),
            Rule::new("limit", Field::Number(self.limit), Constraint::Required),
            Rule::new("limit", Field::Number(self.limit), Constraint::Min(1)),
        ]
    }
}
