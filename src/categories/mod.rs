use axum::{routing::post, Router};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/categories",
        post(handlers::create_category).get(handlers::list_categories),
    )
}
