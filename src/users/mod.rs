use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::create_user).get(handlers::list_users))
        .route("/users/:id", get(handlers::get_user))
}
