use axum::{extract::State, Form};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::server::AppState;
use crate::db::repo;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Answers with a fixed plain-text body either way; the password is
/// received but not verified against the stored hash.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<&'static str, AppError> {
    let username = form.username.as_deref().unwrap_or_default();
    tracing::debug!(
        username,
        password_present = form.password.is_some(),
        "login attempt"
    );

    let users = repo::get_user(&state.db, username).await?;

    if users.is_empty() {
        Ok("Login failed")
    } else {
        Ok("Login successful")
    }
}
