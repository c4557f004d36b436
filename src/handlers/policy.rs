use axum::{extract::Path, response::IntoResponse, routing::get, Router};
use serde::Serialize;

use super::common::success_response;
use crate::{
    auth::{allowed_pages, can_perform, default_page, Action, Page, Role},
    errors::ServiceError,
    ApiResponse, AppState,
};

#[derive(Debug, Serialize)]
struct RolePagesResponse {
    role: Role,
    pages: Vec<Page>,
    default_page: Option<Page>,
}

#[derive(Debug, Serialize)]
struct RoleActionResponse {
    role: Role,
    action: Action,
    allowed: bool,
}

/// Pages the role may navigate to, in sidebar order
async fn role_pages(Path(role): Path<Role>) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(ApiResponse::success(RolePagesResponse {
        role,
        pages: allowed_pages(role).to_vec(),
        default_page: default_page(role),
    })))
}

/// Whether the role may invoke the mutating action
async fn role_action(
    Path((role, action)): Path<(Role, Action)>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(ApiResponse::success(RoleActionResponse {
        role,
        action,
        allowed: can_perform(role, action),
    })))
}

pub fn policy_routes() -> Router<AppState> {
    Router::new()
        .route("/:role/pages", get(role_pages))
        .route("/:role/actions/:action", get(role_action))
}
