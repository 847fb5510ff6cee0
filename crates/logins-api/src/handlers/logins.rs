//! Login handlers
//!
//! Endpoints for creating, reading, updating, banning and listing logins.

use axum::{extract::State, http::StatusCode, Json};
use logins_service::dto::{CreateLoginRequest, LoginResponse, PageResponse, UpdateLoginRequest};

use crate::extractors::{LoginPath, Pagination, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created, Paginated};
use crate::state::AppState;

/// Create a login
///
/// PUT /login
pub async fn create_login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateLoginRequest>,
) -> ApiResult<Created<Json<LoginResponse>>> {
    let response = state.logins().create(request).await?;
    Ok(Created(Json(response)))
}

/// Get login by uuid
///
/// GET /uuid/{uuid}
pub async fn get_login_by_uuid(
    State(state): State<AppState>,
    UuidPath(uuid): UuidPath,
) -> ApiResult<Json<LoginResponse>> {
    let response = state.logins().get_by_uuid(uuid).await?;
    Ok(Json(response))
}

/// Update login by uuid
///
/// POST /uuid/{uuid}
pub async fn update_login(
    State(state): State<AppState>,
    UuidPath(uuid): UuidPath,
    ValidatedJson(request): ValidatedJson<UpdateLoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = state.logins().update(uuid, request).await?;
    Ok(Json(response))
}

/// Ban login by uuid
///
/// DELETE /uuid/{uuid}
pub async fn ban_login(
    State(state): State<AppState>,
    UuidPath(uuid): UuidPath,
) -> ApiResult<StatusCode> {
    state.logins().ban(uuid).await?;
    Ok(StatusCode::OK)
}

/// Get login by name
///
/// GET /login/{login}
pub async fn get_login_by_name(
    State(state): State<AppState>,
    LoginPath(login): LoginPath,
) -> ApiResult<Json<LoginResponse>> {
    let response = state.logins().get_by_login(&login).await?;
    Ok(Json(response))
}

/// Count logins, as plain text
///
/// GET /count
pub async fn count_logins(State(state): State<AppState>) -> ApiResult<String> {
    let count = state.logins().count().await?;
    Ok(count.to_string())
}

/// List one page of logins
///
/// GET /logins?page=&limit=
pub async fn list_logins(
    State(state): State<AppState>,
    Pagination(params): Pagination,
) -> ApiResult<Paginated<Json<PageResponse>>> {
    let response = state.logins().list(params).await?;
    Ok(Paginated {
        meta: response.meta,
        body: Json(response),
    })
}
