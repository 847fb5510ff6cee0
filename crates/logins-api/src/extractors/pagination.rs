//! Pagination extractor
//!
//! Page and limit come from the `page`/`limit` query parameters, falling
//! back to the `Pagination-Page`/`Pagination-Limit` request headers.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, HeaderMap},
};
use logins_service::dto::PageParams;
use serde::Deserialize;

use crate::response::{ApiError, PAGINATION_LIMIT_HEADER, PAGINATION_PAGE_HEADER};
use crate::state::AppState;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<String>,
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<String>,
}

/// Resolved pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageParams);

fn parse_query(name: &str, value: Option<&str>) -> Result<Option<u32>, ApiError> {
    value
        .map(|v| {
            v.trim().parse().map_err(|_| {
                ApiError::invalid_query(format!("'{name}' must be a non-negative integer"))
            })
        })
        .transpose()
}

fn parse_header(headers: &HeaderMap, name: &str) -> Result<Option<u32>, ApiError> {
    headers
        .get(name)
        .map(|v| {
            v.to_str()
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .ok_or_else(|| {
                    ApiError::invalid_header(format!("'{name}' must be a non-negative integer"))
                })
        })
        .transpose()
}

impl Pagination {
    /// Combine query and header values; the query wins
    pub fn from_parts(
        params: &PaginationParams,
        headers: &HeaderMap,
        state: &AppState,
    ) -> Result<Self, ApiError> {
        let page = match parse_query("page", params.page.as_deref())? {
            Some(page) => Some(page),
            None => parse_header(headers, PAGINATION_PAGE_HEADER)?,
        };
        let limit = match parse_query("limit", params.limit.as_deref())? {
            Some(limit) => Some(limit),
            None => parse_header(headers, PAGINATION_LIMIT_HEADER)?,
        };

        Ok(Pagination(PageParams::resolve(page, limit, state.pagination())))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Pagination {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::from_parts(&params, &parts.headers, state)
    }
}
