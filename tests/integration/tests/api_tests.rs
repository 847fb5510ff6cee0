//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, header_i64, TestServer,
};
use reqwest::StatusCode;

async fn create(server: &TestServer, request: &CreateLoginRequest) -> LoginResponse {
    let response = server.put("/api/v1/login", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Create / Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_find() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateLoginRequest::unique();
    let created = create(&server, &request).await;

    assert_eq!(created.login, request.login);
    assert!(!created.banned);
    assert!(created.created_at.is_some());
    assert!(created.updated_at.is_none());

    let response = server
        .get(&format!("/api/v1/uuid/{}", created.uuid))
        .await
        .unwrap();
    let by_uuid: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(by_uuid, created);

    let response = server
        .get(&format!("/api/v1/login/{}", request.login))
        .await
        .unwrap();
    let by_login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(by_login, created);
}

#[tokio::test]
async fn test_create_banned() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateLoginRequest::unique();
    request.banned = true;

    let created = create(&server, &request).await;
    assert!(created.banned);
}

#[tokio::test]
async fn test_create_duplicate_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateLoginRequest::unique();
    create(&server, &request).await;

    let response = server.put("/api/v1/login", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "LOGIN_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_unknown_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/api/v1/uuid/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_LOGIN");

    let response = server
        .get(&format!("/api/v1/login/{}", unique_login("ghost")))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/api/v1/uuid/not-a-uuid").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Update / Ban Tests
// ============================================================================

#[tokio::test]
async fn test_update_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create(&server, &CreateLoginRequest::unique()).await;
    let new_name = unique_login("renamed");

    let response = server
        .post(
            &format!("/api/v1/uuid/{}", created.uuid),
            &UpdateLoginRequest::rename(&new_name),
        )
        .await
        .unwrap();
    let updated: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.uuid, created.uuid);
    assert_eq!(updated.login, new_name);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());

    let response = server
        .get(&format!("/api/v1/login/{}", created.login))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_to_taken_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = create(&server, &CreateLoginRequest::unique()).await;
    let second = create(&server, &CreateLoginRequest::unique()).await;

    let response = server
        .post(
            &format!("/api/v1/uuid/{}", second.uuid),
            &UpdateLoginRequest::rename(&first.login),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_ban_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create(&server, &CreateLoginRequest::unique()).await;
    let path = format!("/api/v1/uuid/{}", created.uuid);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let banned: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(banned.banned);
    assert!(banned.updated_at.is_some());

    // Banning again is still a success
    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The update endpoint cannot lift a ban
    let request = UpdateLoginRequest {
        login: created.login.clone(),
        banned: Some(false),
        created_at: None,
    };
    let response = server.post(&path, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_ban_unknown_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .delete(&format!("/api/v1/uuid/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Count / Listing Tests
// ============================================================================

#[tokio::test]
async fn test_count_grows_with_inserts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let before: i64 = server
        .get("/api/v1/count")
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
        .parse()
        .unwrap();

    create(&server, &CreateLoginRequest::unique()).await;

    let after: i64 = server
        .get("/api/v1/count")
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
        .parse()
        .unwrap();
    assert!(after > before);
}

#[tokio::test]
async fn test_list_logins() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    for _ in 0..3 {
        create(&server, &CreateLoginRequest::unique()).await;
    }

    let response = server.get("/api/v1/logins?page=1&limit=2").await.unwrap();
    let count = header_i64(&response, "pagination-count").unwrap();
    assert_eq!(header_i64(&response, "pagination-page").unwrap(), 1);
    assert_eq!(header_i64(&response, "pagination-limit").unwrap(), 2);

    let page: PageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.count, count);
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.limit, 2);
    assert!(count >= 3);
    assert_eq!(page.records.len(), 2);
}

#[tokio::test]
async fn test_list_past_the_end() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create(&server, &CreateLoginRequest::unique()).await;

    let response = server
        .get("/api/v1/logins?page=1000000&limit=100")
        .await
        .unwrap();
    let page: PageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.meta.count >= 1);
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn test_list_with_pagination_headers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create(&server, &CreateLoginRequest::unique()).await;

    let response = server
        .get_builder("/api/v1/logins")
        .header("Pagination-Page", "1")
        .header("Pagination-Limit", "1")
        .send()
        .await
        .unwrap();
    let page: PageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.limit, 1);
    assert_eq!(page.records.len(), 1);

    let response = server.get("/api/v1/logins?limit=ten").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");
    assert!(!body.error.message.is_empty());
}
