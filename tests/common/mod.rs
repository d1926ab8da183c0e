// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// 실제 라우터를 메모리 저장소 + 수동 시계로 구동합니다 (DB 불필요).
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = setup_test();
//     let (status, body) = app.post_json("/register", json!({...})).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::sync::Arc;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_server::routes::create_router;
use auth_server::shared::config::JwtSecrets;
use auth_server::shared::database::MemoryCredentialStore;
use auth_server::shared::services::AppState;
use auth_server::shared::utils::ManualClock;

// 테스트용 상수
pub const TEST_EMAIL: &str = "a@x.com";
pub const TEST_PASSWORD: &str = "pw123456";
pub const ACCESS_SECRET: &str = "test-access-secret";
pub const REFRESH_SECRET: &str = "test-refresh-secret";

#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryCredentialStore>,
    pub clock: Arc<ManualClock>,
}

pub fn test_secrets() -> JwtSecrets {
    JwtSecrets {
        access: ACCESS_SECRET.to_string(),
        refresh: REFRESH_SECRET.to_string(),
    }
}

/// 테스트 전 초기화
pub fn setup_test() -> TestApp {
    let store = Arc::new(MemoryCredentialStore::new());
    let clock = Arc::new(ManualClock::starting_now());
    let state = AppState::new(store.clone(), &test_secrets(), clock.clone());

    TestApp {
        router: create_router().with_state(state),
        store,
        clock,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, body)
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// 원본 문자열 본문으로 POST (Content-Type 생략 가능)
    pub async fn post_raw(&self, path: &str, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::POST).uri(path);
        if let Some(value) = content_type {
            builder = builder.header(header::CONTENT_TYPE, value);
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    /// GET 요청 (Authorization 헤더 값은 그대로 전달)
    pub async fn get_with_authorization(&self, path: &str, authorization: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(path);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn get_profile(&self, access_token: &str) -> (StatusCode, Value) {
        self.get_with_authorization("/profile", Some(&format!("Bearer {}", access_token)))
            .await
    }

    pub async fn register(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.post_json("/register", json!({ "email": email, "password": password }))
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.post_json("/login", json!({ "email": email, "password": password }))
            .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> (StatusCode, Value) {
        self.post_json("/refresh-token", json!({ "refreshToken": refresh_token }))
            .await
    }

    /// 회원가입 후 (userId, accessToken, refreshToken) 반환
    pub async fn register_default(&self) -> (u64, String, String) {
        let (status, body) = self.register(TEST_EMAIL, TEST_PASSWORD).await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

        (
            body["userId"].as_u64().unwrap(),
            body["accessToken"].as_str().unwrap().to_string(),
            body["refreshToken"].as_str().unwrap().to_string(),
        )
    }
}
