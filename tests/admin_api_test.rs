//! Black-box tests for the admin user API.
//!
//! The router is driven directly with `tower::ServiceExt::oneshot` over the
//! in-memory user store and the log mailer, so no external services are
//! needed.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use userhub_api::state::AppState;
use userhub_auth::jwt::JwtKeys;
use userhub_auth::profile::ProfileResolver;
use userhub_core::config::AppConfig;
use userhub_core::config::auth::AuthConfig;
use userhub_core::config::database::DatabaseConfig;
use userhub_core::config::logging::LoggingConfig;
use userhub_core::config::mailer::MailerConfig;
use userhub_core::config::server::ServerConfig;
use userhub_database::memory::MemoryUserStore;
use userhub_database::store::UserStore;
use userhub_service::token::TokenGenerator;
use userhub_service::user::AdminUserService;

struct TestApp {
    router: Router,
    keys: Arc<JwtKeys>,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_expiry_minutes: 60,
        },
        mailer: MailerConfig {
            provider: "log".to_string(),
            api_url: String::new(),
            api_key: String::new(),
            from_address: "no-reply@userhub.local".to_string(),
            from_name: "UserHub".to_string(),
            confirmation_url_base: "http://localhost/confirm".to_string(),
            timeout_seconds: 1,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
        },
    }
}

fn test_app() -> TestApp {
    let config = test_config();

    let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let mailer = userhub_mailer::build_mailer(&config.mailer).expect("log mailer");
    let keys = Arc::new(JwtKeys::new(&config.auth));
    let profiles = Arc::new(ProfileResolver::new(Arc::clone(&keys), Arc::clone(&store)));

    let admin_user_service = Arc::new(AdminUserService::new(
        store,
        mailer,
        profiles,
        TokenGenerator::new(),
    ));

    let state = AppState {
        config: Arc::new(config),
        admin_user_service,
    };

    TestApp {
        router: userhub_api::router::build_router(state),
        keys,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("invalid JSON body")
    };
    (status, body)
}

async fn create_user(app: &TestApp, name: &str, email: &str) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "name": name, "email": email }).to_string(),
        ))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["data"].clone()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_create_returns_id_token_and_fields() {
    let app = test_app();
    let user = create_user(&app, "Ann", "ann@x.io").await;

    assert!(user["id"].as_i64().unwrap() > 0);
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["email"], "ann@x.io");
    assert_eq!(user["verification_token"].as_str().unwrap().len(), 40);
}

#[tokio::test]
async fn test_create_rejects_invalid_payload() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "name": "Ann", "email": "not-an-email" }).to_string(),
        ))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_get_existing_and_missing() {
    let app = test_app();
    let user = create_user(&app, "Ann", "ann@x.io").await;
    let id = user["id"].as_i64().unwrap();

    let (status, body) = send(&app, get(&format!("/api/admin/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user["id"]);

    let (status, body) = send(&app, get("/api/admin/users/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_list_is_sorted_by_name() {
    let app = test_app();
    create_user(&app, "Cleo", "c@x.io").await;
    create_user(&app, "Ann", "a@x.io").await;
    create_user(&app, "Bob", "b@x.io").await;

    let (status, body) = send(&app, get("/api/admin/users")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cleo"]);
}

#[tokio::test]
async fn test_update_overwrites_only_sent_fields() {
    let app = test_app();
    let user = create_user(&app, "Ann", "a@x.io").await;
    let id = user["id"].as_i64().unwrap();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/admin/users/{id}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "name": "Ann2" }).to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ann2");
    assert_eq!(body["data"]["email"], "a@x.io");
    assert_eq!(body["data"]["verification_token"], user["verification_token"]);
}

#[tokio::test]
async fn test_delete_requires_authorization_header() {
    let app = test_app();
    let user = create_user(&app, "Ann", "a@x.io").await;
    let id = user["id"].as_i64().unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/admin/users/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "AUTHENTICATION");
}

#[tokio::test]
async fn test_self_deletion_is_forbidden() {
    let app = test_app();
    let caller = create_user(&app, "Ann", "a@x.io").await;
    let id = caller["id"].as_i64().unwrap();
    let token = app.keys.encode_token(id).unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/admin/users/{id}"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "USER_DELETION_ERROR_SELF_DELETION");

    // Target must still exist.
    let (status, _) = send(&app, get(&format!("/api/admin/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_other_account() {
    let app = test_app();
    let caller = create_user(&app, "Ann", "a@x.io").await;
    let target = create_user(&app, "Bob", "b@x.io").await;
    let caller_id = caller["id"].as_i64().unwrap();
    let target_id = target["id"].as_i64().unwrap();
    let token = app.keys.encode_token(caller_id).unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/admin/users/{target_id}"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], target["id"]);
    assert_eq!(body["data"]["name"], "Bob");

    let (status, _) = send(&app, get(&format!("/api/admin/users/{target_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
