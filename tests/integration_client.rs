mod common;

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use common::{fail, ok, spawn, token_expiring_at};
use delpresence::client::REQUEST_ID_HEADER;
use delpresence::delpresence_core::{ApiError, Operation, messages};
use delpresence::modules::{CourseService, ReferenceService};
use delpresence_models::ids::AcademicYearId;
use serde_json::json;

fn course(id: u64, academic_year_id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "code": format!("IF{id}"),
        "name": "Basis Data",
        "sks": 3,
        "semester": 3,
        "course_type": "theory",
        "department_id": 1,
        "department_name": "Informatika",
        "academic_year_id": academic_year_id
    })
}

#[tokio::test]
async fn test_bearer_token_and_request_id_are_sent() {
    let seen: Arc<Mutex<Option<HeaderMap>>> = Arc::default();
    let captured = seen.clone();
    let router = Router::new().route(
        "/api/admin/rooms",
        get(move |headers: HeaderMap| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(headers);
                ok(json!([]))
            }
        }),
    );
    let server = spawn(router).await;

    let rooms = ReferenceService::rooms(&server.client).await.unwrap();
    assert!(rooms.is_empty());

    let headers = seen.lock().unwrap().clone().unwrap();
    let auth = headers["authorization"].to_str().unwrap();
    assert!(auth.starts_with("Bearer "));
    let request_id = headers[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
    assert!(headers["user-agent"].to_str().unwrap().starts_with("delpresence/"));
}

#[tokio::test]
async fn test_bare_array_and_null_payloads() {
    let router = Router::new()
        .route(
            "/api/admin/rooms",
            get(|| async {
                axum::Json(json!([
                    { "id": 2, "code": "B2", "name": "Lab 2", "building": "GD 9" },
                    { "id": 1, "code": "A1", "name": "Aula", "building": "" },
                    { "id": 3, "code": "B1", "name": "Lab 1", "building": "GD 9" }
                ]))
            }),
        )
        .route(
            "/api/admin/academic-years",
            get(|| async { axum::Json(json!({ "status": "success", "data": null })) }),
        );
    let server = spawn(router).await;

    let rooms = ReferenceService::rooms(&server.client).await.unwrap();
    let codes: Vec<&str> = rooms.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["A1", "B1", "B2"]);

    let years = ReferenceService::academic_years(&server.client).await.unwrap();
    assert!(years.is_empty());
    assert!(
        ReferenceService::current_academic_year(&server.client)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_academic_year_query_parameter() {
    let router = Router::new().route(
        "/api/admin/courses",
        get(
            |axum::extract::Query(q): axum::extract::Query<std::collections::HashMap<String, String>>| async move {
                let courses = match q.get("academic_year_id").map(String::as_str) {
                    Some("2") => vec![course(5, 2)],
                    _ => vec![course(4, 1), course(5, 2)],
                };
                ok(courses)
            },
        ),
    );
    let server = spawn(router).await;

    let all = CourseService::list(&server.client, None).await.unwrap();
    assert_eq!(all.len(), 2);
    let filtered = CourseService::list(&server.client, Some(AcademicYearId::new(2)))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].label(), "IF5 - Basis Data");
}

#[tokio::test]
async fn test_unauthorized_maps_to_session_expired() {
    let router = Router::new().route(
        "/api/admin/rooms",
        get(|| async { fail(StatusCode::UNAUTHORIZED, "missing token") }),
    );
    let server = spawn(router).await;

    let err = ReferenceService::rooms(&server.client).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(Operation::Fetch), messages::SESSION_EXPIRED);
}

#[tokio::test]
async fn test_expired_token_is_not_sent() {
    let server = spawn(Router::new().route("/api/admin/rooms", get(|| async { ok(json!([])) }))).await;
    let client = server.client.clone().with_token(token_expiring_at(1_000));

    let err = ReferenceService::rooms(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::TokenExpired));
    assert_eq!(err.user_message(Operation::Fetch), messages::SESSION_EXPIRED);
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_error_envelope_on_success_status() {
    let router = Router::new().route(
        "/api/admin/rooms",
        get(|| async {
            (
                StatusCode::OK,
                axum::Json(json!({ "status": "error", "message": "permission denied" })),
            )
                .into_response()
        }),
    );
    let server = spawn(router).await;

    let err = ReferenceService::rooms(&server.client).await.unwrap_err();
    assert_eq!(err.user_message(Operation::Fetch), messages::FORBIDDEN);
}

#[tokio::test]
async fn test_unreachable_backend() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = delpresence::delpresence_config::ApiConfig::new(format!("http://{addr}"));
    let client = delpresence::ApiClient::new(&config, None).unwrap();

    let err = ReferenceService::rooms(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.user_message(Operation::Fetch), messages::CONNECTION_FAILED);
}
