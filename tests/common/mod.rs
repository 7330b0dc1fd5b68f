//! In-process mock of the DelPresence backend.
//!
//! Each test builds an axum router with the handlers it needs; [`spawn`]
//! serves it on an ephemeral port and returns a client pointed at it plus a
//! counter of requests the server received.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use delpresence::ApiClient;
use delpresence::delpresence_config::ApiConfig;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::{Value, json};

pub struct TestServer {
    pub client: ApiClient,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Number of requests the mock backend has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn spawn(router: Router) -> TestServer {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = router.layer(middleware::from_fn(move |req: Request, next: Next| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            next.run(req).await
        }
    }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ApiConfig::new(format!("http://{addr}"));
    let client = ApiClient::new(&config, Some(token_expiring_at(4_000_000_000))).unwrap();
    TestServer { client, hits }
}

/// A signed admin token with the given `exp`.
pub fn token_expiring_at(exp: i64) -> String {
    encode(
        &Header::default(),
        &json!({ "user_id": 1, "username": "admin", "role": "Admin", "exp": exp }),
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

/// `{"status":"success","data":...}`
pub fn ok<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "status": "success", "message": "ok", "data": data }))
}

/// `{"status":"error","message":...}` with the given HTTP status.
pub fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "error", "message": message }))).into_response()
}

pub fn study_program_json(id: u64, code: &str, name: &str, faculty_id: u64) -> Value {
    json!({
        "id": id,
        "code": code,
        "name": name,
        "faculty_id": faculty_id,
        "faculty": { "id": faculty_id, "code": "F", "name": format!("Fakultas {faculty_id}") },
        "degree": "S1",
        "lecturer_count": 4,
        "student_count": 80
    })
}

pub fn student_json(id: u64, nim: &str, name: &str) -> Value {
    json!({ "id": id, "nim": nim, "full_name": name, "year": 2022 })
}

pub fn schedule_json(id: u64, day: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "course_id": 10,
        "course_code": "IF2101",
        "course_name": "Basis Data",
        "day": day,
        "start_time": start,
        "end_time": end,
        "room_id": 3,
        "room_name": "GD 511",
        "lecturer_id": 7,
        "lecturer_name": "Dr. Arie",
        "student_group_id": 2,
        "student_group_name": "IF-A",
        "academic_year_id": 1
    })
}

pub fn session_json(id: u64, created_at: &str, duration: u32, auto_close: bool, status: &str) -> Value {
    json!({
        "id": id,
        "course_schedule_id": 5,
        "course_code": "IF2101",
        "course_name": "Basis Data",
        "attendance_type": "QR_CODE",
        "status": status,
        "duration": duration,
        "auto_close": auto_close,
        "created_at": created_at,
        "total_students": 30,
        "attended_count": 12
    })
}
