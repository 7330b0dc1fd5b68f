mod common;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use common::{fail, ok, spawn, student_json};
use delpresence::delpresence_core::{ApiError, Operation};
use delpresence::modules::StudentGroupService;
use delpresence::modules::student_groups::MemberRoster;
use delpresence_models::ids::{StudentGroupId, StudentId};
use serde_json::{Value, json};

/// Member and available id lists of group 1, plus a switch that makes the
/// batch endpoints fail.
#[derive(Default)]
struct Group {
    members: Vec<u64>,
    available: Vec<u64>,
    failing: bool,
    rejected: Vec<u64>,
}

type Db = Arc<Mutex<Group>>;

fn students(ids: &[u64]) -> Vec<Value> {
    ids.iter()
        .map(|id| student_json(*id, &format!("1132{id:04}"), &format!("Mahasiswa {id}")))
        .collect()
}

async fn members(State(db): State<Db>) -> Json<Value> {
    ok(students(&db.lock().unwrap().members))
}

async fn available(State(db): State<Db>) -> Json<Value> {
    ok(students(&db.lock().unwrap().available))
}

fn requested(body: &Value) -> Vec<u64> {
    body["student_ids"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_u64)
        .collect()
}

async fn add_one(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let id = body["student_id"].as_u64().unwrap();
    let mut group = db.lock().unwrap();
    group.available.retain(|s| *s != id);
    group.members.push(id);
    (StatusCode::CREATED, ok(Value::Null)).into_response()
}

async fn add_batch(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let mut group = db.lock().unwrap();
    if group.failing {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    let rejected = group.rejected.clone();
    let ids = requested(&body);
    let accepted: Vec<u64> = ids.iter().copied().filter(|id| !rejected.contains(id)).collect();
    group.available.retain(|s| !accepted.contains(s));
    group.members.extend(&accepted);
    ok(json!({ "affected_count": accepted.len(), "failed_ids": rejected })).into_response()
}

async fn remove_batch(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let mut group = db.lock().unwrap();
    if group.failing {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    let ids = requested(&body);
    group.members.retain(|s| !ids.contains(s));
    group.available.extend(&ids);
    ok(Value::Null).into_response()
}

fn router(db: Db) -> Router {
    Router::new()
        .route(
            "/api/admin/student-groups/{id}",
            get(|Path(id): Path<u64>| async move {
                ok(json!({
                    "id": id,
                    "name": "IF-A",
                    "department_id": 1,
                    "semester": 3,
                    "student_count": null
                }))
            }),
        )
        .route("/api/admin/student-groups/{id}/members", get(members).post(add_one))
        .route("/api/admin/student-groups/{id}/available-students", get(available))
        .route("/api/admin/student-groups/{id}/members/batch", post(add_batch))
        .route("/api/admin/student-groups/{id}/members/remove-batch", post(remove_batch))
        .with_state(db)
}

fn db(members: &[u64], available: &[u64]) -> Db {
    Arc::new(Mutex::new(Group {
        members: members.to_vec(),
        available: available.to_vec(),
        ..Default::default()
    }))
}

fn ids(students: &[delpresence_models::student_groups::Student]) -> Vec<u64> {
    let mut ids: Vec<u64> = students.iter().map(|s| s.id.get()).collect();
    ids.sort_unstable();
    ids
}

fn sids(raw: &[u64]) -> Vec<StudentId> {
    raw.iter().copied().map(StudentId::new).collect()
}

const GROUP: StudentGroupId = StudentGroupId::new(1);

#[tokio::test]
async fn test_load_roster_and_group_detail() {
    let server = spawn(router(db(&[1, 2], &[3, 4, 5]))).await;

    let group = StudentGroupService::get(&server.client, GROUP).await.unwrap();
    assert_eq!(group.student_count, 0);

    let roster = StudentGroupService::load_roster(&server.client, GROUP)
        .await
        .unwrap();
    assert_eq!(ids(roster.members()), vec![1, 2]);
    assert_eq!(ids(roster.available()), vec![3, 4, 5]);
}

#[tokio::test]
async fn test_batch_add_moves_students() {
    let state = db(&[1], &[2, 3, 4]);
    let server = spawn(router(state.clone())).await;
    let mut roster = StudentGroupService::load_roster(&server.client, GROUP)
        .await
        .unwrap();

    let response =
        StudentGroupService::add_members(&server.client, GROUP, &mut roster, &sids(&[2, 3, 99]))
            .await
        .unwrap();

    assert_eq!(response.affected_count, Some(2));
    assert_eq!(ids(roster.members()), vec![1, 2, 3]);
    assert_eq!(ids(roster.available()), vec![4]);

    let mut server_members = state.lock().unwrap().members.clone();
    server_members.sort_unstable();
    assert_eq!(server_members, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_batch_add_failure_restores_roster() {
    let state = db(&[1], &[2, 3]);
    let server = spawn(router(state.clone())).await;
    let mut roster = StudentGroupService::load_roster(&server.client, GROUP)
        .await
        .unwrap();
    let before = roster.clone();
    state.lock().unwrap().failing = true;

    let err =
        StudentGroupService::add_members(&server.client, GROUP, &mut roster, &sids(&[2, 3]))
            .await
        .unwrap_err();

    assert_eq!(roster, before);
    assert_eq!(
        err.user_message(Operation::AddMembers),
        Operation::AddMembers.failure_message()
    );
}

#[tokio::test]
async fn test_partially_rejected_add_returns_failed_students() {
    let state = db(&[], &[2, 3, 4]);
    state.lock().unwrap().rejected = vec![3];
    let server = spawn(router(state)).await;
    let mut roster = StudentGroupService::load_roster(&server.client, GROUP)
        .await
        .unwrap();

    let response =
        StudentGroupService::add_members(&server.client, GROUP, &mut roster, &sids(&[2, 3, 4]))
            .await
        .unwrap();

    assert_eq!(response.failed_ids, sids(&[3]));
    assert_eq!(ids(roster.members()), vec![2, 4]);
    assert_eq!(ids(roster.available()), vec![3]);
}

#[tokio::test]
async fn test_batch_remove_and_failure() {
    let state = db(&[1, 2, 3], &[]);
    let server = spawn(router(state.clone())).await;
    let mut roster = StudentGroupService::load_roster(&server.client, GROUP)
        .await
        .unwrap();

    StudentGroupService::remove_members(&server.client, GROUP, &mut roster, &sids(&[1, 3]))
        .await
        .unwrap();
    assert_eq!(ids(roster.members()), vec![2]);
    assert_eq!(ids(roster.available()), vec![1, 3]);

    state.lock().unwrap().failing = true;
    let before = roster.clone();
    StudentGroupService::remove_members(&server.client, GROUP, &mut roster, &sids(&[2]))
        .await
        .unwrap_err();
    assert_eq!(roster, before);
}

#[tokio::test]
async fn test_empty_selection_is_not_sent() {
    let server = spawn(router(db(&[1], &[2]))).await;
    let mut roster = StudentGroupService::load_roster(&server.client, GROUP)
        .await
        .unwrap();
    let hits = server.hits();

    let err =
        StudentGroupService::add_members(&server.client, GROUP, &mut roster, &sids(&[1, 42]))
            .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(server.hits(), hits);
}

#[tokio::test]
async fn test_add_single_member() {
    let state = db(&[], &[7]);
    let server = spawn(router(state.clone())).await;

    StudentGroupService::add_member(&server.client, GROUP, StudentId::new(7))
        .await
        .unwrap();

    assert_eq!(state.lock().unwrap().members, vec![7]);
}
