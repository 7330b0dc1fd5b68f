mod common;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use common::{fail, ok, spawn, study_program_json};
use delpresence::delpresence_core::{ListFilter, Operation, PaginationParams, messages, paginate};
use delpresence::modules::StudyProgramService;
use delpresence::modules::study_programs::{
    CreateStudyProgramDto, StudyProgramFilter, UpdateStudyProgramDto,
};
use delpresence_models::ids::{FacultyId, StudyProgramId};
use delpresence_models::value_types::Degree;
use serde_json::{Value, json};

type Db = Arc<Mutex<Vec<Value>>>;

fn seed() -> Db {
    Arc::new(Mutex::new(vec![
        study_program_json(1, "IF", "Informatika", 1),
        study_program_json(2, "TE", "Teknik Elektro", 1),
        study_program_json(3, "SI", "Sistem Informasi", 1),
        study_program_json(4, "MR", "Manajemen Rekayasa", 2),
        study_program_json(5, "TB", "Teknik Bioproses", 2),
    ]))
}

async fn list(State(db): State<Db>) -> Response {
    ok(db.lock().unwrap().clone()).into_response()
}

async fn show(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    match db.lock().unwrap().iter().find(|p| p["id"] == id) {
        Some(program) => ok(program.clone()).into_response(),
        None => fail(StatusCode::NOT_FOUND, "study program not found"),
    }
}

async fn create(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let mut programs = db.lock().unwrap();
    if programs.iter().any(|p| p["code"] == body["code"]) {
        return fail(StatusCode::CONFLICT, "study program code already exists");
    }
    let mut created = body.clone();
    created["id"] = json!(programs.len() as u64 + 1);
    programs.push(created.clone());
    (StatusCode::CREATED, ok(created)).into_response()
}

async fn update(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<Value>) -> Response {
    let mut programs = db.lock().unwrap();
    let Some(program) = programs.iter_mut().find(|p| p["id"] == id) else {
        return fail(StatusCode::NOT_FOUND, "study program not found");
    };
    for (key, value) in body.as_object().unwrap() {
        program[key] = value.clone();
    }
    ok(program.clone()).into_response()
}

async fn delete(Path(id): Path<u64>) -> Response {
    if id == 1 {
        return fail(StatusCode::CONFLICT, "cannot delete: courses still reference it");
    }
    ok(Value::Null).into_response()
}

fn router(db: Db) -> Router {
    Router::new()
        .route("/api/admin/study-programs", get(list).post(create))
        .route(
            "/api/admin/study-programs/{id}",
            get(show).put(update).delete(delete),
        )
        .route(
            "/api/admin/faculties",
            get(|| async { ok(json!([{ "id": 1, "code": "FITE", "name": "FITE", "dean": "" }])) }),
        )
        .route(
            "/api/admin/lecturers/search",
            get(|Query(q): Query<Vec<(String, String)>>| async move {
                let query = q.into_iter().find(|(k, _)| k == "query").map(|(_, v)| v);
                assert_eq!(query.as_deref(), Some("arie"));
                ok(json!([{ "id": 4, "user_id": 9, "full_name": "Dr. Arie Satria", "nip": "1987" }]))
            }),
        )
        .with_state(db)
}

fn new_program(code: &str) -> CreateStudyProgramDto {
    CreateStudyProgramDto {
        code: code.to_string(),
        name: "Teknologi Rekayasa Perangkat Lunak".to_string(),
        faculty_id: FacultyId::new(3),
        degree: Degree::D4,
        accreditation: None,
        head_of_department_id: None,
        establishment_year: Some(2018),
    }
}

#[tokio::test]
async fn test_list_filter_and_paginate() {
    let server = spawn(router(seed())).await;

    let programs = StudyProgramService::list(&server.client).await.unwrap();
    assert_eq!(programs.len(), 5);

    let filter = StudyProgramFilter::new(Some("teknik"), None);
    let matched = filter.apply(&programs);
    assert_eq!(matched.len(), 2);

    let filter = StudyProgramFilter::new(None, Some(FacultyId::new(1)));
    let page = paginate(filter.apply(&programs), &PaginationParams::page(2, 2));
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].code, "SI");
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.total_pages, 2);
    assert!(!page.meta.has_more);
}

#[tokio::test]
async fn test_create_then_duplicate_is_rejected() {
    let server = spawn(router(seed())).await;

    let created = StudyProgramService::create(&server.client, new_program("TRPL"))
        .await
        .unwrap();
    assert_eq!(created.id, StudyProgramId::new(6));
    assert_eq!(created.degree, "D4");

    let err = StudyProgramService::create(&server.client, new_program("TRPL"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.user_message(Operation::Create), messages::ALREADY_EXISTS);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let server = spawn(router(seed())).await;

    let mut dto = new_program("");
    dto.faculty_id = FacultyId::new(0);
    let err = StudyProgramService::create(&server.client, dto).await.unwrap_err();

    assert!(err.user_message(Operation::Create).starts_with("Data tidak valid"));
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_update_merges_over_current_record() {
    let db = seed();
    let server = spawn(router(db.clone())).await;

    let update = UpdateStudyProgramDto {
        name: Some("Teknik Informatika".to_string()),
        ..Default::default()
    };
    let updated = StudyProgramService::update(&server.client, StudyProgramId::new(1), update)
        .await
        .unwrap();

    assert_eq!(updated.name, "Teknik Informatika");
    assert_eq!(updated.code, "IF");
    let stored = db.lock().unwrap()[0].clone();
    assert_eq!(stored["faculty_id"], 1);
    assert_eq!(stored["degree"], "S1");
}

#[tokio::test]
async fn test_delete_with_related_data_is_localized() {
    let server = spawn(router(seed())).await;

    let err = StudyProgramService::delete(&server.client, StudyProgramId::new(1))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(Operation::Delete), messages::HAS_RELATED_DATA);

    StudyProgramService::delete(&server.client, StudyProgramId::new(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_missing_record_is_not_found() {
    let server = spawn(router(seed())).await;

    let err = StudyProgramService::get(&server.client, StudyProgramId::new(99))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(Operation::Fetch), messages::NOT_FOUND);
}

#[tokio::test]
async fn test_faculties_and_lecturer_search() {
    let server = spawn(router(seed())).await;

    let faculties = StudyProgramService::list_faculties(&server.client).await.unwrap();
    assert_eq!(faculties[0].dean, None);

    let lecturers = StudyProgramService::search_lecturers(&server.client, "arie")
        .await
        .unwrap();
    assert_eq!(lecturers.len(), 1);
    assert_eq!(lecturers[0].user_id.get(), 9);
}
