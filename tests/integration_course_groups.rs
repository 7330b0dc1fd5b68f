mod common;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use common::{fail, ok, spawn};
use delpresence::delpresence_core::{ListFilter, Operation, TextQuery, messages};
use delpresence::modules::CourseGroupService;
use delpresence::modules::course_groups::{
    CourseGroupFilter, CreateCourseGroupDto, UpdateCourseGroupDto,
};
use delpresence_models::ids::{CourseGroupId, CourseId, DepartmentId};
use serde_json::{Value, json};

type Db = Arc<Mutex<Vec<Value>>>;

fn course_json(id: u64, code: &str, name: &str, sks: u8, semester: u8) -> Value {
    json!({
        "id": id,
        "code": code,
        "name": name,
        "sks": sks,
        "semester": semester,
        "course_type": "theory",
        "department_id": 1,
        "academic_year_id": 1
    })
}

fn courses() -> Vec<Value> {
    vec![
        course_json(1, "IF1101", "Pengantar Informatika", 2, 1),
        course_json(2, "IF2101", "Basis Data", 3, 3),
        course_json(3, "IF3101", "Kecerdasan Buatan", 3, 5),
        course_json(4, "EL1101", "Rangkaian Listrik", 4, 2),
    ]
}

/// Groups the backend returns with member ids only.
fn ids_only() -> Db {
    Arc::new(Mutex::new(vec![
        json!({ "id": 1, "name": "Inti Informatika", "code": "INTI", "department_id": 1,
                "department_name": "Informatika", "course_ids": [1, 2, 3] }),
        json!({ "id": 2, "name": "Dasar Elektro", "department_id": 2,
                "department_name": "Teknik Elektro", "course_ids": [4] }),
        json!({ "id": 3, "name": "Kosong", "department_id": 1, "course_ids": null }),
    ]))
}

async fn list(State(db): State<Db>, Query(query): Query<Vec<(String, String)>>) -> Response {
    let department = query
        .into_iter()
        .find(|(k, _)| k == "department_id")
        .map(|(_, v)| v);
    let groups: Vec<Value> = db
        .lock()
        .unwrap()
        .iter()
        .filter(|g| department.as_deref().is_none_or(|d| g["department_id"].to_string() == d))
        .cloned()
        .collect();
    ok(groups).into_response()
}

async fn show(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    match db.lock().unwrap().iter().find(|g| g["id"] == id) {
        Some(group) => ok(group.clone()).into_response(),
        None => fail(StatusCode::NOT_FOUND, "course group not found"),
    }
}

async fn create(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let mut groups = db.lock().unwrap();
    if groups.iter().any(|g| g["name"] == body["name"]) {
        return fail(StatusCode::CONFLICT, "course group name already exists");
    }
    let mut created = body;
    created["id"] = json!(groups.len() as u64 + 1);
    groups.push(created.clone());
    (StatusCode::CREATED, ok(created)).into_response()
}

async fn update(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<Value>) -> Response {
    let mut groups = db.lock().unwrap();
    let Some(group) = groups.iter_mut().find(|g| g["id"] == id) else {
        return fail(StatusCode::NOT_FOUND, "course group not found");
    };
    for (key, value) in body.as_object().unwrap() {
        group[key] = value.clone();
    }
    ok(group.clone()).into_response()
}

fn router(db: Db) -> Router {
    Router::new()
        .route("/api/admin/course-groups", get(list).post(create))
        .route(
            "/api/admin/course-groups/{id}",
            get(show).put(update).delete(|| async { ok(Value::Null) }),
        )
        .route("/api/admin/courses", get(|| async { ok(courses()) }))
        .with_state(db)
}

#[tokio::test]
async fn test_list_with_courses_resolves_member_ids() {
    let server = spawn(router(ids_only())).await;

    let groups = CourseGroupService::list_with_courses(&server.client, None)
        .await
        .unwrap();
    assert_eq!(server.hits(), 2);
    assert_eq!(groups.len(), 3);

    let core = &groups[0];
    assert_eq!(core.courses.len(), 3);
    assert_eq!(core.total_credits(), 8);
    assert_eq!(core.semester_range().unwrap().to_string(), "Semester 1 - 5");

    let electro = &groups[1];
    assert_eq!(electro.total_credits(), 4);
    assert_eq!(electro.semester_range().unwrap().to_string(), "Semester 2");

    let empty = &groups[2];
    assert!(empty.courses.is_empty());
    assert_eq!(empty.semester_range(), None);
    assert_eq!(empty.total_credits(), 0);
}

#[tokio::test]
async fn test_list_with_embedded_courses_skips_course_fetch() {
    let db = Arc::new(Mutex::new(vec![json!({
        "id": 1,
        "name": "Inti Informatika",
        "department_id": 1,
        "course_ids": [2],
        "courses": [course_json(2, "IF2101", "Basis Data", 3, 3)]
    })]));
    let server = spawn(router(db)).await;

    let groups = CourseGroupService::list_with_courses(&server.client, None)
        .await
        .unwrap();
    assert_eq!(server.hits(), 1);
    assert_eq!(groups[0].total_credits(), 3);
}

#[tokio::test]
async fn test_list_by_department_and_filter() {
    let server = spawn(router(ids_only())).await;

    let informatics = CourseGroupService::list(&server.client, Some(DepartmentId::new(1)))
        .await
        .unwrap();
    assert_eq!(informatics.len(), 2);

    let groups = CourseGroupService::list_with_courses(&server.client, None)
        .await
        .unwrap();

    // Course names are searchable once resolved.
    let filter = CourseGroupFilter {
        search: TextQuery::new(Some("kecerdasan")),
        ..Default::default()
    };
    let matched = filter.apply(&groups);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, CourseGroupId::new(1));

    let filter = CourseGroupFilter {
        department: "Prodi Teknik Elektro".parse().unwrap(),
        ..Default::default()
    };
    assert_eq!(filter.apply(&groups)[0].name, "Dasar Elektro");
}

#[tokio::test]
async fn test_create_requires_courses_and_rejects_duplicates() {
    let server = spawn(router(ids_only())).await;
    let dto = CreateCourseGroupDto {
        name: "Pilihan Informatika".to_string(),
        code: None,
        description: Some("Mata kuliah pilihan".to_string()),
        department_id: DepartmentId::new(1),
        course_ids: vec![],
    };

    let err = CourseGroupService::create(&server.client, dto.clone())
        .await
        .unwrap_err();
    assert!(err.user_message(Operation::Create).contains("Pilih minimal satu mata kuliah"));
    assert_eq!(server.hits(), 0);

    let dto = CreateCourseGroupDto {
        course_ids: vec![CourseId::new(3)],
        ..dto
    };
    let created = CourseGroupService::create(&server.client, dto.clone())
        .await
        .unwrap();
    assert_eq!(created.id, CourseGroupId::new(4));
    assert_eq!(created.course_ids, vec![CourseId::new(3)]);

    let err = CourseGroupService::create(&server.client, dto).await.unwrap_err();
    assert_eq!(err.user_message(Operation::Create), messages::ALREADY_EXISTS);
}

#[tokio::test]
async fn test_update_keeps_member_courses() {
    let server = spawn(router(ids_only())).await;

    let update = UpdateCourseGroupDto {
        name: Some("Inti Informatika 2024".to_string()),
        ..Default::default()
    };
    let updated = CourseGroupService::update(&server.client, CourseGroupId::new(1), update)
        .await
        .unwrap();
    assert_eq!(updated.name, "Inti Informatika 2024");
    assert_eq!(updated.code.as_deref(), Some("INTI"));
    assert_eq!(
        updated.course_ids,
        vec![CourseId::new(1), CourseId::new(2), CourseId::new(3)]
    );

    CourseGroupService::delete(&server.client, CourseGroupId::new(1))
        .await
        .unwrap();
}
