use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use super::domain::{Student, StudentId};
use super::repository::StudentRepository;
use super::service::{ApprovalSelector, RegistryError, StudentService};

/// Router builder exposing the student CRUD and approval endpoints.
pub fn student_router<R>(service: Arc<StudentService<R>>) -> Router
where
    R: StudentRepository + 'static,
{
    Router::new()
        .route("/students", get(list_handler::<R>))
        .route("/students", post(create_handler::<R>))
        .route("/students", put(update_handler::<R>))
        .route("/students/:id", get(get_handler::<R>))
        .route("/students/:id", delete(delete_handler::<R>))
        .route("/students/approved", post(approved_by_record_handler::<R>))
        .route("/students/approved/id/:id", get(approved_by_id_handler::<R>))
        .route(
            "/students/approved/name/:name",
            get(approved_by_name_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<StudentService<R>>>) -> Response
where
    R: StudentRepository + 'static,
{
    match service.list() {
        Ok(students) => (StatusCode::OK, Json(students)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<StudentService<R>>>,
    Path(id): Path<u32>,
) -> Response
where
    R: StudentRepository + 'static,
{
    match service.get_by_id(StudentId(id)) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<StudentService<R>>>,
    Json(student): Json<Student>,
) -> Response
where
    R: StudentRepository + 'static,
{
    match service.create(student) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<StudentService<R>>>,
    Json(student): Json<Student>,
) -> Response
where
    R: StudentRepository + 'static,
{
    match service.update(student) {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<StudentService<R>>>,
    Path(id): Path<u32>,
) -> Response
where
    R: StudentRepository + 'static,
{
    match service.delete(StudentId(id)) {
        Ok(deleted) => (StatusCode::OK, Json(deleted)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn approved_by_id_handler<R>(
    State(service): State<Arc<StudentService<R>>>,
    Path(id): Path<u32>,
) -> Response
where
    R: StudentRepository + 'static,
{
    approval_response(service.is_approved(ApprovalSelector::ById(StudentId(id))))
}

pub(crate) async fn approved_by_name_handler<R>(
    State(service): State<Arc<StudentService<R>>>,
    Path(name): Path<String>,
) -> Response
where
    R: StudentRepository + 'static,
{
    approval_response(service.is_approved(ApprovalSelector::ByName(name)))
}

pub(crate) async fn approved_by_record_handler<R>(
    State(service): State<Arc<StudentService<R>>>,
    Json(student): Json<Student>,
) -> Response
where
    R: StudentRepository + 'static,
{
    approval_response(service.is_approved(ApprovalSelector::ByRecord(student)))
}

fn approval_response(result: Result<bool, RegistryError>) -> Response {
    match result {
        Ok(approved) => (StatusCode::OK, Json(approved)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: RegistryError) -> Response {
    let status = match &error {
        RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
        RegistryError::AlreadyExists(_) => StatusCode::CONFLICT,
        RegistryError::MissingSelector => StatusCode::BAD_REQUEST,
        RegistryError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
