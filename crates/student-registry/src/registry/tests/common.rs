use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::registry::domain::{seed_roster, Student, StudentId};
use crate::registry::repository::{
    InMemoryStudentRepository, RepositoryError, StudentRepository,
};
use crate::registry::router::student_router;
use crate::registry::service::StudentService;

pub(super) fn student(id: u32, name: &str, score: i32) -> Student {
    Student {
        id: StudentId(id),
        name: name.to_string(),
        score,
    }
}

pub(super) fn build_service() -> (
    StudentService<InMemoryStudentRepository>,
    Arc<InMemoryStudentRepository>,
) {
    let repository = Arc::new(InMemoryStudentRepository::new());
    let service = StudentService::new(repository.clone());
    (service, repository)
}

pub(super) fn seeded_service() -> StudentService<InMemoryStudentRepository> {
    let repository =
        InMemoryStudentRepository::with_roster(seed_roster()).expect("seed roster has unique ids");
    StudentService::new(Arc::new(repository))
}

pub(super) fn seeded_router() -> axum::Router {
    let service = Arc::new(seeded_service());
    student_router(service)
}

/// Repository double whose record answers lookups but disappears
/// before any write lands, modeling a concurrent removal between the
/// service's existence check and the mutation.
pub(super) struct VanishingRepository {
    record: Student,
}

impl VanishingRepository {
    pub(super) fn new(record: Student) -> Self {
        Self { record }
    }
}

impl StudentRepository for VanishingRepository {
    fn insert(&self, student: Student) -> Result<Student, RepositoryError> {
        Ok(student)
    }

    fn update(&self, _student: Student) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn remove(&self, _id: StudentId) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn first_matching(
        &self,
        predicate: &dyn Fn(&Student) -> bool,
    ) -> Result<Option<Student>, RepositoryError> {
        Ok(Some(&self.record).filter(|record| predicate(record)).cloned())
    }

    fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(vec![self.record.clone()])
    }
}

/// Repository double modeling a backing store that cannot answer.
pub(super) struct UnavailableRepository;

impl StudentRepository for UnavailableRepository {
    fn insert(&self, _student: Student) -> Result<Student, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _student: Student) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: StudentId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn first_matching(
        &self,
        _predicate: &dyn Fn(&Student) -> bool,
    ) -> Result<Option<Student>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
