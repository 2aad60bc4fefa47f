use std::sync::{Arc, Mutex};

use super::domain::{Student, StudentId};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations must hold any internal lock across the whole
/// read-modify-write sequence of `insert`, `update`, and `remove`; the
/// service layers no locking of its own on top.
pub trait StudentRepository: Send + Sync {
    fn insert(&self, student: Student) -> Result<Student, RepositoryError>;
    fn update(&self, student: Student) -> Result<(), RepositoryError>;
    fn remove(&self, id: StudentId) -> Result<(), RepositoryError>;
    fn first_matching(
        &self,
        predicate: &dyn Fn(&Student) -> bool,
    ) -> Result<Option<Student>, RepositoryError>;
    /// All records in insertion order.
    fn list(&self) -> Result<Vec<Student>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// The authoritative in-memory store. A `Vec` rather than a map: the
/// roster is small, lookups are linear scans, and listing must return
/// records in insertion order.
#[derive(Default, Clone)]
pub struct InMemoryStudentRepository {
    records: Arc<Mutex<Vec<Student>>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given roster. Duplicate ids
    /// in the roster surface as a `Conflict`.
    pub fn with_roster(
        roster: impl IntoIterator<Item = Student>,
    ) -> Result<Self, RepositoryError> {
        let repository = Self::default();
        for student in roster {
            repository.insert(student)?;
        }
        Ok(repository)
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn insert(&self, student: Student) -> Result<Student, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == student.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(student.clone());
        Ok(student)
    }

    fn update(&self, student: Student) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == student.id) {
            Some(existing) => {
                *existing = student;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn remove(&self, id: StudentId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter().position(|existing| existing.id == id) {
            Some(index) => {
                guard.remove(index);
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn first_matching(
        &self,
        predicate: &dyn Fn(&Student) -> bool,
    ) -> Result<Option<Student>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|student| predicate(student)).cloned())
    }

    fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}
