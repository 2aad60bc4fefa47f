use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::domain::{Student, StudentId};
use super::repository::{RepositoryError, StudentRepository};

/// The passing grade. A score of exactly 51 counts as approved; the
/// boundary is pinned by the approval tests.
pub const APPROVAL_THRESHOLD: i32 = 51;

/// Service owning the roster behavior: lookups, uniqueness-checked
/// insertion, in-place update, removal, and the approval predicate.
pub struct StudentService<R> {
    repository: Arc<R>,
}

/// Identifies the student an approval check targets. Exactly one
/// strategy per call; a supplied record is evaluated directly without
/// consulting the store.
#[derive(Debug, Clone)]
pub enum ApprovalSelector {
    ById(StudentId),
    ByName(String),
    ByRecord(Student),
}

impl ApprovalSelector {
    /// Resolve optional inputs into a selector. Precedence when several
    /// are supplied: record, then id, then name. An empty name counts
    /// as absent.
    pub fn from_parts(
        id: Option<StudentId>,
        name: Option<String>,
        record: Option<Student>,
    ) -> Result<Self, RegistryError> {
        if let Some(student) = record {
            Ok(Self::ByRecord(student))
        } else if let Some(id) = id {
            Ok(Self::ById(id))
        } else if let Some(name) = name.filter(|name| !name.is_empty()) {
            Ok(Self::ByName(name))
        } else {
            Err(RegistryError::MissingSelector)
        }
    }
}

impl<R> StudentService<R>
where
    R: StudentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All records in insertion order. An empty roster is a valid,
    /// non-error result.
    pub fn list(&self) -> Result<Vec<Student>, RegistryError> {
        Ok(self.repository.list()?)
    }

    pub fn get_by_id(&self, id: StudentId) -> Result<Student, RegistryError> {
        self.find_by_selector(id, |student, id| student.id == *id, "id")
    }

    /// Case-insensitive exact match on the stored name. Case folding is
    /// Unicode-aware, so accented names match regardless of casing.
    pub fn get_by_name(&self, name: &str) -> Result<Student, RegistryError> {
        self.find_by_selector(
            name,
            |student, name| student.name.to_lowercase() == name.to_lowercase(),
            "name",
        )
    }

    /// Insert a new record. Fails when the id is already taken; the
    /// stored record is returned unchanged.
    pub fn create(&self, student: Student) -> Result<Student, RegistryError> {
        let id = student.id;
        let stored = self
            .repository
            .insert(student)
            .map_err(|error| match error {
                RepositoryError::Conflict => RegistryError::AlreadyExists(id),
                other => RegistryError::Repository(other),
            })?;
        info!(%id, "student created");
        Ok(stored)
    }

    /// Overwrite the name and score of the record with the same id. The
    /// id itself is never altered; an absent id propagates the lookup
    /// failure. Repeating the call with identical values is idempotent.
    pub fn update(&self, student: Student) -> Result<Student, RegistryError> {
        let existing = self.get_by_id(student.id)?;
        let updated = Student {
            id: existing.id,
            name: student.name,
            score: student.score,
        };
        self.repository
            .update(updated.clone())
            .map_err(|error| translate_missing_key(error, updated.id))?;
        info!(id = %updated.id, "student updated");
        Ok(updated)
    }

    /// Remove the record with the given id. Either succeeds with `true`
    /// or propagates the lookup failure; there is no false path.
    pub fn delete(&self, id: StudentId) -> Result<bool, RegistryError> {
        let existing = self.get_by_id(id)?;
        self.repository
            .remove(existing.id)
            .map_err(|error| translate_missing_key(error, existing.id))?;
        info!(%id, "student deleted");
        Ok(true)
    }

    /// Whether the selected student meets the passing grade.
    pub fn is_approved(&self, selector: ApprovalSelector) -> Result<bool, RegistryError> {
        let target = match selector {
            ApprovalSelector::ByRecord(student) => student,
            ApprovalSelector::ById(id) => self.get_by_id(id)?,
            ApprovalSelector::ByName(name) => self.get_by_name(&name)?,
        };
        Ok(target.score >= APPROVAL_THRESHOLD)
    }

    /// First record satisfying `selector(record, value)`. The field
    /// name and the searched value travel into the not-found error so
    /// callers see which lookup failed.
    fn find_by_selector<T>(
        &self,
        value: T,
        selector: impl Fn(&Student, &T) -> bool,
        field: &'static str,
    ) -> Result<Student, RegistryError>
    where
        T: fmt::Display,
    {
        let found = self
            .repository
            .first_matching(&|student| selector(student, &value))?;
        found.ok_or_else(|| RegistryError::NotFound {
            field,
            value: value.to_string(),
        })
    }
}

// A record can vanish between the service's lookup and the repository
// write when the store is shared across requests; that still means the
// key is absent, not that the store failed.
fn translate_missing_key(error: RepositoryError, id: StudentId) -> RegistryError {
    match error {
        RepositoryError::NotFound => RegistryError::NotFound {
            field: "id",
            value: id.to_string(),
        },
        other => RegistryError::Repository(other),
    }
}

/// Error raised by the registry service.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("student with {field} '{value}' not found")]
    NotFound { field: &'static str, value: String },
    #[error("student with id {0} already exists")]
    AlreadyExists(StudentId),
    #[error("at least one selector must be provided")]
    MissingSelector,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
