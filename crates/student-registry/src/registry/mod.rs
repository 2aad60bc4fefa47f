//! Student roster management.
//!
//! The registry keeps the authoritative collection of student records
//! behind the [`StudentRepository`] seam so the service logic can be
//! exercised against test doubles. [`StudentService`] carries all of
//! the behavior: lookups, uniqueness-checked insertion, in-place
//! update, removal, and the approval predicate.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{seed_roster, Student, StudentId};
pub use repository::{InMemoryStudentRepository, RepositoryError, StudentRepository};
pub use router::student_router;
pub use service::{ApprovalSelector, RegistryError, StudentService, APPROVAL_THRESHOLD};
