use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use student_registry::registry::{
    seed_roster, InMemoryStudentRepository, RepositoryError, StudentService,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One shared, seeded store per process. Mutations made through one
/// request are visible to every subsequent request.
pub(crate) fn seeded_service(
) -> Result<StudentService<InMemoryStudentRepository>, RepositoryError> {
    let repository = InMemoryStudentRepository::with_roster(seed_roster())?;
    Ok(StudentService::new(Arc::new(repository)))
}
