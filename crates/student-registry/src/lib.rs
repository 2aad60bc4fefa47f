//! Student record registry: an in-memory roster with CRUD operations
//! and an approval predicate, exposed over HTTP by the companion api
//! service.

pub mod config;
pub mod error;
pub mod registry;
pub mod telemetry;
