//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{DoctorService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Doctor service
    pub doctor_service: Arc<dyn DoctorService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the state from a database, wiring services through the
    /// service container.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            doctor_service: container.doctors(),
            database,
        }
    }
}
