//! Doctor service - Handles doctor-related use cases.
//!
//! Writes go through a Unit of Work transaction; reads use the pooled
//! repository directly.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Doctor, DoctorUpdate, NewDoctor};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{Page, PageRequest};
use crate::with_transaction;

/// Doctor service trait for dependency injection.
#[async_trait]
pub trait DoctorService: Send + Sync {
    /// Register a new, active doctor
    async fn register_doctor(&self, doctor: NewDoctor) -> AppResult<Doctor>;

    /// Page through active doctors
    async fn list_doctors(&self, request: PageRequest) -> AppResult<Page<Doctor>>;

    /// Get a doctor by ID, active or not
    async fn get_doctor(&self, id: i64) -> AppResult<Doctor>;

    /// Apply a sparse update and return the resulting doctor
    async fn update_doctor(&self, id: i64, update: DoctorUpdate) -> AppResult<Doctor>;

    /// Soft delete a doctor (sets active = false)
    async fn deactivate_doctor(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of DoctorService using Unit of Work.
pub struct DoctorManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DoctorManager<U> {
    /// Create new doctor service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DoctorService for DoctorManager<U> {
    async fn register_doctor(&self, doctor: NewDoctor) -> AppResult<Doctor> {
        let created = with_transaction!(self.uow, |ctx| ctx.doctors().create(doctor).await)?;

        tracing::info!(doctor_id = created.id, "Doctor registered");
        Ok(created)
    }

    async fn list_doctors(&self, request: PageRequest) -> AppResult<Page<Doctor>> {
        self.uow.doctors().list_active(request).await
    }

    async fn get_doctor(&self, id: i64) -> AppResult<Doctor> {
        self.uow.doctors().find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_doctor(&self, id: i64, update: DoctorUpdate) -> AppResult<Doctor> {
        let updated = with_transaction!(self.uow, |ctx| {
            let doctors = ctx.doctors();
            let mut doctor = doctors.find_by_id(id).await?.ok_or_not_found()?;
            doctor.apply_update(update);
            doctors.save(doctor).await
        })?;

        tracing::info!(doctor_id = id, "Doctor updated");
        Ok(updated)
    }

    async fn deactivate_doctor(&self, id: i64) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            let doctors = ctx.doctors();
            let mut doctor = doctors.find_by_id(id).await?.ok_or_not_found()?;
            doctor.deactivate();
            doctors.save(doctor).await
        })?;

        tracing::info!(doctor_id = id, "Doctor deactivated");
        Ok(())
    }
}
