//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod doctor;

pub use doctor::{
    Address, AddressUpdate, Doctor, DoctorDetail, DoctorSummary, DoctorUpdate, NewDoctor,
    Specialty,
};
