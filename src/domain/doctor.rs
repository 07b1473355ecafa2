//! Doctor domain entity and related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Medical specialty of a doctor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    Orthopedics,
    Cardiology,
    Gynecology,
    Dermatology,
}

impl Specialty {
    /// Stored/serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Orthopedics => "ORTHOPEDICS",
            Specialty::Cardiology => "CARDIOLOGY",
            Specialty::Gynecology => "GYNECOLOGY",
            Specialty::Dermatology => "DERMATOLOGY",
        }
    }
}

impl FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORTHOPEDICS" => Ok(Specialty::Orthopedics),
            "CARDIOLOGY" => Ok(Specialty::Cardiology),
            "GYNECOLOGY" => Ok(Specialty::Gynecology),
            "DERMATOLOGY" => Ok(Specialty::Dermatology),
            other => Err(format!("unknown specialty '{}'", other)),
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address embedded in a doctor record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[schema(example = "Rua das Flores")]
    pub street: String,
    #[schema(example = "100")]
    pub number: String,
    #[schema(example = "Centro")]
    pub district: String,
    #[schema(example = "Brasilia")]
    pub city: String,
    #[schema(example = "DF")]
    pub state: String,
    #[schema(example = "70000000")]
    pub zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

impl Address {
    /// Merge a sparse address update.
    ///
    /// The street decides whether the update is considered at all: when it is
    /// missing or blank the address stays exactly as it was.
    pub fn apply_update(&mut self, update: AddressUpdate) {
        let Some(street) = non_blank(update.street) else {
            return;
        };

        self.street = street;
        if let Some(number) = non_blank(update.number) {
            self.number = number;
        }
        if let Some(district) = non_blank(update.district) {
            self.district = district;
        }
        if let Some(city) = non_blank(update.city) {
            self.city = city;
        }
        if let Some(state) = non_blank(update.state) {
            self.state = state;
        }
        if let Some(zip_code) = non_blank(update.zip_code) {
            self.zip_code = zip_code;
        }
        if let Some(complement) = non_blank(update.complement) {
            self.complement = Some(complement);
        }
    }
}

/// Sparse address carried by an update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct AddressUpdate {
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub complement: Option<String>,
}

/// Sparse set of mutable doctor fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<AddressUpdate>,
}

/// Doctor data before the store has assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration: String,
    pub specialty: Specialty,
    pub address: Address,
}

/// Doctor domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Professional registration code (CRM)
    pub registration: String,
    pub specialty: Specialty,
    pub address: Address,
    /// Soft delete marker (false = deleted)
    pub active: bool,
}

impl Doctor {
    /// Copy over every supplied, non-blank field of `update`.
    pub fn apply_update(&mut self, update: DoctorUpdate) {
        if let Some(name) = non_blank(update.name) {
            self.name = name;
        }
        if let Some(phone) = non_blank(update.phone) {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address.apply_update(address);
        }
    }

    /// Soft delete the doctor
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Doctor detail response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorDetail {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Maria Souza")]
    pub name: String,
    #[schema(example = "maria.souza@voll.med")]
    pub email: String,
    #[schema(example = "61999998888")]
    pub phone: String,
    #[schema(example = "123456")]
    pub registration: String,
    pub specialty: Specialty,
    pub address: Address,
    pub active: bool,
}

impl From<Doctor> for DoctorDetail {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            phone: doctor.phone,
            registration: doctor.registration,
            specialty: doctor.specialty,
            address: doctor.address,
            active: doctor.active,
        }
    }
}

/// Doctor listing entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorSummary {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Maria Souza")]
    pub name: String,
    #[schema(example = "maria.souza@voll.med")]
    pub email: String,
    #[schema(example = "123456")]
    pub registration: String,
    pub specialty: Specialty,
}

impl From<Doctor> for DoctorSummary {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            registration: doctor.registration,
            specialty: doctor.specialty,
        }
    }
}
