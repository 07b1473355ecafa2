//! Doctor handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::validators::{email_address, not_blank, registration_code, zip_code};
use crate::api::AppState;
use crate::config::{DOCTORS_PATH, MSG_NOT_NULL};
use crate::domain::{
    Address, AddressUpdate, DoctorDetail, DoctorSummary, DoctorUpdate, NewDoctor, Specialty,
};
use crate::errors::{AppError, AppResult, FieldViolation};
use crate::types::{Created, NoContent, Page, PageParams, PageRequest};

/// Address of a doctor being registered
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Rua das Flores")]
    pub street: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "100")]
    pub number: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Centro")]
    pub district: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Brasilia")]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "DF")]
    pub state: String,
    /// Eight digits, no separator
    #[serde(default)]
    #[validate(custom(function = "zip_code"))]
    #[schema(example = "70000000")]
    pub zip_code: String,
    pub complement: Option<String>,
}

impl From<AddressRequest> for Address {
    fn from(req: AddressRequest) -> Self {
        Self {
            street: req.street,
            number: req.number,
            district: req.district,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            complement: req.complement.filter(|c| !c.trim().is_empty()),
        }
    }
}

/// Doctor registration request
///
/// Missing text fields deserialize as empty so they are reported as
/// field violations rather than as an unreadable body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDoctorRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Maria Souza")]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "email_address"))]
    #[schema(example = "maria.souza@voll.med")]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "61999998888")]
    pub phone: String,
    /// Professional registration code (CRM), 4 to 6 digits
    #[serde(default)]
    #[validate(custom(function = "registration_code"))]
    #[schema(example = "123456")]
    pub registration: String,
    #[validate(required(message = "must not be null"))]
    pub specialty: Option<Specialty>,
    #[validate(required(message = "must not be null"), nested)]
    pub address: Option<AddressRequest>,
}

impl TryFrom<CreateDoctorRequest> for NewDoctor {
    type Error = AppError;

    fn try_from(req: CreateDoctorRequest) -> Result<Self, Self::Error> {
        let specialty = req
            .specialty
            .ok_or_else(|| AppError::invalid_field("specialty", MSG_NOT_NULL))?;
        let address = req
            .address
            .ok_or_else(|| AppError::invalid_field("address", MSG_NOT_NULL))?;

        Ok(NewDoctor {
            name: req.name,
            email: req.email,
            phone: req.phone,
            registration: req.registration,
            specialty,
            address: address.into(),
        })
    }
}

/// Doctor update request; absent or blank fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDoctorRequest {
    #[validate(required(message = "must not be null"))]
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Maria Lima")]
    pub name: Option<String>,
    #[schema(example = "61988887777")]
    pub phone: Option<String>,
    /// Only considered when `street` is present and non-blank
    pub address: Option<AddressUpdate>,
}

/// Create doctor routes
pub fn doctor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_doctor).get(list_doctors).put(update_doctor),
        )
        .route("/:id", get(get_doctor).delete(delete_doctor))
}

/// Register a new doctor
#[utoipa::path(
    post,
    path = "/medicos",
    tag = "Doctors",
    security(("bearer-key" = [])),
    request_body = CreateDoctorRequest,
    responses(
        (status = 201, description = "Doctor registered", body = DoctorDetail,
            headers(("Location" = String, description = "URI of the new doctor"))),
        (status = 400, description = "Validation error", body = [FieldViolation])
    )
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDoctorRequest>,
) -> AppResult<Created<DoctorDetail>> {
    let doctor = state
        .doctor_service
        .register_doctor(NewDoctor::try_from(payload)?)
        .await?;

    let location = format!("{}/{}", DOCTORS_PATH, doctor.id);
    Ok(Created::new(location, DoctorDetail::from(doctor)))
}

/// List active doctors, one page at a time
#[utoipa::path(
    get,
    path = "/medicos",
    tag = "Doctors",
    security(("bearer-key" = [])),
    params(PageParams),
    responses(
        (status = 200, description = "Page of active doctors", body = DoctorSummaryPage),
        (status = 400, description = "Unknown sort property", body = [FieldViolation])
    )
)]
pub async fn list_doctors(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<DoctorSummary>>> {
    let request = PageRequest::try_from(params)?;
    let page = state.doctor_service.list_doctors(request).await?;

    Ok(Json(page.map(DoctorSummary::from)))
}

/// Update name, phone and/or address of a doctor
#[utoipa::path(
    put,
    path = "/medicos",
    tag = "Doctors",
    security(("bearer-key" = [])),
    request_body = UpdateDoctorRequest,
    responses(
        (status = 200, description = "Doctor after the update", body = DoctorDetail),
        (status = 400, description = "Validation error", body = [FieldViolation]),
        (status = 404, description = "Doctor not found")
    )
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateDoctorRequest>,
) -> AppResult<Json<DoctorDetail>> {
    let id = payload
        .id
        .ok_or_else(|| AppError::invalid_field("id", MSG_NOT_NULL))?;

    let update = DoctorUpdate {
        name: payload.name,
        phone: payload.phone,
        address: payload.address,
    };

    let doctor = state.doctor_service.update_doctor(id, update).await?;
    Ok(Json(DoctorDetail::from(doctor)))
}

/// Soft delete a doctor
#[utoipa::path(
    delete,
    path = "/medicos/{id}",
    tag = "Doctors",
    security(("bearer-key" = [])),
    params(
        ("id" = i64, Path, description = "Doctor ID")
    ),
    responses(
        (status = 204, description = "Doctor deactivated"),
        (status = 404, description = "Doctor not found")
    )
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.doctor_service.deactivate_doctor(id).await?;
    Ok(NoContent)
}

/// Get a doctor by ID
#[utoipa::path(
    get,
    path = "/medicos/{id}",
    tag = "Doctors",
    security(("bearer-key" = [])),
    params(
        ("id" = i64, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Doctor details", body = DoctorDetail),
        (status = 404, description = "Doctor not found")
    )
)]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DoctorDetail>> {
    let doctor = state.doctor_service.get_doctor(id).await?;
    Ok(Json(DoctorDetail::from(doctor)))
}
