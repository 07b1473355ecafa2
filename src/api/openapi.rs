//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::doctor_handler;
use crate::config::SECURITY_SCHEME_BEARER;
use crate::domain::{Address, AddressUpdate, DoctorDetail, DoctorSummary, Specialty};
use crate::errors::FieldViolation;
use crate::types::DoctorSummaryPage;

/// OpenAPI documentation for the doctor records API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Voll Med API",
        version = "0.1.0",
        description = "Doctor records: registration, listing, update and soft delete",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        doctor_handler::create_doctor,
        doctor_handler::list_doctors,
        doctor_handler::update_doctor,
        doctor_handler::delete_doctor,
        doctor_handler::get_doctor,
    ),
    components(
        schemas(
            Specialty,
            Address,
            AddressUpdate,
            DoctorDetail,
            DoctorSummary,
            DoctorSummaryPage,
            FieldViolation,
            doctor_handler::AddressRequest,
            doctor_handler::CreateDoctorRequest,
            doctor_handler::UpdateDoctorRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Doctors", description = "Doctor registration and management")
    )
)]
pub struct ApiDoc;

/// Declares the bearer token scheme required by the doctor routes.
/// Token issuance and verification happen outside this service.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                SECURITY_SCHEME_BEARER,
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_doctor_route_is_documented_with_bearer_security() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();

        let collection = &json["paths"]["/medicos"];
        assert!(collection["post"].is_object());
        assert!(collection["get"].is_object());
        assert!(collection["put"].is_object());

        let item = &json["paths"]["/medicos/{id}"];
        assert!(item["get"].is_object());
        assert!(item["delete"].is_object());

        assert!(collection["post"]["security"][0]
            .get(SECURITY_SCHEME_BEARER)
            .is_some());
        assert!(json["components"]["securitySchemes"][SECURITY_SCHEME_BEARER].is_object());
    }
}
