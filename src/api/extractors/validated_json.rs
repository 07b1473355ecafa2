//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::config::{MSG_INVALID_EMAIL, MSG_NOT_NULL};
use crate::errors::{AppError, FieldViolation};

/// Validated JSON extractor that rejects invalid payloads before the
/// handler runs.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use voll_med_api::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct ContactRequest {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn contact(ValidatedJson(payload): ValidatedJson<ContactRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(collect_violations(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validation errors into one violation per failing field.
///
/// Nested structs are reported as `parent.child`, list items as
/// `parent[index].child`. The result is sorted by field path.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    collect_into(errors, "", &mut violations);
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn collect_into(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                // Only the first failed rule of a field is reported
                if let Some(first) = errs.first() {
                    let message = message_for(&path, first);
                    out.push(FieldViolation::new(path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_into(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_into(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn message_for(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match &*error.code {
        "required" => MSG_NOT_NULL.to_string(),
        "email" => MSG_INVALID_EMAIL.to_string(),
        _ => format!("{} is invalid", field),
    }
}
