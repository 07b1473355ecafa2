use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

/// 201 Created with a `Location` header pointing at the new resource
pub struct Created<T: Serialize> {
    pub location: String,
    pub body: T,
}

impl<T: Serialize> Created<T> {
    pub fn new(location: impl Into<String>, body: T) -> Self {
        Self {
            location: location.into(),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::CREATED,
            [(LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}

/// No content response helper (DELETE endpoints)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_sets_location_header() {
        let response = Created::new("/medicos/42", serde_json::json!({ "id": 42 })).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[LOCATION], "/medicos/42");
    }

    #[test]
    fn no_content_is_204() {
        assert_eq!(NoContent.into_response().status(), StatusCode::NO_CONTENT);
    }
}
