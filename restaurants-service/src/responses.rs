//! HTTP response builders with correct status codes
//!
//! Every success body this API speaks is wrapped in the `{ "data": ... }`
//! envelope. The builders here pair that envelope with the right status
//! code per RFC 9110 (HTTP Semantics):
//!
//! - **200 OK** - Standard successful response ([`Data`])
//! - **201 Created** - Resource successfully created ([`Created`])
//! - **204 No Content** - Successful operation with no response body ([`NoContent`])

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// The `{ "data": ... }` envelope every success body is wrapped in
#[derive(Debug, Serialize)]
struct DataEnvelope<T> {
    data: T,
}

// ============================================================================
// 200 OK
// ============================================================================

/// HTTP 200 response carrying the `{ data }` envelope
#[derive(Debug)]
pub struct Data<T> {
    data: T,
}

impl<T> Data<T> {
    /// Create a new 200 OK response
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for Data<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(DataEnvelope { data: self.data })).into_response()
    }
}

// ============================================================================
// 201 Created
// ============================================================================

/// HTTP 201 Created response
///
/// Used when a new resource has been successfully created. Optionally
/// includes a `Location` header pointing to the new resource.
#[derive(Debug)]
pub struct Created<T> {
    data: T,
    location: Option<String>,
}

impl<T> Created<T> {
    /// Create a new 201 Created response
    pub fn new(data: T) -> Self {
        Self {
            data,
            location: None,
        }
    }

    /// Add a Location header pointing to the created resource
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response =
            (StatusCode::CREATED, Json(DataEnvelope { data: self.data })).into_response();

        // Add Location header if provided
        if let Some(location) = self.location {
            if let Ok(header_value) = HeaderValue::from_str(&location) {
                response
                    .headers_mut()
                    .insert(header::LOCATION, header_value);
            }
        }

        response
    }
}

// ============================================================================
// 204 No Content
// ============================================================================

/// HTTP 204 No Content response
///
/// Used when an operation succeeds but there's no response body to return.
#[derive(Debug, Clone, Copy)]
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestData {
        id: u64,
        name: String,
    }

    #[test]
    fn test_data_response() {
        let data = TestData {
            id: 1,
            name: "Test".to_string(),
        };
        let response = Data::new(data).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_created_response_with_location() {
        let data = TestData {
            id: 1,
            name: "Test".to_string(),
        };
        let response = Created::new(data)
            .with_location("/restaurants/1")
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/restaurants/1"
        );
    }

    #[test]
    fn test_no_content_response() {
        let response = NoContent.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_envelope_shape() {
        let value = serde_json::to_value(DataEnvelope {
            data: Vec::<u8>::new(),
        })
        .expect("serialize");
        assert_eq!(value, serde_json::json!({ "data": [] }));
    }
}
