//! Request tracking middleware
//!
//! Provides request ID generation, propagation, and sensitive-header
//! masking for the server's middleware stack.

use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};

/// Sensitive headers that should be masked in logs
pub const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
    "x-auth-token",
];

/// Create a request ID layer that generates UUID request IDs
pub fn request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Create a request ID propagation layer
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Create a sensitive headers layer
pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    let headers = SENSITIVE_HEADERS
        .iter()
        .map(|h| h.parse().expect("valid header name"))
        .collect::<Vec<_>>();

    SetSensitiveRequestHeadersLayer::new(headers)
}
