//! Response helpers shared by the handlers.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON response with an explicit UTF-8 charset.
///
/// `axum::Json` emits `application/json` without a charset parameter; the
/// recognition client expects the charset spelled out, so every body goes
/// through this wrapper.
pub struct JsonUtf8<T>(pub T);

impl<T: Serialize> IntoResponse for JsonUtf8<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.0).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
        response
    }
}
