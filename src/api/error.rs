//! API Errors

use std::fmt;

use wasm_bindgen::{JsCast, JsValue};

use crate::models::DraftError;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS, CORS rejection, or any other fetch rejection
    Network(String),
    /// The body was not the expected JSON
    Parse(String),
    /// The request was cancelled through its `AbortSignal`
    Aborted,
    /// The listing draft could not be turned into a request
    Draft(DraftError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Parse(msg) => write!(f, "invalid response body: {}", msg),
            ApiError::Aborted => write!(f, "request aborted"),
            ApiError::Draft(err) => write!(f, "incomplete listing: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
            if exception.name() == "AbortError" {
                return ApiError::Aborted;
            }
            return ApiError::Network(exception.message());
        }
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return ApiError::Network(String::from(err.message()));
        }
        ApiError::Network(format!("{:?}", value))
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        ApiError::Draft(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
