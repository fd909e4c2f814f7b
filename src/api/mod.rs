//! Backend API Bindings
//!
//! `fetch` wrappers for the marketplace REST endpoints, organized by domain.

mod error;
mod item;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, RequestMode, Response};

// Re-export all public items
pub use error::ApiError;
pub use item::*;

/// Status line of a completed request whose body is not consumed
#[derive(Debug, Clone, PartialEq)]
pub struct ApiStatus {
    pub status: u16,
    pub status_text: String,
}

impl ApiStatus {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<&Response> for ApiStatus {
    fn from(response: &Response) -> Self {
        Self {
            status: response.status(),
            status_text: response.status_text(),
        }
    }
}

/// CORS request options shared by every endpoint
fn request_init(method: &str, signal: Option<&AbortSignal>) -> RequestInit {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    init.set_signal(signal);
    init
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(request)).await?;
    value.dyn_into::<Response>().map_err(ApiError::from)
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| ApiError::Parse("response body is not text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success_range() {
        let ok = ApiStatus { status: 201, status_text: "Created".to_string() };
        let bad = ApiStatus { status: 500, status_text: "Internal Server Error".to_string() };
        let redirect = ApiStatus { status: 302, status_text: "Found".to_string() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
        assert!(!redirect.is_success());
    }
}
