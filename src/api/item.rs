//! Item Endpoints
//!
//! `GET /items`, `GET /search` and `POST /items`.

use web_sys::{AbortSignal, File, FormData, Request};

use super::{read_text, request_init, send, ApiError, ApiStatus};
use crate::config::ApiConfig;
use crate::models::{parse_items, Item, ListingDraft, ListingPart};

/// List every item
pub async fn list_items(config: &ApiConfig, signal: Option<&AbortSignal>) -> Result<Vec<Item>, ApiError> {
    get_items(&config.items_url(), signal).await
}

/// Items whose name contains `keyword`
pub async fn search_items(
    config: &ApiConfig,
    keyword: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Item>, ApiError> {
    get_items(&config.search_url(keyword), signal).await
}

/// `/items` for an empty keyword, `/search` otherwise
pub async fn load_items(
    config: &ApiConfig,
    keyword: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Item>, ApiError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        list_items(config, signal).await
    } else {
        search_items(config, keyword, signal).await
    }
}

async fn get_items(url: &str, signal: Option<&AbortSignal>) -> Result<Vec<Item>, ApiError> {
    let init = request_init("GET", signal);
    let request = Request::new_with_str_and_init(url, &init)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json")?;
    headers.set("Accept", "application/json")?;

    let response = send(&request).await?;
    let status = ApiStatus::from(&response);
    if !status.is_success() {
        web_sys::console::warn_1(
            &format!("[api] GET {} answered {} {}", url, status.status, status.status_text).into(),
        );
    }
    let body = read_text(&response).await?;
    decode_items(&body)
}

/// The body decides the outcome, not the status: an error page that is not
/// JSON fails, a JSON error body without `items` is an empty listing.
fn decode_items(body: &str) -> Result<Vec<Item>, ApiError> {
    Ok(parse_items(body)?)
}

/// Upload a new listing as multipart form data.
///
/// Any HTTP status is returned as `Ok`; only a failed exchange is an error.
/// The browser picks the multipart boundary, so no `Content-Type` is set here.
pub async fn create_item(config: &ApiConfig, draft: &ListingDraft<File>) -> Result<ApiStatus, ApiError> {
    let form = FormData::new()?;
    for (name, part) in draft.parts()? {
        match part {
            ListingPart::Text(value) => form.append_with_str(name, value)?,
            ListingPart::File(file) => form.append_with_blob_and_filename(name, file, &file.name())?,
        }
    }

    let init = request_init("POST", None);
    init.set_body(&form);
    let request = Request::new_with_str_and_init(&config.items_url(), &init)?;

    let response = send(&request).await?;
    Ok(ApiStatus::from(&response))
}
