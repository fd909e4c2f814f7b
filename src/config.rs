//! API Configuration
//!
//! Endpoint bases resolved at build time from environment variables.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const DEFAULT_API_URL: &str = "http://127.0.0.1:9000";
/// Flat grey square
const DEFAULT_PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='256' height='256'%3E%3Crect width='100%25' height='100%25' fill='%23e5e7eb'/%3E%3C/svg%3E";

/// Characters escaped inside a query-string value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the backend lives
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base for `/items` and `/search`
    pub api_base: String,
    /// Base for `/image/{id}`
    pub image_base: String,
    /// Shown when an item image fails to load
    pub placeholder_image: String,
}

impl ApiConfig {
    /// Read `REACT_APP_API_URL` (or `API_URL`), `IMAGE_URL` and
    /// `PLACEHOLDER_IMAGE` as baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            first_set(option_env!("REACT_APP_API_URL"), option_env!("API_URL")),
            option_env!("IMAGE_URL"),
            option_env!("PLACEHOLDER_IMAGE"),
        )
    }

    pub fn from_values(api: Option<&str>, image: Option<&str>, placeholder: Option<&str>) -> Self {
        let api_base = non_empty(api).unwrap_or(DEFAULT_API_URL);
        let api_base = trim_base(api_base);
        let image_base = non_empty(image).map(trim_base).unwrap_or_else(|| api_base.clone());
        let placeholder_image = non_empty(placeholder)
            .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
            .to_string();

        Self { api_base, image_base, placeholder_image }
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.api_base)
    }

    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}/search?keyword={}",
            self.api_base,
            utf8_percent_encode(keyword, QUERY_VALUE)
        )
    }

    pub fn image_url(&self, id: i64) -> String {
        format!("{}/image/{}", self.image_base, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

/// `preferred` unless it is unset or blank
fn first_set<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    non_empty(preferred).or_else(|| non_empty(fallback))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.api_base, "http://127.0.0.1:9000");
        assert_eq!(cfg.image_base, "http://127.0.0.1:9000");
        assert!(cfg.placeholder_image.starts_with("data:image/svg+xml,"));
        assert_eq!(cfg.items_url(), "http://127.0.0.1:9000/items");
    }

    #[test]
    fn test_image_base_follows_api_base() {
        let cfg = ApiConfig::from_values(Some("https://api.example.com/"), None, None);
        assert_eq!(cfg.api_base, "https://api.example.com");
        assert_eq!(cfg.image_url(7), "https://api.example.com/image/7");
    }

    #[test]
    fn test_build_env_reads_react_app_api_url() {
        let expected = first_set(option_env!("REACT_APP_API_URL"), option_env!("API_URL"))
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        assert_eq!(ApiConfig::from_build_env().api_base, expected);
    }

    #[test]
    fn test_react_app_api_url_wins_over_api_url() {
        let picked = first_set(Some("http://shop.example:8080"), Some("http://other:1"));
        assert_eq!(picked, Some("http://shop.example:8080"));
        let cfg = ApiConfig::from_values(picked, None, None);
        assert_eq!(cfg.api_base, "http://shop.example:8080");
        assert_eq!(cfg.items_url(), "http://shop.example:8080/items");

        assert_eq!(first_set(Some(" "), Some("http://other:1")), Some("http://other:1"));
        assert_eq!(first_set(None, None), None);
    }

    #[test]
    fn test_placeholder_override() {
        let cfg = ApiConfig::from_values(None, None, Some("/logo192.png"));
        assert_eq!(cfg.placeholder_image, "/logo192.png");
    }

    #[test]
    fn test_separate_image_host() {
        let cfg = ApiConfig::from_values(None, Some("http://localhost:9000//"), Some(""));
        assert_eq!(cfg.items_url(), "http://127.0.0.1:9000/items");
        assert_eq!(cfg.image_url(1), "http://localhost:9000/image/1");
        assert_eq!(cfg.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let cfg = ApiConfig::default();
        assert_eq!(
            cfg.search_url("red shoes&size=2"),
            "http://127.0.0.1:9000/search?keyword=red%20shoes%26size%3D2"
        );
        assert!(cfg.search_url("本").starts_with("http://127.0.0.1:9000/search?keyword=%E6"));
    }
}
