//! Frontend Models
//!
//! Data structures matching the backend's JSON, plus the listing draft.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "imageName")]
    pub image_name: String,
}

/// `{ "items": [...] }` envelope returned by `/items` and `/search`
#[derive(Debug, Default, Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    items: Option<Vec<Item>>,
}

/// Decode a list response. A missing or null `items` field is an empty list.
pub fn parse_items(body: &str) -> Result<Vec<Item>, serde_json::Error> {
    let envelope: ItemsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.items.unwrap_or_default())
}

// ========================
// Listing Draft
// ========================

/// Multipart field names, in the order the server reads them
pub const LISTING_FIELDS: [&str; 3] = ["name", "category", "image"];

/// Form state for a new listing. `F` is the file handle type
/// (`web_sys::File` in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft<F> {
    pub name: String,
    pub category: String,
    pub image: Option<F>,
}

impl<F> Default for ListingDraft<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            image: None,
        }
    }
}

/// One multipart field value
#[derive(Debug, PartialEq)]
pub enum ListingPart<'a, F> {
    Text(&'a str),
    File(&'a F),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingName,
    MissingImage,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingName => write!(f, "item name is required"),
            DraftError::MissingImage => write!(f, "an image file is required"),
        }
    }
}

impl std::error::Error for DraftError {}

impl<F> ListingDraft<F> {
    /// Update a text field by its input name. Unknown names are ignored.
    pub fn set_text(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "category" => self.category = value,
            _ => {}
        }
    }

    /// Name and image are required; category may be empty.
    pub fn validate(&self) -> Result<(), DraftError> {
        self.required_image().map(|_| ())
    }

    fn required_image(&self) -> Result<&F, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::MissingName);
        }
        self.image.as_ref().ok_or(DraftError::MissingImage)
    }

    /// Multipart fields in `LISTING_FIELDS` order
    pub fn parts(&self) -> Result<[(&'static str, ListingPart<'_, F>); 3], DraftError> {
        let image = self.required_image()?;
        Ok([
            (LISTING_FIELDS[0], ListingPart::Text(&self.name)),
            (LISTING_FIELDS[1], ListingPart::Text(&self.category)),
            (LISTING_FIELDS[2], ListingPart::File(image)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_parse_items() {
        let body = r#"{"items":[
            {"id":1,"name":"Book","category":"Media","image_name":"a.jpg"},
            {"id":2,"name":"Lamp","category":"Home","image_name":"b.jpg"},
            {"id":2,"name":"Lamp","category":"Home","image_name":"b.jpg"}
        ]}"#;
        let items = parse_items(body).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].name, "Lamp");
        assert_eq!(items[2].id, 2);
    }

    #[test]
    fn test_missing_or_null_items_is_empty() {
        assert!(parse_items("{}").unwrap().is_empty());
        assert!(parse_items(r#"{"items":null}"#).unwrap().is_empty());
        assert!(parse_items(r#"{"message":"Hello, world!"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body_is_error() {
        assert!(parse_items("not json").is_err());
        assert!(parse_items("").is_err());
        assert!(parse_items(r#"{"items":"nope"}"#).is_err());
        assert!(parse_items(r#"{"items":[{"name":"no id"}]}"#).is_err());
    }

    #[test]
    fn test_image_name_alias() {
        let items = parse_items(r#"{"items":[{"id":3,"name":"Cup","category":"","imageName":"c.png"}]}"#).unwrap();
        assert_eq!(items[0].image_name, "c.png");
    }

    #[test]
    fn test_book_card_fields() {
        let body = r#"{"items":[{"id":1,"name":"Book","category":"Media","image_name":"a.jpg"}]}"#;
        let items = parse_items(body).unwrap();
        let cfg = ApiConfig::default();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Book");
        assert_eq!(items[0].category, "Media");
        assert!(cfg.image_url(items[0].id).ends_with("/image/1"));
    }

    #[test]
    fn test_draft_requires_name_and_image() {
        let mut draft = ListingDraft::<String>::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingName));

        draft.set_text("name", "Book".to_string());
        assert_eq!(draft.validate(), Err(DraftError::MissingImage));
        assert!(draft.parts().is_err());

        draft.image = Some("a.jpg".to_string());
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_empty_name_with_image_is_rejected() {
        let draft = ListingDraft {
            name: String::new(),
            category: "Media".to_string(),
            image: Some("a.jpg".to_string()),
        };
        assert_eq!(draft.parts().unwrap_err(), DraftError::MissingName);
    }

    #[test]
    fn test_parts_order() {
        let mut draft = ListingDraft::default();
        draft.set_text("name", "Book".to_string());
        draft.set_text("unknown", "ignored".to_string());
        draft.image = Some(42u8);

        let parts = draft.parts().unwrap();
        let names: Vec<_> = parts.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, LISTING_FIELDS);
        assert_eq!(parts[0].1, ListingPart::Text("Book"));
        assert_eq!(parts[1].1, ListingPart::Text(""));
        assert_eq!(parts[2].1, ListingPart::File(&42u8));
    }
}
