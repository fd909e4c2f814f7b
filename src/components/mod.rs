//! UI Components
//!
//! Leptos views for the listing page.

mod item_card;
mod item_list;
mod listing_form;
mod search_bar;

pub use item_card::ItemCard;
pub use item_list::ItemList;
pub use listing_form::ListingForm;
pub use search_bar::SearchBar;
