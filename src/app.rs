//! Marketplace Frontend App
//!
//! Listing form above the item grid. A finished listing flips `reload`
//! to true; the grid flips it back once it has fetched.

use leptos::prelude::*;

use crate::components::{ItemList, ListingForm, SearchBar};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // Starts true so the grid loads on mount
    let (reload, set_reload) = signal(true);
    let (keyword, set_keyword) = signal(String::new());

    let ctx = AppContext::new((reload, set_reload), (keyword, set_keyword));
    let config = ApiConfig::from_build_env();
    web_sys::console::log_1(
        &format!("[App] API base {}, image base {}", config.api_base, config.image_base).into(),
    );

    // Provide context to all children
    provide_context(ctx);
    provide_context(config);

    let on_listing_completed = Callback::new(move |_: ()| ctx.request_reload());
    let on_load_completed = Callback::new(move |_: ()| ctx.mark_loaded());

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Product List"</h1>
            <div>
                <ListingForm on_listing_completed=on_listing_completed />
            </div>
            <div>
                <SearchBar />
            </div>
            <div>
                <ItemList reload=ctx.reload on_load_completed=on_load_completed />
            </div>
        </div>
    }
}
