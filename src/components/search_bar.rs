//! Search Bar Component
//!
//! Narrows the item grid by name. An empty search shows everything again.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (text, set_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.search(text.get_untracked().trim().to_string());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="search"
                placeholder="search items"
                class="search-input"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="search-submit">"Search"</button>
        </form>
    }
}
