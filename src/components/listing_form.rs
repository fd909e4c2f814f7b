//! Listing Form Component
//!
//! Form for putting a new item up for sale (name, category, image).

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::api::{self, ApiError, ApiStatus};
use crate::config::ApiConfig;
use crate::models::ListingDraft;
use crate::requests::RequestTracker;

fn event_input(ev: &web_sys::Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// Any answered POST counts as completed, whatever its status
fn listing_completed(result: &Result<ApiStatus, ApiError>) -> bool {
    result.is_ok()
}

/// Upload form. The draft is kept after submission.
#[component]
pub fn ListingForm(
    /// Called once per answered POST, whatever its status
    on_listing_completed: Callback<()>,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().expect("ApiConfig should be provided");
    let draft = RwSignal::new_local(ListingDraft::<File>::default());
    let tracker = StoredValue::new(RequestTracker::new());

    let on_value_change = move |ev: web_sys::Event| {
        if let Some(input) = event_input(&ev) {
            draft.update(|d| d.set_text(&input.name(), input.value()));
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        if let Some(input) = event_input(&ev) {
            let file = input.files().and_then(|files| files.get(0));
            draft.update(|d| d.image = file);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if let Err(e) = current.validate() {
            web_sys::console::warn_1(&format!("[Listing] Not submitted: {}", e).into());
            return;
        }

        let config = config.clone();
        spawn_local(async move {
            let result = api::create_item(&config, &current).await;
            if !tracker.try_with_value(RequestTracker::is_live).unwrap_or(false) {
                return;
            }

            match &result {
                Ok(status) => {
                    web_sys::console::log_1(&format!("[Listing] POST status: {}", status.status_text).into());
                    if !status.is_success() {
                        web_sys::console::warn_1(
                            &format!("[Listing] Server answered {} {}", status.status, status.status_text).into(),
                        );
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Listing] POST error: {}", e).into());
                }
            }
            if listing_completed(&result) {
                on_listing_completed.run(());
            }
        });
    };

    on_cleanup(move || {
        tracker.try_update_value(|t| t.retire());
    });

    view! {
        <div class="listing">
            <form on:submit=on_submit>
                <div class="listing-panel">
                    <h2 class="listing-title">"Add Item"</h2>
                    <input
                        type="text"
                        name="name"
                        id="name"
                        placeholder="item name"
                        class="listing-input"
                        on:input=on_value_change
                        required=true
                    />
                    <input
                        type="text"
                        name="category"
                        id="category"
                        placeholder="category"
                        class="listing-input"
                        on:input=on_value_change
                    />
                    <input
                        type="file"
                        name="image"
                        id="image"
                        accept="image/*"
                        class="listing-file"
                        on:change=on_file_change
                        required=true
                    />
                    <button type="submit" class="listing-submit">"List this item"</button>
                </div>
            </form>
        </div>
    }
}
