//! Item List Component
//!
//! Card grid of every listed item, refetched whenever `reload` turns true.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::api::{self, ApiError};
use crate::components::ItemCard;
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::Item;
use crate::requests::RequestTracker;

#[component]
pub fn ItemList(
    /// Fetch when this is set to true
    #[prop(into)]
    reload: Signal<bool>,
    /// Called after a successful load so the parent can clear `reload`
    on_load_completed: Callback<()>,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().expect("ApiConfig should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<Item>::new());
    let tracker = StoredValue::new(RequestTracker::new());
    let in_flight = StoredValue::new_local(None::<AbortController>);

    Effect::new(move |_| {
        let flag = reload.get();
        let Some(ticket) = tracker.try_update_value(|t| t.on_reload(flag)).flatten() else {
            return;
        };

        // Supersede whatever is still loading
        let controller = AbortController::new().ok();
        let abort_signal = controller.as_ref().map(|c| c.signal());
        in_flight.update_value(|slot| {
            if let Some(previous) = std::mem::replace(slot, controller) {
                previous.abort();
            }
        });

        let config = config.clone();
        let keyword = ctx.keyword.get_untracked();
        web_sys::console::log_1(&format!("[ItemList] Loading items, keyword={:?}", keyword).into());

        spawn_local(async move {
            let result = api::load_items(&config, &keyword, abort_signal.as_ref()).await;

            let current = tracker.try_with_value(|t| t.is_current(ticket)).unwrap_or(false);
            if !current {
                return;
            }

            match result {
                Ok(loaded) => {
                    match serde_wasm_bindgen::to_value(&loaded) {
                        Ok(data) => web_sys::console::log_2(&"[ItemList] GET success:".into(), &data),
                        Err(_) => web_sys::console::log_1(&format!("[ItemList] GET success: {} items", loaded.len()).into()),
                    }
                    set_items.set(loaded);
                    on_load_completed.run(());
                }
                Err(ApiError::Aborted) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("[ItemList] GET error: {}", e).into());
                }
            }
        });
    });

    on_cleanup(move || {
        tracker.try_update_value(|t| t.retire());
        in_flight.try_update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        });
    });

    view! {
        <div class="item-grid">
            {move || items.get().into_iter().map(|item| view! { <ItemCard item=item /> }).collect_view()}
        </div>
    }
}
