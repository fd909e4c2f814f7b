//! Item Card Component

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::models::Item;

/// Image plus name and category for one item
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let config = use_context::<ApiConfig>().expect("ApiConfig should be provided");
    let Item { id, name, category, .. } = item;

    let image_url = config.image_url(id);
    let placeholder = config.placeholder_image;
    let (image_failed, set_image_failed) = signal(false);
    let alt = name.clone();

    view! {
        <div class="item-slot">
            <div class="item-card">
                <img
                    class="item-image"
                    src=move || if image_failed.get() { placeholder.clone() } else { image_url.clone() }
                    alt=alt
                    on:error=move |_| set_image_failed.set(true)
                />
                <div class="item-body">
                    <span class="item-name">{name}</span>
                    <br/>
                    <span class="item-category">{category}</span>
                </div>
            </div>
        </div>
    }
}
