use leptos::prelude::*;
use shared_types::ListingInfo;

use crate::components::wishlist_button::WishlistButton;

#[component]
pub fn ListingHeader(
    info: ListingInfo,
    wishlisted: RwSignal<bool>,
    on_share: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let location_line = format!("{}, {}, {}", info.locality, info.city, info.state);

    view! {
        <header class="listing-header">
            <div class="listing-header-top">
                <h1 class="listing-title">{info.name.clone()}</h1>
                <div class="listing-header-actions">
                    <WishlistButton wishlisted=wishlisted/>
                    <button
                        class="icon-button share-button"
                        on:click=move |_| on_share()
                    >
                        "↗"
                    </button>
                </div>
            </div>
            <div class="listing-meta">
                <span class="listing-rating">"★ " {format!("{:.1}", info.rating)}</span>
                <span class="listing-meta-dot">"·"</span>
                <span class="listing-reviews">{format!("{} reviews", info.review_count)}</span>
                <span class="listing-meta-dot">"·"</span>
                <span class="listing-location">"📍 " {location_line}</span>
            </div>
        </header>
    }
}
