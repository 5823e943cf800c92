use leptos::prelude::*;

#[component]
pub fn WishlistButton(
    /// Whether the listing is currently on the guest's wishlist
    wishlisted: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="icon-button wishlist-button"
            on:click=move |_| wishlisted.update(|w| *w = !*w)
        >
            <span class=move || if wishlisted.get() {
                "wishlist-icon wishlisted"
            } else {
                "wishlist-icon"
            }>
                "❤"
            </span>
        </button>
    }
}
