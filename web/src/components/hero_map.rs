use leptos::prelude::*;

/// Street-view embed of the property with the gallery call-to-action layered
/// on top. The embed URL is opaque config; the frame renders whatever it
/// returns.
#[component]
pub fn HeroMap(
    map_embed_url: String,
    on_open_gallery: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="hero-map">
            {view! {
                <iframe
                    class="hero-map-frame"
                    src=map_embed_url
                    allowfullscreen=true
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
            }.attr("loading", "lazy")}
            <div class="hero-map-overlay">
                <button
                    class="hero-overlay-button"
                    on:click=move |_| on_open_gallery()
                >
                    "🖼 View Gallery"
                </button>
                <button class="hero-overlay-button">
                    "View 360° Tour"
                </button>
            </div>
        </div>
    }
}
