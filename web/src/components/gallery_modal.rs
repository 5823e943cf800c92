use leptos::ev;
use leptos::prelude::*;

use crate::booking::GalleryCycle;

/// Fullscreen image gallery. Mounted only while the overlay is open, so the
/// keyboard listener below lives exactly as long as the overlay does and can
/// never stack across repeated open/close cycles.
#[component]
pub fn GalleryModal(
    gallery: RwSignal<GalleryCycle>,
    images: Vec<String>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    // Arrow keys page through the images, Escape closes. The handle is
    // removed on every exit path, including abrupt close.
    let key_handle = window_event_listener(ev::keydown, move |ev| match ev.key().as_str() {
        "ArrowRight" => gallery.update(|g| g.next()),
        "ArrowLeft" => gallery.update(|g| g.previous()),
        "Escape" => on_close(),
        _ => {}
    });
    on_cleanup(move || key_handle.remove());

    let image_count = images.len();
    let current_image = {
        let images = images.clone();
        move || images[gallery.get().index()].clone()
    };

    view! {
        <div class="modal-overlay gallery-overlay" on:click=move |_| on_close()>
            <div class="gallery-panel" on:click=|ev| ev.stop_propagation()>
                <button class="gallery-close" on:click=move |_| on_close()>
                    "×"
                </button>

                <button
                    class="gallery-nav gallery-nav-prev"
                    on:click=move |_| gallery.update(|g| g.previous())
                >
                    "‹"
                </button>
                <button
                    class="gallery-nav gallery-nav-next"
                    on:click=move |_| gallery.update(|g| g.next())
                >
                    "›"
                </button>

                <div class="gallery-counter">
                    {move || format!("{} / {}", gallery.get().index() + 1, image_count)}
                </div>

                <img
                    class="gallery-image"
                    src=current_image
                    alt=move || format!("Gallery image {}", gallery.get().index() + 1)
                />

                <div class="gallery-dots">
                    {(0..image_count)
                        .map(|i| {
                            view! {
                                <button
                                    class="gallery-dot"
                                    class:active=move || gallery.get().index() == i
                                    on:click=move |_| gallery.update(|g| g.jump_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
