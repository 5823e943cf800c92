use leptos::prelude::*;
use shared_types::ListingInfo;

use crate::content;

/// The message shared to each target: listing name plus the page URL. The
/// URL is only readable client-side; server-rendered links fall back to the
/// bare listing name until hydration replaces them.
fn share_message(info: &ListingInfo) -> String {
    let page_url = {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().href().ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None::<String>
        }
    };

    match page_url {
        Some(url) => format!("{} — {}", info.name, url),
        None => info.name.clone(),
    }
}

#[component]
pub fn ShareModal(
    info: ListingInfo,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let targets = content::share_targets();
    let message = share_message(&info);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="share-panel" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Share this property"</h2>
                    <button class="modal-close" on:click=move |_| on_close()>
                        "×"
                    </button>
                </div>
                <div class="share-grid">
                    {targets
                        .into_iter()
                        .map(|target| {
                            let href = if target.share_url.is_empty() {
                                target.fallback_url.clone()
                            } else {
                                format!(
                                    "{}{}",
                                    target.share_url,
                                    urlencoding::encode(&message),
                                )
                            };

                            view! {
                                <a
                                    class="share-tile"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <span class="share-icon">{target.icon}</span>
                                    <span class="share-name">{target.name}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
