use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page. The site only has one real route, so everything points home.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-page">
            <div class="not-found-card">
                <div class="not-found-code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p>
                    "The page you're looking for doesn't exist. The suite is waiting for you back on the main page."
                </p>
                <button
                    class="not-found-home"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/", Default::default());
                        }
                    }
                >
                    "🏠 Back to the suite"
                </button>
            </div>
        </div>
    }
}
