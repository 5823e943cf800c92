use leptos::prelude::*;
use thaw::*;

use crate::booking::BookingFlow;

/// Acknowledgment dialog shown once the simulated processing step finishes.
/// Dismissing it returns the flow to idle.
#[component]
pub fn ConfirmationModal(flow: RwSignal<BookingFlow>) -> impl IntoView {
    let dismiss = move || {
        flow.update(|f| {
            f.acknowledge();
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| dismiss()>
            <div class="confirmation-panel" on:click=|ev| ev.stop_propagation()>
                <div class="confirmation-icon">"✓"</div>
                <h2>"Booking Confirmed!"</h2>
                <p class="confirmation-text">
                    "Your reservation at Case de Silver has been confirmed. Check your email for details."
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="confirmation-done"
                    on_click=move |_| dismiss()
                >
                    "Done"
                </Button>
            </div>
        </div>
    }
}
