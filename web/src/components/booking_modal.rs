use leptos::prelude::*;
use shared_types::ListingInfo;
use thaw::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::booking::flow::SUBMIT_DELAY_MS;
use crate::booking::rates::format_amount;
use crate::booking::{
    BookingFlow, ContactDetails, CountryCode, GuestCount, RateTable, StayDates,
};

/// The "Complete your booking" dialog: contact details on the left, stay
/// summary on the right. Confirming runs a fixed-latency simulated payment
/// step that always succeeds; the dialog cannot be dismissed while it runs.
#[component]
pub fn BookingModal(
    stay: RwSignal<StayDates>,
    guests: RwSignal<GuestCount>,
    flow: RwSignal<BookingFlow>,
    info: ListingInfo,
) -> impl IntoView {
    let rates = use_context::<RateTable>().unwrap_or_default();

    // Form state; discarded when the dialog unmounts.
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let country_code = RwSignal::new(CountryCode::default());

    let quote = Memo::new(move |_| rates.quote(stay.get().nights()));
    let is_submitting = Memo::new(move |_| flow.get().is_submitting());

    let close_modal = move || {
        // No-op while a submission is in flight; the flow guards it.
        flow.update(|f| {
            f.dismiss_form();
        });
    };

    let handle_confirm = move || {
        let started = flow.try_update(|f| f.begin_submit()).unwrap_or(false);
        if !started {
            return;
        }

        let details = ContactDetails {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            country_code: country_code.get_untracked(),
        };
        leptos::logging::log!(
            "processing reservation for {:?} ({}{})",
            details.full_name,
            details.country_code,
            details.phone,
        );

        // Simulated processing: confirm unconditionally once the fixed
        // delay elapses.
        if let Some(window) = web_sys::window() {
            let confirm = Closure::wrap(Box::new(move || {
                flow.update(|f| {
                    f.finish_submit();
                });
            }) as Box<dyn FnMut()>);

            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    confirm.as_ref().unchecked_ref(),
                    SUBMIT_DELAY_MS,
                )
                .ok();
            confirm.forget();
        }
    };

    let handle_country = move |e: web_sys::Event| {
        let target = e.target().unwrap();
        let select = target.dyn_into::<web_sys::HtmlSelectElement>().unwrap();
        if let Ok(code) = select.value().parse::<CountryCode>() {
            country_code.set(code);
        }
    };

    let room_type = info.room_type.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| close_modal()>
            <div class="booking-panel" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <button class="modal-back" on:click=move |_| close_modal()>
                        "←"
                    </button>
                    <h2>"Complete your booking"</h2>
                </div>

                <div class="savings-banner">
                    <span class="savings-banner-icon">"🎉"</span>
                    {format!(
                        "Yay! you just saved ₹{} on this booking!",
                        format_amount(rates.discount),
                    )}
                </div>

                <div class="booking-grid">
                    <div class="booking-form">
                        <h3>"Enter your details"</h3>
                        <div class="form-group">
                            <label for="full-name">"Full Name"</label>
                            <Input
                                id="full-name"
                                placeholder="Enter first and last name"
                                value=full_name
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">"Email Address"</label>
                            <Input
                                id="email"
                                input_type=InputType::Email
                                placeholder="name@example.com"
                                value=email
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone">"Mobile Number"</label>
                            <div class="phone-row">
                                <select class="country-code-select" on:change=handle_country>
                                    {CountryCode::ALL
                                        .into_iter()
                                        .map(|code| {
                                            view! {
                                                <option
                                                    value=code.prefix()
                                                    selected=move || country_code.get() == code
                                                >
                                                    {code.prefix()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                                <Input
                                    id="phone"
                                    input_type=InputType::Tel
                                    placeholder="Enter mobile number"
                                    value=phone
                                />
                            </div>
                        </div>
                    </div>

                    <div class="booking-summary">
                        <h3>"Booking Summary"</h3>
                        <div class="summary-row">
                            <span class="summary-icon">"📅"</span>
                            <div>
                                <p class="summary-primary">
                                    {move || {
                                        let s = stay.get();
                                        format!(
                                            "{} - {}",
                                            s.check_in().format("%d %b %Y"),
                                            s.check_out().format("%d %b %Y"),
                                        )
                                    }}
                                </p>
                                <p class="summary-secondary">
                                    {move || {
                                        let n = quote.get().nights;
                                        let unit = if n == 1 { "night" } else { "nights" };
                                        format!("{} {}", n, unit)
                                    }}
                                </p>
                            </div>
                        </div>
                        <div class="summary-row">
                            <span class="summary-icon">"👤"</span>
                            <div>
                                <p class="summary-primary">{move || guests.get().label()}</p>
                                <p class="summary-secondary">{room_type}</p>
                            </div>
                        </div>

                        <div class="summary-breakdown">
                            <div class="price-row">
                                <span>"Room price"</span>
                                <span>
                                    {move || format!("₹{}", format_amount(quote.get().base_price))}
                                </span>
                            </div>
                            <div class="price-row">
                                <span>"Cleaning fee"</span>
                                <span>
                                    {move || format!("₹{}", format_amount(quote.get().cleaning_fee))}
                                </span>
                            </div>
                            <div class="price-row">
                                <span>"Service fee"</span>
                                <span>
                                    {move || format!("₹{}", format_amount(quote.get().service_fee))}
                                </span>
                            </div>
                            <div class="price-row price-row-discount">
                                <span>"Discount"</span>
                                <span>
                                    {move || format!("-₹{}", format_amount(quote.get().discount))}
                                </span>
                            </div>
                            <div class="price-row price-row-total">
                                <span>"Total"</span>
                                <span>
                                    {move || format!("₹{}", format_amount(quote.get().total))}
                                </span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="booking-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_submitting.get())
                        loading=Signal::derive(move || is_submitting.get())
                        on_click=move |_| handle_confirm()
                    >
                        {move || if is_submitting.get() { "Processing..." } else { "Confirm Booking" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
