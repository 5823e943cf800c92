use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::ListingInfo;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::booking::rates::format_amount;
use crate::booking::{BookingFlow, GuestCount, RateTable, StayDates};

/// Sticky reservation widget: date range, guest count, live price breakdown
/// and the primary call-to-action.
#[component]
pub fn ReserveCard(
    stay: RwSignal<StayDates>,
    guests: RwSignal<GuestCount>,
    flow: RwSignal<BookingFlow>,
    info: ListingInfo,
    today: NaiveDate,
) -> impl IntoView {
    let rates = use_context::<RateTable>().unwrap_or_default();

    let nights = Memo::new(move |_| stay.get().nights());
    let quote = Memo::new(move |_| rates.quote(nights.get()));

    // The breakdown and the CTA both wait for a complete range; a zero-night
    // selection is never quoted.
    let has_range = Memo::new(move |_| nights.get() >= 1);

    let handle_check_in = move |e: web_sys::Event| {
        let target = e.target().unwrap();
        let input = target.dyn_into::<web_sys::HtmlInputElement>().unwrap();
        if let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
            stay.update(|s| s.set_check_in(date));
        }
    };

    let handle_check_out = move |e: web_sys::Event| {
        let target = e.target().unwrap();
        let input = target.dyn_into::<web_sys::HtmlInputElement>().unwrap();
        if let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
            stay.update(|s| s.set_check_out(date));
        }
    };

    let handle_guests = move |e: web_sys::Event| {
        let target = e.target().unwrap();
        let select = target.dyn_into::<web_sys::HtmlSelectElement>().unwrap();
        if let Ok(count) = select.value().parse::<u8>() {
            guests.set(GuestCount::new(count));
        }
    };

    view! {
        <div class="reserve-card">
            <div class="reserve-card-header">
                <div>
                    <span class="reserve-rate">"₹" {format_amount(rates.nightly_rate)}</span>
                    <span class="reserve-rate-unit">" / night"</span>
                </div>
                <div class="reserve-rating">
                    <span class="reserve-rating-star">"★"</span>
                    <span class="reserve-rating-value">{format!("{:.1}", info.rating)}</span>
                    <span class="reserve-rating-count">{format!("({})", info.review_count)}</span>
                </div>
            </div>

            <div class="reserve-inputs">
                <div class="reserve-dates">
                    <div class="reserve-date-field">
                        <label for="check-in">"CHECK-IN"</label>
                        <input
                            id="check-in"
                            type="date"
                            class="reserve-date-input"
                            prop:value=move || stay.get().check_in().format("%Y-%m-%d").to_string()
                            min=today.format("%Y-%m-%d").to_string()
                            on:change=handle_check_in
                        />
                    </div>
                    <div class="reserve-date-field">
                        <label for="check-out">"CHECKOUT"</label>
                        <input
                            id="check-out"
                            type="date"
                            class="reserve-date-input"
                            prop:value=move || stay.get().check_out().format("%Y-%m-%d").to_string()
                            min=move || stay.get().check_in().format("%Y-%m-%d").to_string()
                            on:change=handle_check_out
                        />
                    </div>
                </div>
                <div class="reserve-guests-field">
                    <label for="guest-count">"GUESTS"</label>
                    <select id="guest-count" class="reserve-guests" on:change=handle_guests>
                        {GuestCount::options()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.get().to_string()
                                        selected=move || guests.get() == option
                                    >
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <Button
                class="reserve-cta"
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !has_range.get())
                on_click=move |_| {
                    flow.update(|f| {
                        f.open_form();
                    });
                }
            >
                "Reserve Now"
            </Button>

            <Show
                when=move || has_range.get()
                fallback=|| {
                    view! {
                        <p class="reserve-placeholder">
                            "Select your dates to see the full price breakdown"
                        </p>
                    }
                }
            >
                <div class="price-breakdown">
                    <div class="price-row">
                        <span>
                            {move || {
                                let q = quote.get();
                                let unit = if q.nights == 1 { "night" } else { "nights" };
                                format!(
                                    "₹{} x {} {}",
                                    format_amount(rates.nightly_rate),
                                    q.nights,
                                    unit,
                                )
                            }}
                        </span>
                        <span>{move || format!("₹{}", format_amount(quote.get().base_price))}</span>
                    </div>
                    <div class="price-row">
                        <span>"Cleaning fee"</span>
                        <span>{move || format!("₹{}", format_amount(quote.get().cleaning_fee))}</span>
                    </div>
                    <div class="price-row">
                        <span>"Service fee"</span>
                        <span>{move || format!("₹{}", format_amount(quote.get().service_fee))}</span>
                    </div>
                    <div class="price-row price-row-discount">
                        <span>"Discount"</span>
                        <span>{move || format!("-₹{}", format_amount(quote.get().discount))}</span>
                    </div>
                    <div class="price-row price-row-total">
                        <span>"Total"</span>
                        <span>{move || format!("₹{}", format_amount(quote.get().total))}</span>
                    </div>
                </div>
            </Show>

            <p class="reserve-note">"You won't be charged yet"</p>
        </div>
    }
}
