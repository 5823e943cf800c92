use chrono::Local;
use leptos::prelude::*;

use crate::booking::{BookingFlow, GalleryCycle, GuestCount, StayDates};
use crate::components::{
    BookingModal, ConfirmationModal, GalleryModal, HeroMap, InfoTab, InfoTabs, ListingHeader,
    ReserveCard, ShareModal,
};
use crate::content;

/// The whole site is this one page: header, hero, info tabs, sticky reserve
/// card, and the four dialogs. It owns every piece of UI state; everything is
/// transient and discarded on reload.
#[component]
pub fn ListingPage() -> impl IntoView {
    let info = content::listing_info();
    let images = content::gallery_images();
    let today = Local::now().date_naive();

    let stay = RwSignal::new(StayDates::starting(today));
    let guests = RwSignal::new(GuestCount::default());
    let active_tab = RwSignal::new(InfoTab::default());
    let wishlisted = RwSignal::new(false);
    let show_share = RwSignal::new(false);
    let show_gallery = RwSignal::new(false);
    let gallery = RwSignal::new(GalleryCycle::new(images.len()));
    let flow = RwSignal::new(BookingFlow::default());

    let open_gallery = move || show_gallery.set(true);
    let close_gallery = move || show_gallery.set(false);
    let open_share = move || show_share.set(true);
    let close_share = move || show_share.set(false);

    let header_info = info.clone();
    let tabs_info = info.clone();
    let reserve_info = info.clone();
    let share_info = info.clone();
    let booking_info = info.clone();
    let map_url = info.map_embed_url.clone();
    let gallery_images = images.clone();

    view! {
        <div class="listing-page">
            <ListingHeader info=header_info wishlisted=wishlisted on_share=open_share/>

            <div class="listing-layout">
                <div class="listing-main">
                    <HeroMap map_embed_url=map_url on_open_gallery=open_gallery/>
                    <InfoTabs active_tab=active_tab guests=guests info=tabs_info/>
                </div>
                <aside class="listing-aside">
                    <ReserveCard
                        stay=stay
                        guests=guests
                        flow=flow
                        info=reserve_info
                        today=today
                    />
                </aside>
            </div>

            // The dialogs mount only while visible, so their state (and the
            // gallery's keyboard listener) is scoped to the open overlay.
            <Show when=move || show_gallery.get()>
                <GalleryModal
                    gallery=gallery
                    images=gallery_images.clone()
                    on_close=close_gallery
                />
            </Show>

            <Show when=move || show_share.get()>
                <ShareModal info=share_info.clone() on_close=close_share/>
            </Show>

            <Show when=move || flow.get().is_form_visible()>
                <BookingModal
                    stay=stay
                    guests=guests
                    flow=flow
                    info=booking_info.clone()
                />
            </Show>

            <Show when=move || flow.get().is_confirmed()>
                <ConfirmationModal flow=flow/>
            </Show>
        </div>
    }
}
