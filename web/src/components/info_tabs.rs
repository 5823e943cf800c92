use leptos::prelude::*;
use shared_types::ListingInfo;

use crate::booking::GuestCount;
use crate::content;

/// The three informational panels under the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    Overview,
    Amenities,
    Policies,
}

impl InfoTab {
    pub const ALL: [InfoTab; 3] = [InfoTab::Overview, InfoTab::Amenities, InfoTab::Policies];

    pub fn label(&self) -> &'static str {
        match self {
            InfoTab::Overview => "Overview",
            InfoTab::Amenities => "Amenities",
            InfoTab::Policies => "Policies",
        }
    }
}

#[component]
pub fn InfoTabs(
    active_tab: RwSignal<InfoTab>,
    guests: RwSignal<GuestCount>,
    info: ListingInfo,
) -> impl IntoView {
    view! {
        <div class="info-tabs">
            <div class="info-tab-bar">
                {InfoTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="info-tab"
                                class:active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match active_tab.get() {
                InfoTab::Overview => {
                    view! { <OverviewPanel guests=guests info=info.clone()/> }.into_any()
                }
                InfoTab::Amenities => view! { <AmenitiesPanel/> }.into_any(),
                InfoTab::Policies => view! { <PoliciesPanel/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewPanel(guests: RwSignal<GuestCount>, info: ListingInfo) -> impl IntoView {
    let highlights = content::highlights();
    let suite_name = info.suite_name.clone();
    let avatar_url = info.host_avatar_url.clone();
    let bedrooms = info.bedrooms;
    let baths = info.baths;

    view! {
        <div class="overview-panel">
            <div class="overview-summary">
                <div>
                    <h2 class="overview-suite-name">{suite_name}</h2>
                    <p class="overview-capacity">
                        {move || {
                            format!(
                                "{} · {} bedroom · {} bath",
                                guests.get().label().to_lowercase(),
                                bedrooms,
                                baths,
                            )
                        }}
                    </p>
                </div>
                <img class="overview-host-avatar" src=avatar_url alt="Host"/>
            </div>

            <div class="highlight-grid">
                <For
                    each=move || highlights.clone()
                    key=|highlight| highlight.title.clone()
                    children=move |highlight| {
                        view! {
                            <div class="highlight-card">
                                <h3 class="highlight-title">{highlight.title}</h3>
                                <p class="highlight-description">{highlight.description}</p>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn AmenitiesPanel() -> impl IntoView {
    let amenities = content::amenities();

    view! {
        <div class="amenity-grid">
            <For
                each=move || amenities.clone()
                key=|amenity| amenity.label.clone()
                children=move |amenity| {
                    view! {
                        <div class="amenity-tile">
                            <span class="amenity-icon">{amenity.icon}</span>
                            <span class="amenity-label">{amenity.label}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn PoliciesPanel() -> impl IntoView {
    let policies = content::policies();

    view! {
        <div class="policy-list">
            <For
                each=move || policies.clone()
                key=|policy| policy.text.clone()
                children=move |policy| {
                    view! {
                        <div class="policy-card">
                            <span class="policy-icon">{policy.icon}</span>
                            <span class="policy-text">{policy.text}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
