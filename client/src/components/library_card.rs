//! Clickable catalog card with an access-status chip.

#[cfg(test)]
#[path = "library_card_test.rs"]
mod library_card_test;

use catalog::{AccessStatus, AssetType, CatalogItem};
use leptos::prelude::*;

/// Label and style modifier for the chip shown on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessChip {
    pub label: &'static str,
    pub modifier: &'static str,
}

/// Granted items carry no chip.
pub fn access_chip(status: AccessStatus) -> Option<AccessChip> {
    match status {
        AccessStatus::Granted => None,
        AccessStatus::Pending => Some(AccessChip { label: "Access Requested", modifier: "pending" }),
        AccessStatus::None => Some(AccessChip { label: "Request Access", modifier: "locked" }),
    }
}

/// Glyph standing in for each category's icon.
pub fn type_glyph(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::Kpi => "◎",
        AssetType::Dataviz => "◔",
        AssetType::Layout => "▦",
        AssetType::Storyboard => "▤",
    }
}

/// Whether a key press should activate a focused card.
pub fn activates_card(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[component]
pub fn LibraryCard(item: CatalogItem, access: AccessStatus, on_activate: Callback<CatalogItem>) -> impl IntoView {
    let aria_label = format!("Open details for {}", item.name());
    let type_class = format!("library-card__icon library-card__icon--{}", item.asset_type());
    let glyph = type_glyph(item.asset_type());
    let name = item.name().to_owned();
    let description = item.description().to_owned();
    let date = item.base.date.clone();
    let chip = access_chip(access);
    let restricted = access != AccessStatus::Granted;

    let click_item = item.clone();
    let on_click = move |_| on_activate.run(click_item.clone());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if activates_card(&ev.key()) {
            ev.prevent_default();
            on_activate.run(item.clone());
        }
    };

    view! {
        <div
            class="library-card"
            class:library-card--restricted=restricted
            role="button"
            tabindex="0"
            aria-label=aria_label
            on:click=on_click
            on:keydown=on_keydown
        >
            <div class=type_class aria-hidden="true">
                {glyph}
            </div>
            <div class="library-card__body">
                <h3 class="library-card__name">{name}</h3>
                <p class="library-card__description">{description}</p>
                <span class="library-card__date">{date}</span>
            </div>
            {chip
                .map(|chip| {
                    view! {
                        <span class=format!("library-card__chip library-card__chip--{}", chip.modifier)>
                            {chip.label}
                        </span>
                    }
                })}
        </div>
    }
}
