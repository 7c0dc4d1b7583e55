//! Titled grid of library cards with an empty state.
//!
//! Cards fade in with a staggered delay the first time the section scrolls
//! into view (see `util::reveal`).

#[cfg(test)]
#[path = "library_section_test.rs"]
mod library_section_test;

use catalog::CatalogItem;
use leptos::html::Section;
use leptos::prelude::*;

use crate::components::library_card::LibraryCard;
use crate::state::library::CardEntry;
use crate::util::reveal::use_reveal_once;

pub const EMPTY_MESSAGE: &str = "No items found. Try adjusting your search criteria.";

/// Per-card stagger step for the reveal transition.
const STAGGER_MS: usize = 100;

/// Inline style delaying the reveal of the card at `index`.
pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms", index * STAGGER_MS)
}

#[component]
pub fn LibrarySection(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
    #[prop(into)] entries: Signal<Vec<CardEntry>>,
    on_activate: Callback<CatalogItem>,
) -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal_once(section_ref);
    let is_empty = move || entries.with(Vec::is_empty);

    view! {
        <section class="library-section" aria-label=move || title.get() node_ref=section_ref>
            <div class="library-section__header">
                <h2 class="library-section__title">{move || title.get()}</h2>
                <p class="library-section__subtitle">{move || subtitle.get()}</p>
            </div>
            <Show
                when=move || !is_empty()
                fallback=|| {
                    view! {
                        <div class="library-section__empty" role="status">
                            {EMPTY_MESSAGE}
                        </div>
                    }
                }
            >
                <div class="library-section__grid">
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <div
                                        class="library-section__cell"
                                        class:library-section__cell--revealed=move || revealed.get()
                                        style=stagger_style(index)
                                    >
                                        <LibraryCard item=entry.item access=entry.access on_activate=on_activate />
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
