//! Tab strip for switching library views.

use catalog::{LibraryTab, NAV_TABS};
use leptos::prelude::*;

use crate::components::library_card::type_glyph;

fn tab_glyph(tab: LibraryTab) -> &'static str {
    match tab {
        LibraryTab::Featured | LibraryTab::Trending => "✦",
        LibraryTab::Category(asset_type) => type_glyph(asset_type),
        LibraryTab::MyFavorites => "♥",
    }
}

fn tab_class(tab: LibraryTab) -> String {
    let slug = match tab {
        LibraryTab::Featured => "featured",
        LibraryTab::Trending => "trending",
        LibraryTab::Category(asset_type) => asset_type.as_str(),
        LibraryTab::MyFavorites => "favorites",
    };
    format!("library-nav__tab library-nav__tab--{slug}")
}

#[component]
pub fn Navigation(#[prop(into)] active: Signal<LibraryTab>, on_change: Callback<LibraryTab>) -> impl IntoView {
    view! {
        <nav class="library-nav" data-coach="navigation-tabs" aria-label="Library sections">
            {NAV_TABS
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=tab_class(tab)
                            class:library-nav__tab--active=move || active.get() == tab
                            aria-pressed=move || if active.get() == tab { "true" } else { "false" }
                            on:click=move |_| on_change.run(tab)
                        >
                            <span class="library-nav__glyph" aria-hidden="true">
                                {tab_glyph(tab)}
                            </span>
                            <span>{tab.name()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
