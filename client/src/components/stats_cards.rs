//! Per-category item counts shown above the search bar.

use catalog::{AssetType, ItemStore};
use leptos::prelude::*;

use crate::components::library_card::type_glyph;

#[component]
pub fn StatsCards() -> impl IntoView {
    let store = expect_context::<StoredValue<ItemStore>>();

    view! {
        <div class="stats" data-coach="stats-section">
            {AssetType::ALL
                .into_iter()
                .map(|asset_type| {
                    let count = store.with_value(|store| store.count(asset_type));
                    view! {
                        <div class=format!("stats__card stats__card--{asset_type}")>
                            <span class="stats__glyph" aria-hidden="true">
                                {type_glyph(asset_type)}
                            </span>
                            <div>
                                <p class="stats__title">{asset_type.stats_title()}</p>
                                <p class="stats__count">{count}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
