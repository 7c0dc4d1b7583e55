//! Debounced search input with a recent-queries dropdown.
//!
//! DESIGN
//! ======
//! All search state lives in a `catalog::SearchBox` inside a local signal.
//! Each keystroke takes a fresh debounce ticket and re-arms a single timer
//! slot for that ticket, cancelling the previous timeout. When the timer
//! fires, `SearchBox::on_timer` emits only if the ticket is still current.
//! Unmounting cancels the slot and tears the search box down.

use catalog::{LibraryConfig, SearchBox};
use leptos::prelude::*;

use crate::util::browser::now_ms;
use crate::util::timer::TimerSlot;

/// Delay before hiding the dropdown on blur so clicks inside it land first.
pub const BLUR_HIDE_MS: u32 = 200;

pub const DEFAULT_PLACEHOLDER: &str = "Type to search...";

#[component]
pub fn SearchBar(on_search: Callback<String>, #[prop(optional, into)] placeholder: Option<String>) -> impl IntoView {
    let config = expect_context::<LibraryConfig>();
    let search = RwSignal::new(SearchBox::new(&config));
    let debounce = TimerSlot::new();
    let blur_delay = TimerSlot::new();
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned());
    let delay_ms = u32::try_from(search.with_untracked(SearchBox::quiet_ms)).unwrap_or(u32::MAX);

    on_cleanup(move || {
        debounce.cancel();
        blur_delay.cancel();
        search.try_update(SearchBox::teardown);
    });

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        let Some(ticket) = search.try_update(|s| s.on_input(&value, now_ms())) else {
            return;
        };
        debounce.arm(delay_ms, move || {
            if let Some(query) = search.try_update(|s| s.on_timer(ticket)).flatten() {
                on_search.run(query);
            }
        });
    };

    let on_focus = move |_| {
        blur_delay.cancel();
        search.update(SearchBox::focus);
    };

    let on_blur = move |_| {
        blur_delay.arm(BLUR_HIDE_MS, move || {
            search.try_update(SearchBox::blur);
        });
    };

    let select_recent = Callback::new(move |query: String| {
        debounce.cancel();
        let emitted = search.try_update(|s| s.select_recent(&query));
        if let Some(emitted) = emitted {
            on_search.run(emitted);
        }
    });

    let remove_recent = Callback::new(move |query: String| {
        search.update(|s| {
            s.remove_recent(&query);
        });
    });

    let recent = move || search.with(|s| s.recent().iter().map(str::to_owned).collect::<Vec<_>>());

    view! {
        <div class="search-bar" data-coach="search-bar">
            <div class="search-bar__field">
                <span class="search-bar__glyph" aria-hidden="true">
                    "⌕"
                </span>
                <input
                    class="search-bar__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || search.with(|s| s.input().to_owned())
                    on:input=on_input
                    on:focus=on_focus
                    on:blur=on_blur
                />
            </div>
            <Show when=move || search.with(SearchBox::shows_recent)>
                <div class="search-bar__recent" role="listbox">
                    <div class="search-bar__recent-title">"Recent Searches"</div>
                    {move || {
                        recent()
                            .into_iter()
                            .map(|query| {
                                let select_query = query.clone();
                                let remove_query = query.clone();
                                view! {
                                    <div
                                        class="search-bar__recent-item"
                                        role="option"
                                        on:click=move |_| select_recent.run(select_query.clone())
                                    >
                                        <span class="search-bar__recent-glyph" aria-hidden="true">
                                            "◷"
                                        </span>
                                        <span class="search-bar__recent-text">{query}</span>
                                        <button
                                            class="search-bar__recent-remove"
                                            title="Remove from recent searches"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                remove_recent.run(remove_query.clone());
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
