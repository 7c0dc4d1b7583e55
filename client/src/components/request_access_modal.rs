//! Checklist dialog for requesting access to restricted items.

#[cfg(test)]
#[path = "request_access_modal_test.rs"]
mod request_access_modal_test;

use leptos::prelude::*;

use crate::state::library::RequestGroup;

pub const EMPTY_MESSAGE: &str = "No items available for access request";

/// Footer text for the current selection size.
pub fn selection_summary(count: usize) -> String {
    format!("{count} items selected")
}

/// Whether every id of a group is already selected, which flips its
/// "Select all" button into a deselect.
pub fn group_fully_selected(ids: &[String], selected: &[String]) -> bool {
    !ids.is_empty() && ids.iter().all(|id| selected.contains(id))
}

#[component]
pub fn RequestAccessModal(
    #[prop(into)] groups: Signal<Vec<RequestGroup>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
    on_toggle_group: Callback<Vec<String>>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected_count = move || selected.with(Vec::len);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="request-access__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="request-access"
                role="dialog"
                aria-modal="true"
                aria-label="Request Access"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="request-access__header">
                    <h2>"Request Access"</h2>
                    <button class="request-access__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                    <p class="request-access__subtitle">"Select items you need access to"</p>
                </div>
                <div class="request-access__body">
                    <Show
                        when=move || groups.with(|groups| !groups.is_empty())
                        fallback=|| view! { <p class="request-access__empty">{EMPTY_MESSAGE}</p> }
                    >
                        {move || {
                            groups
                                .get()
                                .into_iter()
                                .map(|group| {
                                    let ids = group.ids();
                                    let group_ids = ids.clone();
                                    let all_selected = move || selected.with(|sel| group_fully_selected(&ids, sel));
                                    view! {
                                        <div class="request-access__group">
                                            <div class="request-access__group-header">
                                                <h3>{group.asset_type.label()}</h3>
                                                <button
                                                    class="request-access__select-all"
                                                    on:click=move |_| on_toggle_group.run(group_ids.clone())
                                                >
                                                    {move || if all_selected() { "Deselect all" } else { "Select all" }}
                                                </button>
                                            </div>
                                            {group
                                                .items
                                                .into_iter()
                                                .map(|item| {
                                                    let id = item.id().to_owned();
                                                    let check_id = id.clone();
                                                    view! {
                                                        <label class="request-access__item">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    selected.with(|sel| sel.contains(&check_id))
                                                                }
                                                                on:change=move |_| on_toggle.run(id.clone())
                                                            />
                                                            <div class="request-access__item-text">
                                                                <h4>{item.name().to_owned()}</h4>
                                                                <p>{item.description().to_owned()}</p>
                                                            </div>
                                                        </label>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </div>
                <div class="request-access__footer">
                    <span class="request-access__count">{move || selection_summary(selected_count())}</span>
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || selected_count() == 0
                        on:click=move |_| on_submit.run(())
                    >
                        "Request Access"
                    </button>
                </div>
            </div>
        </div>
    }
}
