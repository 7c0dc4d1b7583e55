//! Library page: header, stats, search, tabs, sections and dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `LibraryState` signal, the item store and the config from
//! context. Derived card lists are memoized so cards only re-render when the
//! tab, query, favorites or access sets change. Every user action funnels
//! into a `LibraryState` method; the page itself holds no other state.

use catalog::{CatalogItem, ItemStore, LibraryConfig, LibraryTab, Onboarding};
use leptos::prelude::*;

use crate::components::asset_modal::AssetModal;
use crate::components::coach_mark::CoachMark;
use crate::components::library_section::LibrarySection;
use crate::components::navigation::Navigation;
use crate::components::onboarding_modal::OnboardingModal;
use crate::components::request_access_modal::RequestAccessModal;
use crate::components::search_bar::SearchBar;
use crate::components::stats_cards::StatsCards;
use crate::state::library::LibraryState;
use crate::util::ui_persistence;

#[component]
pub fn LibraryPage() -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let store = expect_context::<StoredValue<ItemStore>>();
    let config = StoredValue::new(expect_context::<LibraryConfig>());

    // The intro depends on browser storage, so it is decided after mount.
    Effect::new(move || {
        if !ui_persistence::onboarding_completed() {
            library.update(|state| state.onboarding = Onboarding::from_completed(false));
        }
    });

    let active_tab = Memo::new(move |_| library.with(|state| state.active_tab));
    let entries_for = move |tab: LibraryTab| {
        library.with(|state| {
            store.with_value(|store| config.with_value(|config| state.section_entries(store, tab, config)))
        })
    };
    let main_entries = Memo::new(move |_| entries_for(active_tab.get()));
    let trending_entries = Memo::new(move |_| entries_for(LibraryTab::Trending));
    let request_groups =
        Memo::new(move |_| library.with(|state| store.with_value(|store| state.request_groups(store))));
    let selected_ids = Memo::new(move |_| library.with(LibraryState::selected_request_ids));
    let selected_item =
        Memo::new(move |_| library.with(|state| store.with_value(|store| state.selected_item(store))));
    let coach_step = Memo::new(move |_| {
        library.with(|state| {
            let total = state.onboarding.total_steps();
            state.onboarding.current().map(|(index, step)| (index, step, total))
        })
    });

    let on_search = Callback::new(move |query: String| library.update(|state| state.apply_search(&query)));
    let on_tab_change = Callback::new(move |tab: LibraryTab| library.update(|state| state.set_tab(tab)));
    let on_open_item =
        Callback::new(move |item: CatalogItem| library.update(|state| state.open_item(item.id())));
    let on_close_item = Callback::new(move |()| library.update(LibraryState::close_item));
    let on_toggle_favorite = Callback::new(move |id: String| {
        library.update(|state| {
            state.toggle_favorite(&id);
        });
    });

    let on_open_request = move |_| library.update(LibraryState::open_request);
    let on_close_request = Callback::new(move |()| library.update(LibraryState::close_request));
    let on_toggle_request =
        Callback::new(move |id: String| library.update(|state| state.toggle_request_item(&id)));
    let on_toggle_group =
        Callback::new(move |ids: Vec<String>| library.update(|state| state.toggle_request_group(&ids)));
    let on_submit_request = Callback::new(move |()| {
        library.update(|state| {
            state.submit_request();
        });
    });

    let on_start_tour = Callback::new(move |()| library.update(LibraryState::start_tour));
    let on_skip_intro = Callback::new(move |()| library.update(LibraryState::skip_intro));
    let on_next_step = Callback::new(move |()| library.update(LibraryState::next_step));
    let on_previous_step = Callback::new(move |()| library.update(LibraryState::previous_step));
    let on_finish_tour = Callback::new(move |()| {
        let persist = library.try_update(LibraryState::finish_tour).unwrap_or(false);
        if persist {
            ui_persistence::mark_onboarding_completed();
        }
    });

    let main_title = Signal::derive(move || active_tab.get().name().to_owned());
    let main_subtitle = Signal::derive(move || active_tab.get().subtitle().to_owned());
    let is_favorite = Signal::derive(move || {
        library.with(|state| state.modal.selected().is_some_and(|id| state.is_favorite(id)))
    });

    view! {
        <div class="library-page">
            <header class="library-page__header">
                <div>
                    <h1 class="library-page__title">"Library"</h1>
                    <p class="library-page__tagline">"Browse for assets needed to report and present analysis"</p>
                </div>
                <button class="btn btn--primary" data-coach="request-access" on:click=on_open_request>
                    "Request Access"
                </button>
            </header>
            <main class="library-page__main">
                <StatsCards />
                <div class="library-page__controls">
                    <SearchBar on_search=on_search />
                    <Navigation active=active_tab on_change=on_tab_change />
                </div>
                <div class="library-page__panel">
                    <LibrarySection
                        title=main_title
                        subtitle=main_subtitle
                        entries=main_entries
                        on_activate=on_open_item
                    />
                </div>
                <Show when=move || library.with(LibraryState::shows_trending)>
                    <div class="library-page__panel">
                        <LibrarySection
                            title=LibraryTab::Trending.name().to_owned()
                            subtitle=LibraryTab::Trending.subtitle().to_owned()
                            entries=trending_entries
                            on_activate=on_open_item
                        />
                    </div>
                </Show>
                <Show when=move || library.with(|state| state.onboarding.shows_intro())>
                    <OnboardingModal on_start=on_start_tour on_close=on_skip_intro />
                </Show>
                {move || {
                    coach_step
                        .get()
                        .map(|(index, step, total)| {
                            view! {
                                <CoachMark
                                    step=step
                                    index=index
                                    total=total
                                    on_next=on_next_step
                                    on_previous=on_previous_step
                                    on_close=on_finish_tour
                                />
                            }
                        })
                }}
            </main>
            {move || {
                selected_item
                    .get()
                    .map(|item| {
                        view! {
                            <AssetModal
                                item=item
                                is_favorite=is_favorite
                                on_close=on_close_item
                                on_toggle_favorite=on_toggle_favorite
                            />
                        }
                    })
            }}
            <Show when=move || library.with(|state| state.request.is_open())>
                <RequestAccessModal
                    groups=request_groups
                    selected=selected_ids
                    on_toggle=on_toggle_request
                    on_toggle_group=on_toggle_group
                    on_submit=on_submit_request
                    on_close=on_close_request
                />
            </Show>
        </div>
    }
}
