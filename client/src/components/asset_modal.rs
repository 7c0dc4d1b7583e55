//! Detail modal for a single catalog item.
//!
//! DESIGN
//! ======
//! The per-kind layout is computed by pure functions (`metadata_rows`,
//! `detail_sections`) so the view only renders rows and section bodies. The
//! modal locks page scroll while mounted and closes on Escape or a backdrop
//! click.

#[cfg(test)]
#[path = "asset_modal_test.rs"]
mod asset_modal_test;

use catalog::dates::format_date;
use catalog::item::{BusinessQuestion, KpiMetricId, RelatedItem};
use catalog::{CatalogItem, ItemDetails};
use leptos::prelude::*;

use crate::components::library_card::type_glyph;
use crate::util::browser::{copy_page_url, set_body_scroll_locked};

/// One label/value cell in the metadata grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBody {
    Text(String),
    Code(String),
    List(Vec<String>),
    Questions(Vec<BusinessQuestion>),
    Metrics(Vec<KpiMetricId>),
    Related(Vec<RelatedItem>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub body: SectionBody,
}

/// Outcome of the last "Copy link" click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn from_copied(copied: bool) -> Self {
        if copied { Self::Copied } else { Self::Failed }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy link",
            Self::Copied => "Copied",
            Self::Failed => "Copy failed",
        }
    }
}

impl DetailSection {
    fn new(title: &'static str, body: SectionBody) -> Self {
        Self { title, body }
    }
}

/// Long-form date for display, falling back to the raw string.
pub fn display_date(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|err| {
        log::debug!("unformattable date {raw:?}: {err}");
        raw.to_owned()
    })
}

fn row(label: &'static str, value: impl ToString) -> MetadataRow {
    MetadataRow { label, value: value.to_string() }
}

/// Metadata grid cells for `item`, in display order.
pub fn metadata_rows(item: &CatalogItem) -> Vec<MetadataRow> {
    let used = row("Used", &item.base.used);
    let updated = row("Last Updated", display_date(&item.base.date));
    let kind = row("Type", item.asset_type().label());
    match item.details() {
        ItemDetails::Kpi(kpi) => vec![used, kind, updated, row("Metrics Count", kpi.kpi_metric_ids.len())],
        ItemDetails::Dataviz(viz) => vec![used, kind, updated, row("Data Source", &viz.data_source)],
        ItemDetails::Layout(layout) => vec![
            used,
            row("Type", &layout.layout_type),
            row("Pages", layout.page_count),
            row("Dimensions", &layout.dimensions),
            updated,
        ],
        ItemDetails::Storyboard(story) => {
            vec![used, kind, updated, row("Affiliates", story.applicable_affiliates.len())]
        }
    }
}

/// Kind-specific content sections for `item`, in display order.
pub fn detail_sections(item: &CatalogItem) -> Vec<DetailSection> {
    let mut sections = match item.details() {
        ItemDetails::Kpi(kpi) => vec![
            DetailSection::new("Business Questions", SectionBody::Questions(kpi.business_questions.clone())),
            DetailSection::new("KPI Metric IDs", SectionBody::Metrics(kpi.kpi_metric_ids.clone())),
            DetailSection::new("Calculation", SectionBody::Code(kpi.calculation.clone())),
            DetailSection::new("Visuals Available", SectionBody::List(kpi.visuals_available.clone())),
            DetailSection::new("Affiliate Availability", SectionBody::List(kpi.applicable_affiliates.clone())),
        ],
        ItemDetails::Dataviz(viz) => vec![
            DetailSection::new("Applicable KPI Favorites", SectionBody::List(viz.applicable_kpi_favorites.clone())),
            DetailSection::new("Asset Information Context", SectionBody::Text(viz.asset_context.clone())),
        ],
        ItemDetails::Layout(layout) => {
            vec![DetailSection::new("KPIs Being Used", SectionBody::List(layout.kpis_used.clone()))]
        }
        ItemDetails::Storyboard(story) => vec![
            DetailSection::new("Coupled KPIs/Filters", SectionBody::List(story.coupled_kpis.clone())),
            DetailSection::new("Applicable Affiliates", SectionBody::List(story.applicable_affiliates.clone())),
        ],
    };
    if !item.base.related_items.is_empty() {
        sections.push(DetailSection::new("Related Items", SectionBody::Related(item.base.related_items.clone())));
    }
    sections
}

fn render_body(body: SectionBody) -> AnyView {
    match body {
        SectionBody::Text(text) => view! { <p class="asset-modal__text">{text}</p> }.into_any(),
        SectionBody::Code(code) => view! { <pre class="asset-modal__code">{code}</pre> }.into_any(),
        SectionBody::List(values) => view! {
            <ul class="asset-modal__chips">
                {values.into_iter().map(|value| view! { <li class="asset-modal__chip">{value}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        SectionBody::Questions(questions) => view! {
            <div class="asset-modal__questions">
                {questions
                    .into_iter()
                    .map(|q| {
                        view! {
                            <div class="asset-modal__question">
                                <p class="asset-modal__question-text">{q.question}</p>
                                <p class="asset-modal__question-description">{q.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionBody::Metrics(metrics) => view! {
            <div class="asset-modal__metrics">
                {metrics
                    .into_iter()
                    .map(|metric| {
                        view! {
                            <div class="asset-modal__metric">
                                <span class="asset-modal__metric-label">"Metric Name"</span>
                                <span class="asset-modal__metric-name">{metric.name}</span>
                                <span class="asset-modal__metric-label">"Metric ID"</span>
                                <code class="asset-modal__metric-id">{metric.id}</code>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionBody::Related(related) => view! {
            <div class="asset-modal__related">
                {related
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class="asset-modal__related-item">
                                <p class="asset-modal__related-title">{entry.title}</p>
                                <p class="asset-modal__related-description">{entry.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AssetModal(
    item: CatalogItem,
    #[prop(into)] is_favorite: Signal<bool>,
    on_close: Callback<()>,
    on_toggle_favorite: Callback<String>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let copy_status = RwSignal::new(CopyStatus::Idle);

    set_body_scroll_locked(true);
    on_cleanup(|| set_body_scroll_locked(false));

    let item_id = item.id().to_owned();
    let title = item.name().to_owned();
    let aria_title = title.clone();
    let label = item.asset_type().label();
    let glyph = type_glyph(item.asset_type());
    let description = item.description().to_owned();
    let tags = item.tags().to_vec();
    let rows = metadata_rows(&item);
    let sections = detail_sections(&item);

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let on_expand = move |_| expanded.update(|value| *value = !*value);
    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            let status = CopyStatus::from_copied(copy_page_url().await);
            // The modal may have closed while the clipboard was busy.
            copy_status.try_set(status);
        });
    };
    let on_favorite = move |_| on_toggle_favorite.run(item_id.clone());

    view! {
        <div class="asset-modal__backdrop" on:click=on_backdrop>
            <div
                class="asset-modal"
                class:asset-modal--expanded=move || expanded.get()
                role="dialog"
                aria-modal="true"
                aria-label=aria_title
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="asset-modal__header">
                    <span class="asset-modal__glyph" aria-hidden="true">
                        {glyph}
                    </span>
                    <div class="asset-modal__heading">
                        <h2 class="asset-modal__title">{title}</h2>
                        <span class="asset-modal__kind">{label}</span>
                    </div>
                    <button
                        class="asset-modal__icon-btn"
                        on:click=on_expand
                        aria-label=move || if expanded.get() { "Collapse view" } else { "Expand view" }
                    >
                        {move || if expanded.get() { "⤡" } else { "⤢" }}
                    </button>
                    <button class="asset-modal__icon-btn" on:click=on_copy aria-label="Copy link">
                        {move || copy_status.get().label()}
                    </button>
                    <button class="asset-modal__icon-btn" on:click=on_close_click aria-label="Close">
                        "✕"
                    </button>
                </div>
                <div class="asset-modal__content">
                    <p class="asset-modal__description">{description}</p>
                    <ul class="asset-modal__tags">
                        {tags.into_iter().map(|tag| view! { <li class="asset-modal__tag">{tag}</li> }).collect_view()}
                    </ul>
                    <dl class="asset-modal__metadata">
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div class="asset-modal__metadata-cell">
                                        <dt>{row.label}</dt>
                                        <dd>{row.value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                    {sections
                        .into_iter()
                        .map(|section| {
                            view! {
                                <section class="asset-modal__section">
                                    <h3 class="asset-modal__section-title">{section.title}</h3>
                                    {render_body(section.body)}
                                </section>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="asset-modal__footer">
                    <Show when=move || expanded.get()>
                        <div class="asset-modal__hint" on:click=on_close_click>
                            <h3>"Not seeing what you're looking for?"</h3>
                            <p>"Try searching our complete library"</p>
                        </div>
                    </Show>
                    <button
                        class="asset-modal__favorite"
                        class:asset-modal__favorite--active=move || is_favorite.get()
                        on:click=on_favorite
                    >
                        {move || if is_favorite.get() { "Remove from Favorites" } else { "Add to Favorites" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
