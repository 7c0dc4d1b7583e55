//! Catalog item model.
//!
//! DESIGN
//! ======
//! Every item shares one [`ItemBase`] and carries exactly one [`ItemDetails`]
//! variant. The `type` discriminant lives on the details enum, so an item can
//! never hold fields belonging to another asset kind, and consumers match on
//! the variant exhaustively.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};

/// Kind of library asset.
///
/// Declaration order is the catalog order used for grouping and curated tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Kpi,
    Dataviz,
    Layout,
    Storyboard,
}

impl AssetType {
    /// All asset types in catalog order.
    pub const ALL: [AssetType; 4] = [AssetType::Kpi, AssetType::Dataviz, AssetType::Layout, AssetType::Storyboard];

    /// Wire name, as it appears in the `type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Kpi => "kpi",
            AssetType::Dataviz => "dataviz",
            AssetType::Layout => "layout",
            AssetType::Storyboard => "storyboard",
        }
    }

    /// Human label, matching the category tab names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AssetType::Kpi => "KPI",
            AssetType::Dataviz => "Data Visualization",
            AssetType::Layout => "Layout",
            AssetType::Storyboard => "Storyboard",
        }
    }

    /// Plural title used by the stats cards.
    #[must_use]
    pub fn stats_title(self) -> &'static str {
        match self {
            AssetType::Kpi => "KPIs",
            AssetType::Dataviz => "Visualizations",
            AssetType::Layout => "Layouts",
            AssetType::Storyboard => "Storyboards",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-reference to another report or dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Fields shared by every asset kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBase {
    /// Stable unique identifier.
    pub id: String,
    pub name: String,
    pub description: String,
    /// ISO `YYYY-MM-DD` date of the last update.
    pub date: String,
    /// Free-form tags. Missing in the source data means empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Usage counter, kept as the opaque display string from the source.
    #[serde(default)]
    pub used: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_items: Vec<RelatedItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessQuestion {
    pub id: String,
    pub question: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiMetricId {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KpiDetails {
    pub business_questions: Vec<BusinessQuestion>,
    pub kpi_metric_ids: Vec<KpiMetricId>,
    /// Formula text shown in the detail view.
    pub calculation: String,
    pub visuals_available: Vec<String>,
    pub applicable_affiliates: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataVizDetails {
    pub applicable_kpi_favorites: Vec<String>,
    pub asset_context: String,
    pub data_source: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutDetails {
    pub page_count: u32,
    pub kpis_used: Vec<String>,
    pub layout_type: String,
    pub dimensions: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryboardDetails {
    pub coupled_kpis: Vec<String>,
    pub applicable_affiliates: Vec<String>,
}

/// Kind-specific payload, tagged by the `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemDetails {
    Kpi(KpiDetails),
    Dataviz(DataVizDetails),
    Layout(LayoutDetails),
    Storyboard(StoryboardDetails),
}

impl ItemDetails {
    /// Empty details for `asset_type`.
    #[must_use]
    pub fn empty(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Kpi => ItemDetails::Kpi(KpiDetails::default()),
            AssetType::Dataviz => ItemDetails::Dataviz(DataVizDetails::default()),
            AssetType::Layout => ItemDetails::Layout(LayoutDetails::default()),
            AssetType::Storyboard => ItemDetails::Storyboard(StoryboardDetails::default()),
        }
    }

    #[must_use]
    pub fn asset_type(&self) -> AssetType {
        match self {
            ItemDetails::Kpi(_) => AssetType::Kpi,
            ItemDetails::Dataviz(_) => AssetType::Dataviz,
            ItemDetails::Layout(_) => AssetType::Layout,
            ItemDetails::Storyboard(_) => AssetType::Storyboard,
        }
    }
}

/// One library asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(flatten)]
    pub base: ItemBase,
    #[serde(flatten)]
    details: ItemDetails,
}

impl CatalogItem {
    #[must_use]
    pub fn new(base: ItemBase, details: ItemDetails) -> Self {
        Self { base, details }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.base.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.base.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.base.description
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.base.tags
    }

    /// The immutable kind discriminant.
    #[must_use]
    pub fn asset_type(&self) -> AssetType {
        self.details.asset_type()
    }

    /// Read-only access to the kind-specific payload.
    #[must_use]
    pub fn details(&self) -> &ItemDetails {
        &self.details
    }
}
