//! Heritage site directory: search, facet filters and view mode.
//!
//! Filtering is a pure function over the fixed site list. Results are
//! re-derived on every request; nothing is cached and the selection is never
//! persisted beyond the query string that carries it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{HeritageSite, SiteStatus};

/// Value used by forms and query strings for "no restriction".
pub const ALL: &str = "all";

/// Grid or list presentation of the same results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid
    #[default]
    Grid,
    /// Stacked rows
    List,
}

impl ViewMode {
    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    /// Parses a query-string value; anything unrecognised is `Grid`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("list") => Self::List,
            _ => Self::Grid,
        }
    }
}

/// The directory's filter state.
///
/// `category` and `status` hold the selected label, `None` meaning "all".
/// The status label is compared with [`SiteStatus::label`]; a label that names
/// no status matches no site.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SiteFilter {
    /// Selected category
    pub category: Option<String>,
    /// Selected status label
    pub status: Option<String>,
    /// Free-text search
    pub query: String,
    /// Restrict to UNESCO-listed sites
    pub unesco_only: bool,
}

impl SiteFilter {
    /// Creates a filter with every clause at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from raw form/query values.
    ///
    /// Empty strings and `"all"` mean no restriction. Status values are
    /// normalised to their label when they name a known status (by label or
    /// slug, any case).
    #[must_use]
    pub fn from_params(
        category: Option<&str>,
        status: Option<&str>,
        query: Option<&str>,
        unesco: Option<&str>,
    ) -> Self {
        let category = selection(category);
        let status = selection(status).map(|s| match SiteStatus::parse(&s) {
            Some(known) => known.label().to_string(),
            None => s,
        });
        let unesco_only = matches!(
            unesco.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("1" | "true" | "on" | "yes")
        );

        Self {
            category,
            status,
            query: query.unwrap_or_default().to_string(),
            unesco_only,
        }
    }

    /// Sets the category clause.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category: String = category.into();
        self.category = selection(Some(category.as_str()));
        self
    }

    /// Sets the status clause.
    pub fn with_status(mut self, status: SiteStatus) -> Self {
        self.status = Some(status.label().to_string());
        self
    }

    /// Sets the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the UNESCO-only clause.
    pub fn with_unesco_only(mut self, unesco_only: bool) -> Self {
        self.unesco_only = unesco_only;
        self
    }

    /// Returns every clause to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no clause restricts the result.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.category.is_none()
            && self.status.is_none()
            && self.query.is_empty()
            && !self.unesco_only
    }

    /// Evaluates the predicate for one site.
    #[must_use]
    pub fn matches(&self, site: &HeritageSite) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| site.category == c);
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |s| site.status.label() == s);
        let query_ok = self.query.is_empty() || {
            let needle = self.query.to_lowercase();
            site.name.to_lowercase().contains(&needle)
                || site.description.to_lowercase().contains(&needle)
        };
        let unesco_ok = !self.unesco_only || site.is_unesco_listed;

        category_ok && status_ok && query_ok && unesco_ok
    }

    /// Filters `sites`, preserving their order.
    #[must_use]
    pub fn apply<'a>(&self, sites: &'a [HeritageSite]) -> Vec<&'a HeritageSite> {
        let results: Vec<&HeritageSite> = sites.iter().filter(|s| self.matches(s)).collect();
        debug!(
            category = ?self.category,
            status = ?self.status,
            query = %self.query,
            unesco_only = self.unesco_only,
            shown = results.len(),
            total = sites.len(),
            "Filtered heritage sites"
        );
        results
    }

    /// One chip per active clause; each chip's filter clears only that clause.
    #[must_use]
    pub fn active_chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();

        if let Some(category) = &self.category {
            chips.push(FilterChip {
                clause: FilterClause::Category,
                label: category.clone(),
                cleared: Self {
                    category: None,
                    ..self.clone()
                },
            });
        }
        if let Some(status) = &self.status {
            chips.push(FilterChip {
                clause: FilterClause::Status,
                label: status.clone(),
                cleared: Self {
                    status: None,
                    ..self.clone()
                },
            });
        }
        if !self.query.is_empty() {
            chips.push(FilterChip {
                clause: FilterClause::Query,
                label: format!("Search: \"{}\"", self.query),
                cleared: Self {
                    query: String::new(),
                    ..self.clone()
                },
            });
        }
        if self.unesco_only {
            chips.push(FilterChip {
                clause: FilterClause::Unesco,
                label: "UNESCO only".to_string(),
                cleared: Self {
                    unesco_only: false,
                    ..self.clone()
                },
            });
        }

        chips
    }

    /// Encodes the filter plus view mode as a query string (no leading `?`).
    ///
    /// Default clauses are omitted, so the default filter in grid view
    /// encodes to an empty string.
    #[must_use]
    pub fn to_query_string(&self, view: ViewMode) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(status) = &self.status {
            pairs.push(format!("status={}", urlencoding::encode(status)));
        }
        if !self.query.is_empty() {
            pairs.push(format!("q={}", urlencoding::encode(&self.query)));
        }
        if self.unesco_only {
            pairs.push("unesco=1".to_string());
        }
        if view != ViewMode::Grid {
            pairs.push(format!("view={}", view.as_str()));
        }
        pairs.join("&")
    }
}

fn selection(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
        .map(ToString::to_string)
}

/// Which clause an active-filter chip represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterClause {
    /// Category clause
    Category,
    /// Status clause
    Status,
    /// Search clause
    Query,
    /// UNESCO clause
    Unesco,
}

/// An active filter with the filter that results from removing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// The clause this chip shows
    pub clause: FilterClause,
    /// Chip text
    pub label: String,
    /// The filter with this clause cleared
    pub cleared: SiteFilter,
}

/// Preset filters offered as one-click shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    /// Only UNESCO-listed sites
    UnescoOnly,
    /// Category "Historic District"
    HistoricDistricts,
    /// Status "Preserved"
    PreservedSites,
}

impl QuickFilter {
    /// All presets in display order.
    pub const ALL: [Self; 3] = [Self::UnescoOnly, Self::HistoricDistricts, Self::PreservedSites];

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnescoOnly => "UNESCO Sites Only",
            Self::HistoricDistricts => "Historic Districts",
            Self::PreservedSites => "Preserved Sites",
        }
    }

    /// Applies the preset on top of `filter`.
    #[must_use]
    pub fn apply(self, filter: &SiteFilter) -> SiteFilter {
        let filter = filter.clone();
        match self {
            Self::UnescoOnly => filter.with_unesco_only(true),
            Self::HistoricDistricts => filter.with_category("Historic District"),
            Self::PreservedSites => filter.with_status(SiteStatus::Preserved),
        }
    }
}

/// Distinct filter values observed in the data, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct categories
    pub categories: Vec<String>,
    /// Distinct status labels
    pub statuses: Vec<String>,
}

impl Facets {
    /// Collects facets from `sites`.
    #[must_use]
    pub fn from_sites(sites: &[HeritageSite]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut statuses: Vec<String> = Vec::new();

        for site in sites {
            if !categories.contains(&site.category) {
                categories.push(site.category.clone());
            }
            let status = site.status.label().to_string();
            if !statuses.contains(&status) {
                statuses.push(status);
            }
        }

        Self {
            categories,
            statuses,
        }
    }

    /// Category options including the leading `"all"`.
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// Status options including the leading `"all"`.
    #[must_use]
    pub fn status_options(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.statuses.iter().cloned())
            .collect()
    }
}

/// Headline counts for the gallery stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    /// Number of sites
    pub total: usize,
    /// Sites with status Preserved
    pub preserved: usize,
    /// UNESCO-listed sites
    pub unesco: usize,
    /// Distinct categories
    pub categories: usize,
}

impl DirectoryStats {
    /// Computes the stats for `sites`.
    #[must_use]
    pub fn from_sites(sites: &[HeritageSite]) -> Self {
        Self {
            total: sites.len(),
            preserved: sites
                .iter()
                .filter(|s| s.status == SiteStatus::Preserved)
                .count(),
            unesco: sites.iter().filter(|s| s.is_unesco_listed).count(),
            categories: Facets::from_sites(sites).categories.len(),
        }
    }
}

/// A fully evaluated directory request.
#[derive(Debug, Clone)]
pub struct DirectoryView<'a> {
    /// The filter that produced the results
    pub filter: SiteFilter,
    /// Presentation mode
    pub view_mode: ViewMode,
    /// Matching sites in fixture order
    pub results: Vec<&'a HeritageSite>,
    /// Number of sites before filtering
    pub total: usize,
    /// Facets over the unfiltered list
    pub facets: Facets,
    /// Stats over the unfiltered list
    pub stats: DirectoryStats,
}

impl<'a> DirectoryView<'a> {
    /// Evaluates `filter` against `sites`.
    #[must_use]
    pub fn evaluate(sites: &'a [HeritageSite], filter: SiteFilter, view_mode: ViewMode) -> Self {
        Self {
            results: filter.apply(sites),
            total: sites.len(),
            facets: Facets::from_sites(sites),
            stats: DirectoryStats::from_sites(sites),
            filter,
            view_mode,
        }
    }

    /// True when the empty state (with its reset action) should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
