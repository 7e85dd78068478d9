//! Catalog listing helpers: pagination math, ordering, URL query sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog, search, and admin screens all page through the same
//! page-number endpoint. The admin screen mirrors its page/sort/search state
//! into the URL so reloads and back navigation restore the same view.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use serde::{Deserialize, Serialize};

use super::query::QueryParams;

/// Backend page size for product listings.
pub const PAGE_SIZE: u64 = 6;

/// Media prefix the backend embeds in image URLs when it runs locally.
pub const LOCAL_MEDIA_PREFIX: &str = "http://localhost:8000";

/// Public prefix that replaces [`LOCAL_MEDIA_PREFIX`]; empty keeps URLs
/// relative to the storefront host, which relays `/media`.
const PUBLIC_MEDIA_BASE: &str = match option_env!("STOREFRONT_MEDIA_BASE") {
    Some(base) => base,
    None => "",
};

pub const CATALOG_PATH: &str = "/shoeDetails";
pub const SEARCH_PATH: &str = "/searchResults";
pub const ADMIN_PATH: &str = "/allDataForAdmin";
pub const ADD_SHOE_PATH: &str = "/addShoe";

pub fn product_path(id: u64) -> String {
    format!("{CATALOG_PATH}/{id}")
}

pub fn edit_shoe_path(id: u64) -> String {
    format!("/editShoe/{id}")
}

/// Record id from a `:id` route segment.
pub fn parse_record_id(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

#[derive(Debug, Default, Serialize)]
struct SearchQuery {
    q: Option<String>,
}

/// Search results URL for `term`.
pub fn search_path(term: &str) -> String {
    let query = SearchQuery { q: Some(term.trim().to_owned()) };
    match serde_qs::to_string(&query) {
        Ok(encoded) => format!("{SEARCH_PATH}?{encoded}"),
        Err(e) => {
            log::warn!("could not encode search term: {e}");
            SEARCH_PATH.to_owned()
        }
    }
}

/// The trimmed `q` parameter of a search results URL.
pub fn search_term_from_query(query: &str) -> String {
    QueryParams::parse(query).get("q").map(|q| q.trim().to_owned()).unwrap_or_default()
}

/// Number of pages needed to show `count` records.
pub fn page_count(count: u64) -> u64 {
    count.div_ceil(PAGE_SIZE)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Price,
}

impl SortField {
    pub const ALL: [SortField; 2] = [SortField::Id, SortField::Price];

    /// Backend field name.
    pub fn as_param(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Price => "shoePrice",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Price => "Price",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_param() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// `ordering` value: the field name, prefixed with `-` when descending.
pub fn ordering_param(field: SortField, direction: SortDirection) -> String {
    match direction {
        SortDirection::Asc => field.as_param().to_owned(),
        SortDirection::Desc => format!("-{}", field.as_param()),
    }
}

/// Sort choices offered on the public catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogSort {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl CatalogSort {
    pub const ALL: [CatalogSort; 3] = [CatalogSort::Default, CatalogSort::PriceAsc, CatalogSort::PriceDesc];

    /// `<select>` option value.
    pub fn option_value(self) -> &'static str {
        match self {
            CatalogSort::Default => "default",
            CatalogSort::PriceAsc => "ascending",
            CatalogSort::PriceDesc => "descending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogSort::Default => "Featured",
            CatalogSort::PriceAsc => "Price: Low-High",
            CatalogSort::PriceDesc => "Price: High-Low",
        }
    }

    pub fn from_option_value(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.option_value() == raw).unwrap_or_default()
    }

    /// Backend ordering, or `None` to keep the backend's default order.
    pub fn ordering(self) -> Option<String> {
        match self {
            CatalogSort::Default => None,
            CatalogSort::PriceAsc => Some(ordering_param(SortField::Price, SortDirection::Asc)),
            CatalogSort::PriceDesc => Some(ordering_param(SortField::Price, SortDirection::Desc)),
        }
    }
}

/// Query parameters for `GET /shoeDetails/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeQuery {
    /// 1-based page number.
    pub page: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ShoeQuery {
    pub fn page(page: u64) -> Self {
        Self { page: page.max(1), ..Self::default() }
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: Option<String>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Attach a search term; blank terms are dropped.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        let search = search.trim();
        self.search = (!search.is_empty()).then(|| search.to_owned());
        self
    }

    /// Encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_else(|e| {
            log::warn!("could not encode listing query: {e}");
            format!("page={}", self.page)
        })
    }
}

/// Admin listing state as mirrored in the page URL (`page`, `sort`, `dir`, `q`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingParams {
    /// 1-based page number.
    pub page: u64,
    pub field: SortField,
    pub direction: SortDirection,
    pub search: String,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self { page: 1, field: SortField::default(), direction: SortDirection::default(), search: String::new() }
    }
}

#[derive(Serialize)]
struct EncodedListingQuery<'a> {
    page: u64,
    sort: &'a str,
    dir: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
}

impl ListingParams {
    /// Parse from a URL query string. Unknown or malformed values fall back
    /// to their defaults individually.
    pub fn from_query(query: &str) -> Self {
        let raw = QueryParams::parse(query);
        Self {
            page: raw.get("page").and_then(|p| p.parse::<u64>().ok()).filter(|p| *p >= 1).unwrap_or(1),
            field: raw.get("sort").and_then(SortField::from_param).unwrap_or_default(),
            direction: raw.get("dir").and_then(SortDirection::from_param).unwrap_or_default(),
            search: raw.get("q").map(|q| q.trim().to_owned()).unwrap_or_default(),
        }
    }

    /// Encode for the page URL, without the leading `?`.
    pub fn to_query(&self) -> String {
        let encoded = EncodedListingQuery {
            page: self.page,
            sort: self.field.as_param(),
            dir: self.direction.as_param(),
            q: (!self.search.is_empty()).then_some(self.search.as_str()),
        };
        serde_qs::to_string(&encoded).unwrap_or_else(|e| {
            log::warn!("could not encode listing params: {e}");
            format!("page={}", self.page)
        })
    }

    /// Admin listing URL for this state.
    pub fn admin_path(&self) -> String {
        format!("{ADMIN_PATH}?{}", self.to_query())
    }

    /// Backend request for the current state.
    pub fn backend_query(&self) -> ShoeQuery {
        ShoeQuery::page(self.page)
            .with_ordering(Some(ordering_param(self.field, self.direction)))
            .with_search(&self.search)
    }

    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Change the sort field; returns to page 1.
    #[must_use]
    pub fn with_field(mut self, field: SortField) -> Self {
        self.field = field;
        self.page = 1;
        self
    }

    /// Change the sort direction; returns to page 1.
    #[must_use]
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self.page = 1;
        self
    }

    /// Change the search term; returns to page 1.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.trim().to_owned();
        self.page = 1;
        self
    }
}

/// Page numbers for a pager: at most `span` pages centred on `current`.
pub fn visible_pages(current: u64, total: u64, span: u64) -> Vec<u64> {
    if total == 0 || span == 0 {
        return Vec::new();
    }
    let span = span.min(total);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(span / 2).max(1).min(total - span + 1);
    (start..start + span).collect()
}

/// Keep the first `limit` space-separated words, appending `...` if cut.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > limit {
        return format!("{}...", words[..limit].join(" "));
    }
    text.to_owned()
}

/// Rewrite a backend media URL for the browser.
pub fn media_url(path: Option<&str>) -> String {
    match path {
        None | Some("") => String::new(),
        Some(path) => match path.strip_prefix(LOCAL_MEDIA_PREFIX) {
            Some(rest) => format!("{PUBLIC_MEDIA_BASE}{rest}"),
            None => path.to_owned(),
        },
    }
}

/// Price with the storefront currency sign.
pub fn format_price(price: &str) -> String {
    format!("₹ {price}")
}
