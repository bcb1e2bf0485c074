use serde::Serialize;

use crate::domain::filter::FilterKind;
use crate::domain::skill::{Category, Skill};
use crate::pagination::Paginated;

/// User intent decoded from one browse request.
#[derive(Debug, Default)]
pub struct BrowseQuery {
    /// Free-text search term typed by the user.
    pub q: Option<String>,
    /// Category tab picked by the user.
    pub category: Option<String>,
    /// Requested 1-indexed page number.
    pub page: Option<usize>,
    /// Chip identifier to remove before rendering.
    pub remove: Option<String>,
    /// Remove every active filter before rendering.
    pub clear: bool,
}

/// An active filter chip together with the link that removes it.
#[derive(Debug, Serialize)]
pub struct ChipView {
    pub id: String,
    pub label: String,
    pub kind: FilterKind,
    pub remove_url: String,
}

/// Data required to render the browse template.
#[derive(Debug)]
pub struct BrowsePageData {
    /// Current page of listings with the page-range labels.
    pub skills: Paginated<Skill>,
    /// Count of listings matching every active filter.
    pub filtered_count: usize,
    /// Active filter chips in display order.
    pub chips: Vec<ChipView>,
    /// Category tabs, distinct and in first-seen order.
    pub categories: Vec<Category>,
    /// Search term echoed back into the search input.
    pub search_query: Option<String>,
    /// Category echoed back to highlight the active tab.
    pub selected_category: Option<String>,
    /// Query string encoding the active filters, for page links.
    pub query_base: String,
}
