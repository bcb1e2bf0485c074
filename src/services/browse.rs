//! Browse page use case: drives a [`SkillBrowser`] through the operations
//! encoded in one request and assembles the template data.

use serde::Serialize;

use crate::browse::SkillBrowser;
use crate::domain::filter::{FilterChip, FilterKind};
use crate::dto::browse::{BrowsePageData, BrowseQuery, ChipView};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::SkillReader;
use crate::services::{ServiceError, ServiceResult};

/// Filters serialized into page and chip-removal links.
#[derive(Serialize)]
struct LinkParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

fn query_string(q: Option<&str>, category: Option<&str>) -> ServiceResult<String> {
    serde_html_form::to_string(LinkParams { q, category })
        .map_err(|e| ServiceError::Internal(format!("failed to encode query string: {e}")))
}

fn remove_url(
    removed: &FilterChip,
    search: Option<&str>,
    category: Option<&str>,
) -> ServiceResult<String> {
    let (q, category) = match removed.kind {
        FilterKind::Search => (None, category),
        FilterKind::Category => (search, None),
    };

    let query = query_string(q, category)?;
    if query.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/?{query}"))
    }
}

/// Loads the skill collection, applies the operations encoded in `query` and
/// returns everything the browse template needs.
///
/// Operation order matters: filters first (each one resets pagination), then
/// chip removal or clear-all, then the explicit page change.
pub fn load_browse_page<R>(repo: &R, query: BrowseQuery) -> ServiceResult<BrowsePageData>
where
    R: SkillReader + ?Sized,
{
    let skills = repo.list_skills()?;
    let categories = repo.list_categories()?;

    let mut browser = SkillBrowser::new(skills, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = &query.q {
        browser.apply_search(term);
    }
    if let Some(name) = &query.category {
        browser.apply_category(name);
    }
    if query.clear {
        browser.clear_all();
    }
    if let Some(chip_id) = &query.remove {
        browser.remove_filter(chip_id);
    }
    if let Some(page) = query.page {
        browser.change_page(page);
    }

    let view = browser.view();

    let search_query = browser.search_term().map(str::to_string);
    let selected_category = browser.category_name().map(str::to_string);

    let chips = view
        .chips
        .iter()
        .map(|chip| {
            let url = remove_url(chip, browser.search_term(), browser.category_name())?;
            Ok(ChipView {
                id: chip.id.clone(),
                label: chip.label.clone(),
                kind: chip.kind,
                remove_url: url,
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    let query_base = query_string(browser.search_term(), browser.category_name())?;

    Ok(BrowsePageData {
        skills: Paginated::new(view.visible, view.current_page, view.total_pages),
        filtered_count: view.filtered_count,
        chips,
        categories,
        search_query,
        selected_category,
        query_base,
    })
}
