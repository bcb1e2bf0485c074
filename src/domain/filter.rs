//! Filter state for the skill browse view.
//!
//! `FilterSet` is the single canonical record of the active filters; the chip
//! list shown in the UI is derived from it on demand and never stored
//! separately, so the two cannot drift apart.

use serde::Serialize;

use crate::domain::skill::Skill;

/// Chip identifier for the free-text search filter.
pub const SEARCH_CHIP_ID: &str = "search";

/// Chip identifier for the category filter.
pub const CATEGORY_CHIP_ID: &str = "category";

/// The closed set of filter kinds the browse controller supports.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Search,
    Category,
}

/// A removable token representing one active filter.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FilterChip {
    pub id: String,
    pub label: String,
    pub kind: FilterKind,
}

/// Canonical filter state: at most one search term and one category name.
///
/// Setting a filter of a kind replaces any previous filter of that kind;
/// chips therefore never accumulate within a kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    search: Option<String>,
    category: Option<String>,
}

impl FilterSet {
    /// Replaces the search filter with the literal `term`, or clears it when
    /// the term is empty.
    pub fn set_search(&mut self, term: &str) {
        if term.is_empty() {
            self.search = None;
        } else {
            self.search = Some(term.to_string());
        }
    }

    /// Replaces the category filter, or clears it when `name` is empty.
    pub fn set_category(&mut self, name: &str) {
        if name.is_empty() {
            self.category = None;
        } else {
            self.category = Some(name.to_string());
        }
    }

    /// Removes the filter identified by `chip_id`. Unknown ids are ignored.
    pub fn remove(&mut self, chip_id: &str) {
        match chip_id {
            SEARCH_CHIP_ID => self.search = None,
            CATEGORY_CHIP_ID => self.category = None,
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Derives the chip list from the canonical state, search chip first.
    pub fn chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if let Some(term) = &self.search {
            chips.push(FilterChip {
                id: SEARCH_CHIP_ID.to_string(),
                label: term.clone(),
                kind: FilterKind::Search,
            });
        }
        if let Some(name) = &self.category {
            chips.push(FilterChip {
                id: CATEGORY_CHIP_ID.to_string(),
                label: name.clone(),
                kind: FilterKind::Category,
            });
        }
        chips
    }

    /// Applies the active predicates to `skills` in a fixed order: search
    /// first, then category. Both predicates are independent, but applying
    /// them in one consistent order keeps combined-filter counts
    /// deterministic.
    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        let needle = self.search.as_ref().map(|s| s.to_lowercase());
        let category = self.category.as_ref().map(|s| s.to_lowercase());

        skills
            .iter()
            .filter(|skill| match &needle {
                Some(needle) => matches_search(skill, needle),
                None => true,
            })
            .filter(|skill| match &category {
                Some(category) => skill.category.name.to_lowercase() == *category,
                None => true,
            })
            .collect()
    }
}

/// Case-insensitive substring match across name, description, category name
/// and teacher name. `needle` must already be lower-cased.
fn matches_search(skill: &Skill, needle: &str) -> bool {
    skill.name.to_lowercase().contains(needle)
        || skill.description.to_lowercase().contains(needle)
        || skill.category.name.to_lowercase().contains(needle)
        || skill.teacher.name.to_lowercase().contains(needle)
}
