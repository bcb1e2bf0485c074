//! The browse controller: filter, search and pagination state for the skill
//! marketplace view.
//!
//! `SkillBrowser` owns a snapshot of the full listing collection for the
//! lifetime of the view and re-derives the visible page from it after every
//! state change. The collection itself is never refetched or mutated here.

use crate::domain::filter::{FilterChip, FilterSet};
use crate::domain::skill::Skill;

/// Sentinel category name meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All Categories";

/// View model handed to the rendering layer after each state change.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView {
    pub visible: Vec<Skill>,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub chips: Vec<FilterChip>,
}

/// Filter/search/pagination state machine over an in-memory collection.
///
/// Every filter mutation resets the current page to 1; only an explicit page
/// change moves it. Page derivation applies the active predicates in a fixed
/// order (search, then category), counts the result, and slices out the
/// requested window.
#[derive(Debug, Clone)]
pub struct SkillBrowser {
    skills: Vec<Skill>,
    filters: FilterSet,
    current_page: usize,
    per_page: usize,
}

impl SkillBrowser {
    /// Creates a browser over `skills` showing `per_page` items per page.
    pub fn new(skills: Vec<Skill>, per_page: usize) -> Self {
        Self {
            skills,
            filters: FilterSet::default(),
            current_page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Applies a free-text search. An empty term removes the search filter;
    /// any other term replaces it. Resets to page 1.
    pub fn apply_search(&mut self, term: &str) {
        self.filters.set_search(term);
        self.current_page = 1;
    }

    /// Applies a category filter. The [`ALL_CATEGORIES`] sentinel (or an
    /// empty name) removes it; any other name replaces it. Resets to page 1.
    pub fn apply_category(&mut self, name: &str) {
        if name == ALL_CATEGORIES {
            self.filters.set_category("");
        } else {
            self.filters.set_category(name);
        }
        self.current_page = 1;
    }

    /// Removes a single filter chip by id, rebuilding the predicate set from
    /// the remaining filters. Resets to page 1.
    pub fn remove_filter(&mut self, chip_id: &str) {
        self.filters.remove(chip_id);
        self.current_page = 1;
    }

    /// Removes every filter and returns to the first page of the unfiltered
    /// collection. Idempotent.
    pub fn clear_all(&mut self) {
        self.filters.clear();
        self.current_page = 1;
    }

    /// Moves to `page` without touching the filters. Page 0 and pages past
    /// the end of the current filtered collection leave state unchanged.
    pub fn change_page(&mut self, page: usize) {
        if page == 0 || page > self.total_pages() {
            return;
        }
        self.current_page = page;
    }

    pub fn search_term(&self) -> Option<&str> {
        self.filters.search_term()
    }

    pub fn category_name(&self) -> Option<&str> {
        self.filters.category_name()
    }

    fn total_pages(&self) -> usize {
        self.filters.apply(&self.skills).len().div_ceil(self.per_page)
    }

    /// Derives the visible page: predicates in fixed order, then count, then
    /// the window slice. The current page is clamped to the last valid page
    /// so a stale page number can never produce an out-of-range slice.
    pub fn view(&self) -> BrowseView {
        let filtered = self.filters.apply(&self.skills);
        let filtered_count = filtered.len();
        let total_pages = filtered_count.div_ceil(self.per_page);

        let current_page = self.current_page.min(total_pages.max(1));

        let visible = filtered
            .into_iter()
            .skip((current_page - 1) * self.per_page)
            .take(self.per_page)
            .cloned()
            .collect();

        BrowseView {
            visible,
            filtered_count,
            current_page,
            total_pages,
            chips: self.filters.chips(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{CATEGORY_CHIP_ID, FilterKind, SEARCH_CHIP_ID};
    use crate::domain::skill::{Category, SkillTeacher};

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: format!("Learn {name} with a colleague"),
            category: Category {
                id: category.to_lowercase(),
                name: category.to_string(),
            },
            teacher: SkillTeacher {
                name: "Sam Okafor".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn collection() -> Vec<Skill> {
        vec![
            skill("Yoga", "Fitness"),
            skill("Baking", "Cooking"),
            skill("Yodeling", "Music"),
        ]
    }

    fn ten_skills() -> Vec<Skill> {
        (1..=10).map(|i| skill(&format!("Skill {i:02}"), "Misc")).collect()
    }

    #[test]
    fn search_counts_match_the_collection() {
        let mut browser = SkillBrowser::new(collection(), 8);
        browser.apply_search("yo");

        let view = browser.view();
        assert_eq!(view.filtered_count, 2);
        let names: Vec<_> = view.visible.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Yoga", "Yodeling"]);
    }

    #[test]
    fn search_replaces_rather_than_accumulates() {
        let mut browser = SkillBrowser::new(collection(), 8);
        browser.apply_search("a");
        browser.apply_search("b");

        let chips = browser.view().chips;
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "b");
        assert_eq!(chips[0].kind, FilterKind::Search);
    }

    #[test]
    fn zero_match_search_keeps_its_chip() {
        let mut browser = SkillBrowser::new(collection(), 8);
        browser.apply_search("no such skill");

        let view = browser.view();
        assert_eq!(view.filtered_count, 0);
        assert!(view.visible.is_empty());
        assert_eq!(view.chips.len(), 1);
        assert_eq!(view.chips[0].label, "no such skill");
    }

    #[test]
    fn empty_search_removes_the_chip() {
        let mut browser = SkillBrowser::new(collection(), 8);
        browser.apply_search("yo");
        browser.apply_search("");

        let view = browser.view();
        assert!(view.chips.is_empty());
        assert_eq!(view.filtered_count, 3);
    }

    #[test]
    fn all_categories_sentinel_clears_the_category_filter() {
        let mut browser = SkillBrowser::new(collection(), 8);
        browser.apply_category("Fitness");
        assert_eq!(browser.view().filtered_count, 1);

        browser.apply_category(ALL_CATEGORIES);
        assert_eq!(browser.view().filtered_count, 3);
        assert!(browser.view().chips.is_empty());
    }

    #[test]
    fn search_and_category_combine_with_logical_and() {
        let mut browser = SkillBrowser::new(collection(), 8);
        browser.apply_search("yo");
        browser.apply_category("Music");

        let view = browser.view();
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.visible[0].name, "Yodeling");
        assert_eq!(view.chips.len(), 2);
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut browser = SkillBrowser::new(ten_skills(), 8);
        browser.apply_search("skill");
        browser.change_page(2);

        browser.clear_all();
        let once = browser.view();
        browser.clear_all();
        let twice = browser.view();

        assert_eq!(once, twice);
        assert_eq!(once.current_page, 1);
        assert!(once.chips.is_empty());
        assert_eq!(once.visible.len(), 8);
    }

    #[test]
    fn filter_change_resets_the_page() {
        let mut browser = SkillBrowser::new(ten_skills(), 4);
        browser.change_page(3);
        assert_eq!(browser.view().current_page, 3);

        browser.apply_search("skill");
        assert_eq!(browser.view().current_page, 1);

        browser.change_page(2);
        browser.apply_category("Misc");
        assert_eq!(browser.view().current_page, 1);

        browser.change_page(2);
        browser.remove_filter(CATEGORY_CHIP_ID);
        assert_eq!(browser.view().current_page, 1);
    }

    #[test]
    fn removing_a_chip_restores_the_prior_view() {
        let mut browser = SkillBrowser::new(collection(), 8);
        let before = browser.view();

        browser.apply_category("Cooking");
        assert_eq!(browser.view().filtered_count, 1);

        browser.remove_filter(CATEGORY_CHIP_ID);
        assert_eq!(browser.view(), before);
    }

    #[test]
    fn removing_the_search_chip_clears_the_live_term() {
        let mut browser = SkillBrowser::new(collection(), 8);
        browser.apply_search("yo");
        browser.remove_filter(SEARCH_CHIP_ID);

        assert_eq!(browser.search_term(), None);
        assert_eq!(browser.view().filtered_count, 3);
    }

    #[test]
    fn change_page_guards_invalid_targets() {
        let mut browser = SkillBrowser::new(ten_skills(), 8);

        browser.change_page(0);
        assert_eq!(browser.view().current_page, 1);

        browser.change_page(3);
        assert_eq!(browser.view().current_page, 1);

        browser.change_page(2);
        assert_eq!(browser.view().current_page, 2);
    }

    #[test]
    fn narrowing_filters_never_leave_a_stale_page() {
        let mut browser = SkillBrowser::new(ten_skills(), 2);
        browser.change_page(5);
        assert_eq!(browser.view().current_page, 5);

        // "Skill 10" is the only listing not matching "Skill 0": the search
        // narrows the collection to 9 items and resets to page 1.
        browser.apply_search("Skill 0");
        let view = browser.view();
        assert_eq!(view.filtered_count, 9);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 5);

        // A page change past the new last page is ignored.
        browser.change_page(6);
        assert_eq!(browser.view().current_page, 1);
    }

    #[test]
    fn empty_collection_is_harmless() {
        let mut browser = SkillBrowser::new(vec![], 8);
        browser.apply_search("anything");
        browser.apply_category("Fitness");
        browser.change_page(2);

        let view = browser.view();
        assert_eq!(view.filtered_count, 0);
        assert!(view.visible.is_empty());
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut browser = SkillBrowser::new(ten_skills(), 8);

        let first = browser.view();
        assert_eq!(first.visible.len(), 8);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.visible[0].name, "Skill 01");

        browser.change_page(2);
        let second = browser.view();
        assert_eq!(second.visible.len(), 2);
        assert_eq!(second.visible[0].name, "Skill 09");
        assert_eq!(second.visible[1].name, "Skill 10");

        browser.apply_search("Skill 01");
        let searched = browser.view();
        assert_eq!(searched.current_page, 1);
        assert_eq!(searched.filtered_count, 1);
        assert_eq!(searched.total_pages, 1);
    }
}
