use crate::domain::skill::{Category, Skill};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read access to the skill listing collection.
///
/// Implementations return the full collection: filtering and pagination are
/// applied client-side by the browse controller, which must not rely on the
/// data source honoring any query parameters.
pub trait SkillReader {
    /// Returns every listing in presentation order.
    fn list_skills(&self) -> RepositoryResult<Vec<Skill>>;

    /// Returns the distinct categories in first-seen order, for the tab
    /// strip.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}
