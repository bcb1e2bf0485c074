//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::skill::{Category, Skill};
use crate::repository::SkillReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl SkillReader for Repository {
        fn list_skills(&self) -> RepositoryResult<Vec<Skill>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}
