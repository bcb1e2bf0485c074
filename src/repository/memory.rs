//! In-memory skill listing repository.
//!
//! The fixture file is read once at startup and the parsed collection is kept
//! for the lifetime of the process; every interaction afterwards works on the
//! held copy instead of re-reading the source.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::skill::{Category, Skill};
use crate::repository::SkillReader;
use crate::repository::errors::RepositoryResult;

/// Accepts both shapes the listing endpoint is allowed to produce: the
/// `{ "data": [...] }` envelope or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsDocument {
    Envelope { data: Vec<Skill> },
    Bare(Vec<Skill>),
}

impl From<SkillsDocument> for Vec<Skill> {
    fn from(doc: SkillsDocument) -> Self {
        match doc {
            SkillsDocument::Envelope { data } => data,
            SkillsDocument::Bare(skills) => skills,
        }
    }
}

/// Repository serving a fixed collection of skill listings from memory.
#[derive(Clone, Debug)]
pub struct InMemorySkillRepository {
    skills: Arc<Vec<Skill>>,
}

impl InMemorySkillRepository {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self {
            skills: Arc::new(skills),
        }
    }

    /// Loads the collection from a JSON fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses the collection from a JSON document.
    pub fn from_json(raw: &str) -> RepositoryResult<Self> {
        let document: SkillsDocument = serde_json::from_str(raw)?;
        Ok(Self::new(document.into()))
    }
}

impl SkillReader for InMemorySkillRepository {
    fn list_skills(&self) -> RepositoryResult<Vec<Skill>> {
        Ok(self.skills.as_ref().clone())
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut categories: Vec<Category> = Vec::new();
        for skill in self.skills.iter() {
            if !categories.iter().any(|c| c.id == skill.category.id) {
                categories.push(skill.category.clone());
            }
        }
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "data": [
            {
                "id": "yoga",
                "name": "Yoga",
                "description": "Vinyasa flow basics",
                "category": { "id": "fitness", "name": "Fitness" },
                "teacher": { "name": "Ana Duarte" }
            },
            {
                "id": "baking",
                "name": "Baking",
                "description": "Sourdough starter care",
                "category": { "id": "cooking", "name": "Cooking" },
                "teacher": { "name": "Maya Lindqvist", "title": "Pastry enthusiast" }
            },
            {
                "id": "running",
                "name": "Running",
                "description": "Couch to 5k",
                "category": { "id": "fitness", "name": "Fitness" },
                "teacher": { "name": "Bo Petersen" }
            }
        ]
    }"#;

    #[test]
    fn parses_the_envelope_shape() {
        let repo = InMemorySkillRepository::from_json(ENVELOPE).unwrap();
        let skills = repo.list_skills().unwrap();
        assert_eq!(skills.len(), 3);
        assert_eq!(skills[0].name, "Yoga");
        assert_eq!(skills[1].teacher.title.as_deref(), Some("Pastry enthusiast"));
    }

    #[test]
    fn parses_a_bare_array() {
        let raw = r#"[
            {
                "id": "yoga",
                "name": "Yoga",
                "description": "",
                "category": { "id": "fitness", "name": "Fitness" },
                "teacher": { "name": "Ana Duarte" }
            }
        ]"#;
        let repo = InMemorySkillRepository::from_json(raw).unwrap();
        assert_eq!(repo.list_skills().unwrap().len(), 1);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(InMemorySkillRepository::from_json("{\"data\": 5}").is_err());
        assert!(InMemorySkillRepository::from_json("not json").is_err());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let repo = InMemorySkillRepository::from_json(ENVELOPE).unwrap();
        let categories = repo.list_categories().unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Fitness", "Cooking"]);
    }

    #[test]
    fn missing_fixture_file_is_a_data_source_error() {
        let err = InMemorySkillRepository::from_path("/no/such/skills.json").unwrap_err();
        assert!(matches!(
            err,
            crate::repository::errors::RepositoryError::DataSource(_)
        ));
    }
}
