use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A skill category shown in the tab strip and on listing cards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Public profile of the colleague offering a skill.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SkillTeacher {
    pub name: String,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
}

/// One skill listing in the marketplace.
///
/// Listings are read-only for the lifetime of the browse view: the controller
/// only ever selects and orders them, it never edits one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub teacher: SkillTeacher,
    /// Presentation-only fields carried through untouched by filtering.
    pub image_url: Option<String>,
    pub rating: Option<f32>,
    pub sessions_completed: Option<u32>,
    pub created_at: Option<NaiveDateTime>,
}
