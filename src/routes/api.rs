use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde_json::json;

use crate::repository::SkillReader;
use crate::repository::memory::InMemorySkillRepository;

/// Listing endpoint consumed by the browse view. Returns the full collection
/// in a `{ "data": [...] }` envelope; filtering happens client-side.
#[get("/v1/skills")]
pub async fn api_v1_skills(repo: web::Data<InMemorySkillRepository>) -> impl Responder {
    match repo.list_skills() {
        Ok(skills) => HttpResponse::Ok().json(json!({ "data": skills })),
        Err(e) => {
            error!("Failed to list skills: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
