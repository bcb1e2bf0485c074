use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::dto::browse::BrowseQuery;
use crate::repository::memory::InMemorySkillRepository;
use crate::routes::render_template;
use crate::services::browse::load_browse_page;

#[derive(Deserialize)]
struct BrowseQueryParams {
    q: Option<String>,
    category: Option<String>,
    page: Option<usize>,
    remove: Option<String>,
    clear: Option<bool>,
}

impl From<BrowseQueryParams> for BrowseQuery {
    fn from(params: BrowseQueryParams) -> Self {
        Self {
            q: params.q,
            category: params.category,
            page: params.page,
            remove: params.remove,
            clear: params.clear.unwrap_or(false),
        }
    }
}

#[get("/")]
pub async fn show_browse(
    params: web::Query<BrowseQueryParams>,
    repo: web::Data<InMemorySkillRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match load_browse_page(repo.get_ref(), params.into_inner().into()) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load skill listings: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("skills", &data.skills);
    context.insert("filtered_count", &data.filtered_count);
    context.insert("chips", &data.chips);
    context.insert("categories", &data.categories);
    context.insert("search_query", &data.search_query);
    context.insert("selected_category", &data.selected_category);
    context.insert("query_base", &data.query_base);

    render_template(&tera, "main/browse.html", &context)
}
