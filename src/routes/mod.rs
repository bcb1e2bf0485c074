//! HTTP route handlers and shared response helpers.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod browse;

/// Renders a Tera template into an HTML response. Render failures are logged
/// and surface as a 500.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
