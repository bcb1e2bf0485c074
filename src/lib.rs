use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::memory::InMemorySkillRepository;
use crate::routes::api::api_v1_skills;
use crate::routes::browse::show_browse;

pub mod browse;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // The skill collection is loaded once at startup and held in memory for
    // the lifetime of the process.
    let repo = InMemorySkillRepository::from_path(&server_config.skills_path)
        .map_err(|e| std::io::Error::other(format!("Failed to load skill listings: {e}")))?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .service(web::scope("/api").service(api_v1_skills))
            .service(show_browse)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
