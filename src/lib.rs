#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod fixtures;
#[cfg(feature = "data")]
pub mod format;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod query;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod stats;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::InMemoryRepository;

/// Registers every JSON endpoint under `/api`.
#[cfg(feature = "server")]
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    use crate::routes::api::{api_v1_clients, api_v1_overview};
    use crate::routes::client::{add_client, add_communication, add_note, delete_note, show_client};

    cfg.service(
        web::scope("/api")
            .service(api_v1_clients)
            .service(api_v1_overview)
            .service(add_client)
            .service(show_client)
            .service(add_note)
            .service(delete_note)
            .service(add_communication),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig, repo: InMemoryRepository) -> std::io::Result<()> {
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving {} clients on {}:{}",
        repo.len().unwrap_or_default(),
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure_api)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
