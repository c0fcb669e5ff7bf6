use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::Utc;
use serde_json::json;

use crate::dto::main::IndexQuery;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::api as api_service;
use crate::services::main as main_service;

/// Filtered, sorted and paginated client list.
///
/// Set filters repeat their key, e.g. `?country=Ghana&country=UK&sort_aua=desc`.
#[get("/v1/clients")]
pub async fn api_v1_clients(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let params: IndexQuery = match serde_html_form::from_str(req.query_string()) {
        Ok(params) => params,
        Err(err) => {
            log::error!("Failed to parse client list query: {err}");
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        }
    };

    match api_service::list_clients(
        repo.get_ref(),
        &params,
        server_config.items_per_page,
        Utc::now().naive_utc(),
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err),
    }
}

/// Whole-book overview: current page, country options and portfolio summary.
#[get("/v1/overview")]
pub async fn api_v1_overview(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let params: IndexQuery = match serde_html_form::from_str(req.query_string()) {
        Ok(params) => params,
        Err(err) => {
            log::error!("Failed to parse overview query: {err}");
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        }
    };

    match main_service::load_index_page(
        repo.get_ref(),
        params,
        server_config.items_per_page,
        Utc::now().naive_utc(),
    ) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err),
    }
}
