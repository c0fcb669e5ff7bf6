use actix_web::{HttpResponse, Responder, delete, get, post, web};
use chrono::Utc;

use crate::forms::client::{AddCommunicationForm, AddNoteForm};
use crate::forms::main::AddClientForm;
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::client as client_service;

#[get("/v1/clients/{client_id}")]
pub async fn show_client(
    client_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match client_service::load_client_page(repo.get_ref(), &client_id, Utc::now().naive_utc()) {
        Ok(Some(data)) => HttpResponse::Ok().json(data),
        Ok(None) => error_response(ServiceError::NotFound),
        Err(err) => error_response(err),
    }
}

#[post("/v1/clients")]
pub async fn add_client(
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<AddClientForm>,
) -> impl Responder {
    match client_service::create_client(repo.get_ref(), form) {
        Ok(client) => HttpResponse::Created().json(client),
        Err(err) => error_response(err),
    }
}

#[post("/v1/clients/{client_id}/notes")]
pub async fn add_note(
    client_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<AddNoteForm>,
) -> impl Responder {
    match client_service::add_note(repo.get_ref(), &client_id, form) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err),
    }
}

#[delete("/v1/clients/{client_id}/notes/{note_id}")]
pub async fn delete_note(
    path: web::Path<(String, String)>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    let (client_id, note_id) = path.into_inner();

    match client_service::delete_note(repo.get_ref(), &client_id, &note_id) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err),
    }
}

#[post("/v1/clients/{client_id}/communications")]
pub async fn add_communication(
    client_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<AddCommunicationForm>,
) -> impl Responder {
    match client_service::log_communication(repo.get_ref(), &client_id, form) {
        Ok(client) => HttpResponse::Created().json(client),
        Err(err) => error_response(err),
    }
}
