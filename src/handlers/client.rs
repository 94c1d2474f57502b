use crate::models::*;
use crate::models::pagination::PaginationParams;
use crate::services::ClientService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/clients",
    tag = "client",
    request_body = CreateClientRequest,
    responses(
        (status = 200, description = "Client created", body = ClientResponse),
        (status = 400, description = "Invalid or duplicate client name")
    )
)]
pub async fn create_client(
    client_service: web::Data<ClientService>,
    request: web::Json<CreateClientRequest>,
) -> Result<HttpResponse> {
    match client_service.create_client(request.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/clients",
    tag = "client",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Client master list")
    )
)]
pub async fn list_clients(
    client_service: web::Data<ClientService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match client_service.list_clients(&query.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "client",
    request_body = UpdateClientRequest,
    params(
        ("id" = i64, Path, description = "Client id")
    ),
    responses(
        (status = 200, description = "Client updated", body = ClientResponse),
        (status = 400, description = "Nothing to update or name clash"),
        (status = 404, description = "Unknown client")
    )
)]
pub async fn update_client(
    client_service: web::Data<ClientService>,
    path: web::Path<i64>,
    request: web::Json<UpdateClientRequest>,
) -> Result<HttpResponse> {
    match client_service
        .update_client(path.into_inner(), request.into_inner())
        .await
    {
        Ok(resp) => Ok(HttpResponse::Ok().json(json!({"success": true, "data": resp}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn client_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clients")
            .route("", web::post().to(create_client))
            .route("", web::get().to(list_clients))
            .route("/{id}", web::put().to(update_client)),
    );
}
