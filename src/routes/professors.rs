use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::professors::requests::{CreateProfessorRequest, UpdateProfessorRequest};
use crate::services::ProfessorService;
use crate::utils::SafeIDI64;

static PROFESSOR_SERVICE: Lazy<ProfessorService> = Lazy::new(ProfessorService::new_lazy);

pub async fn list_professors(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.list_professors(&req).await
}

pub async fn create_professor(
    req: HttpRequest,
    professor_data: web::Json<CreateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .create_professor(&req, professor_data.into_inner())
        .await
}

pub async fn get_professor(req: HttpRequest, professor_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.get_professor(&req, professor_id.0).await
}

pub async fn update_professor(
    req: HttpRequest,
    professor_id: SafeIDI64,
    update_data: web::Json<UpdateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .update_professor(&req, professor_id.0, update_data.into_inner())
        .await
}

pub async fn delete_professor(
    req: HttpRequest,
    professor_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.delete_professor(&req, professor_id.0).await
}

pub fn configure_professor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/professors")
            .route("", web::get().to(list_professors))
            .route("", web::post().to(create_professor))
            .route("/{id}", web::get().to(get_professor))
            .route("/{id}", web::put().to(update_professor))
            .route("/{id}", web::delete().to(delete_professor)),
    );
}
