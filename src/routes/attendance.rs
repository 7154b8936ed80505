use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attendance::requests::{
    AttendanceListQuery, CheckInRequest, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceListQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(&req, query.into_inner())
        .await
}

pub async fn mark_attendance(
    req: HttpRequest,
    attendance_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(&req, attendance_data.into_inner())
        .await
}

pub async fn check_in(
    req: HttpRequest,
    check_in_data: web::Json<CheckInRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .check_in(&req, check_in_data.into_inner())
        .await
}

pub async fn get_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_attendance(&req, attendance_id.0).await
}

pub async fn update_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
    update_data: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(&req, attendance_id.0, update_data.into_inner())
        .await
}

pub async fn delete_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .delete_attendance(&req, attendance_id.0)
        .await
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    // /check-in 需在 /{id} 之前注册
    cfg.service(
        web::scope("/api/v1/attendance")
            .route("", web::get().to(list_attendance))
            .route("", web::post().to(mark_attendance))
            .route("/check-in", web::post().to(check_in))
            .route("/{id}", web::get().to(get_attendance))
            .route("/{id}", web::put().to(update_attendance))
            .route("/{id}", web::delete().to(delete_attendance)),
    );
}
