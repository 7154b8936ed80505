use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::models::sessions::requests::{CreateSessionRequest, SessionListQuery};
use crate::services::{AttendanceService, CourseService, SessionService};
use crate::utils::SafeIDI64;

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

// 课程下的课次
pub async fn list_course_sessions(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    let query = SessionListQuery {
        course_id: Some(course_id.0),
    };
    SESSION_SERVICE.list_sessions(&req, query).await
}

pub async fn create_course_session(
    req: HttpRequest,
    course_id: SafeIDI64,
    session_data: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .create_session(&req, Some(course_id.0), session_data.into_inner())
        .await
}

// 出勤汇总
pub async fn get_attendance_report(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_course_report(&req, course_id.0).await
}

pub async fn export_attendance_report(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .export_course_report(&req, course_id.0)
        .await
}

pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course))
            .route("/{id}/sessions", web::get().to(list_course_sessions))
            .route("/{id}/sessions", web::post().to(create_course_session))
            .route(
                "/{id}/attendance-report",
                web::get().to(get_attendance_report),
            )
            .route(
                "/{id}/attendance-report/export",
                web::get().to(export_attendance_report),
            ),
    );
}
