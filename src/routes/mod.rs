pub mod attendance;

pub mod courses;

pub mod enrollments;

pub mod professors;

pub mod sessions;

pub mod students;

pub mod system;

pub mod users;

#[cfg(test)]
mod tests;

pub use attendance::configure_attendance_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use professors::configure_professor_routes;
pub use sessions::configure_session_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

use actix_web::web;

// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    configure_user_routes(cfg);
    configure_professor_routes(cfg);
    configure_student_routes(cfg);
    configure_course_routes(cfg);
    configure_session_routes(cfg);
    configure_enrollment_routes(cfg);
    configure_attendance_routes(cfg);
    configure_system_routes(cfg);
}
