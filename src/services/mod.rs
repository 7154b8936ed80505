pub mod attendance;
pub mod courses;
pub mod enrollments;
pub mod professors;
pub mod sessions;
pub mod students;
pub mod system;
pub mod users;

mod responses;

pub use attendance::AttendanceService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use professors::ProfessorService;
pub use sessions::SessionService;
pub use students::StudentService;
pub use system::SystemService;
pub use users::UserService;
