//! 预导入模块，方便使用

pub use super::course_attendance::{
    ActiveModel as AttendanceActiveModel, Entity as CourseAttendance, Model as AttendanceModel,
};
pub use super::course_enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as CourseEnrollments, Model as EnrollmentModel,
};
pub use super::course_sessions::{
    ActiveModel as SessionActiveModel, Entity as CourseSessions, Model as SessionModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::professors::{
    ActiveModel as ProfessorActiveModel, Entity as Professors, Model as ProfessorModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
