// 业务错误码，随响应体中的 code 字段返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 用户
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserCreationFailed = 2003,
    UserUpdateFailed = 2004,
    UserDeleteFailed = 2005,

    // 教师
    ProfessorNotFound = 2101,
    ProfessorCreationFailed = 2102,
    ProfessorUpdateFailed = 2103,
    ProfessorDeleteFailed = 2104,

    // 学生
    StudentNotFound = 2201,
    StudentAlreadyExists = 2202,
    StudentCreationFailed = 2203,
    StudentUpdateFailed = 2204,
    StudentDeleteFailed = 2205,

    // 课程
    CourseNotFound = 2301,
    CourseCreationFailed = 2302,
    CourseUpdateFailed = 2303,
    CourseDeleteFailed = 2304,

    // 课次
    SessionNotFound = 2401,
    SessionCreationFailed = 2402,
    SessionUpdateFailed = 2403,
    SessionDeleteFailed = 2404,

    // 选课
    EnrollmentNotFound = 2501,
    EnrollmentCreationFailed = 2502,
    EnrollmentUpdateFailed = 2503,
    EnrollmentDeleteFailed = 2504,

    // 考勤
    AttendanceNotFound = 2601,
    AttendanceMarkFailed = 2602,
    AttendanceUpdateFailed = 2603,
    AttendanceDeleteFailed = 2604,
    AttendanceTokenInvalid = 2605,
    AttendanceReportFailed = 2606,
}
