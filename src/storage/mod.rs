use std::sync::Arc;

use crate::models::{
    attendance::{
        entities::AttendanceDetail,
        report::AttendanceReport,
        requests::{AttendanceListQuery, MarkAttendanceRequest, UpdateAttendanceRequest},
    },
    courses::{
        entities::CourseDetail,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    enrollments::{
        entities::EnrollmentDetail,
        requests::{CreateEnrollmentRequest, EnrollmentListQuery, UpdateEnrollmentRequest},
    },
    professors::{
        entities::ProfessorDetail,
        requests::{CreateProfessorRequest, UpdateProfessorRequest},
    },
    sessions::{
        entities::SessionDetail,
        requests::{CreateSessionRequest, SessionListQuery, UpdateSessionRequest},
    },
    students::{
        entities::StudentDetail,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户，教师账号在同一事务中创建教师档案（密码须已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserResponse>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, user_name: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 更新用户信息（密码须已哈希）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 教师管理方法
    async fn create_professor(&self, req: CreateProfessorRequest) -> Result<ProfessorDetail>;
    async fn get_professor_by_id(&self, id: i64) -> Result<Option<ProfessorDetail>>;
    async fn list_professors(&self) -> Result<Vec<ProfessorDetail>>;
    async fn update_professor(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<ProfessorDetail>>;
    async fn delete_professor(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, req: CreateStudentRequest) -> Result<StudentDetail>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>>;
    async fn list_students(&self) -> Result<Vec<StudentDetail>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, req: CreateCourseRequest) -> Result<CourseDetail>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<CourseDetail>>;
    async fn list_courses(&self) -> Result<Vec<CourseDetail>>;
    async fn update_course(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<CourseDetail>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 课次管理方法
    // 创建课次，course_id 已由服务层确定
    async fn create_session(&self, course_id: i64, req: CreateSessionRequest)
    -> Result<SessionDetail>;
    async fn get_session_by_id(&self, id: i64) -> Result<Option<SessionDetail>>;
    async fn list_sessions(&self, query: SessionListQuery) -> Result<Vec<SessionDetail>>;
    async fn update_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<SessionDetail>>;
    async fn delete_session(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<EnrollmentDetail>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<EnrollmentDetail>>;
    async fn list_enrollments(&self, query: EnrollmentListQuery)
    -> Result<Vec<EnrollmentDetail>>;
    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<EnrollmentDetail>>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 按 (student_id, session_id) 登记考勤，已存在则覆盖
    async fn mark_attendance(&self, req: MarkAttendanceRequest) -> Result<AttendanceDetail>;
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceDetail>>;
    async fn list_attendance(&self, query: AttendanceListQuery) -> Result<Vec<AttendanceDetail>>;
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceDetail>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;
    // 课程出勤汇总，课程不存在时返回 None
    async fn get_attendance_report(&self, course_id: i64) -> Result<Option<AttendanceReport>>;

    /// 系统方法
    // 数据库连通性检查
    async fn ping(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
