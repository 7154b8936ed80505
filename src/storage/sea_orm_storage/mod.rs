//! SeaORM 存储实现
//!
//! 考勤台账的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 各实体的读写实现位于同名子模块，关联数据的批量加载位于 `relations`。

mod attendance;
mod courses;
mod enrollments;
mod professors;
mod relations;
mod sessions;
mod students;
mod users;

#[cfg(test)]
mod tests;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{LedgerError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按给定数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LedgerError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LedgerError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LedgerError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(config.pool_size.min(5))
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LedgerError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LedgerError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserResponse> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, user_name: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(user_name).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 教师模块
    async fn create_professor(&self, req: CreateProfessorRequest) -> Result<ProfessorDetail> {
        self.create_professor_impl(req).await
    }

    async fn get_professor_by_id(&self, id: i64) -> Result<Option<ProfessorDetail>> {
        self.get_professor_by_id_impl(id).await
    }

    async fn list_professors(&self) -> Result<Vec<ProfessorDetail>> {
        self.list_professors_impl().await
    }

    async fn update_professor(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<ProfessorDetail>> {
        self.update_professor_impl(id, update).await
    }

    async fn delete_professor(&self, id: i64) -> Result<bool> {
        self.delete_professor_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<StudentDetail> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self) -> Result<Vec<StudentDetail>> {
        self.list_students_impl().await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, req: CreateCourseRequest) -> Result<CourseDetail> {
        self.create_course_impl(req).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<CourseDetail>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self) -> Result<Vec<CourseDetail>> {
        self.list_courses_impl().await
    }

    async fn update_course(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<CourseDetail>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 课次模块
    async fn create_session(
        &self,
        course_id: i64,
        req: CreateSessionRequest,
    ) -> Result<SessionDetail> {
        self.create_session_impl(course_id, req).await
    }

    async fn get_session_by_id(&self, id: i64) -> Result<Option<SessionDetail>> {
        self.get_session_by_id_impl(id).await
    }

    async fn list_sessions(&self, query: SessionListQuery) -> Result<Vec<SessionDetail>> {
        self.list_sessions_impl(query).await
    }

    async fn update_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<SessionDetail>> {
        self.update_session_impl(id, update).await
    }

    async fn delete_session(&self, id: i64) -> Result<bool> {
        self.delete_session_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<EnrollmentDetail> {
        self.create_enrollment_impl(req).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<EnrollmentDetail>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn list_enrollments(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<Vec<EnrollmentDetail>> {
        self.list_enrollments_impl(query).await
    }

    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<EnrollmentDetail>> {
        self.update_enrollment_impl(id, update).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    // 考勤模块
    async fn mark_attendance(&self, req: MarkAttendanceRequest) -> Result<AttendanceDetail> {
        self.mark_attendance_impl(req).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceDetail>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn list_attendance(&self, query: AttendanceListQuery) -> Result<Vec<AttendanceDetail>> {
        self.list_attendance_impl(query).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceDetail>> {
        self.update_attendance_impl(id, update).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    async fn get_attendance_report(&self, course_id: i64) -> Result<Option<AttendanceReport>> {
        self.get_attendance_report_impl(course_id).await
    }

    // 系统
    async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| LedgerError::database_connection(format!("数据库连通性检查失败: {e}")))
    }
}
