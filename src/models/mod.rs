pub mod attendance;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod professors;
pub mod sessions;
pub mod students;
pub mod system;
pub mod users;

pub use common::{ApiResponse, ErrorCode};

use chrono::{DateTime, Utc};

// 服务启动时间，供健康检查计算运行时长
#[derive(Clone)]
pub struct AppStartTime {
    pub start_datetime: DateTime<Utc>,
}
