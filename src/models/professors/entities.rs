use crate::models::courses::entities::Course;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct Professor {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师详情（附带所授课程）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub professor: Professor,
    pub courses: Vec<Course>,
}
