use serde::Deserialize;
use ts_rs::TS;

// 创建学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub academic_number: String,
    pub student_name: String,
}

// 更新学生请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub academic_number: Option<String>,
    pub student_name: Option<String>,
}
