use serde::Deserialize;
use ts_rs::TS;

// 创建教师请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct CreateProfessorRequest {
    pub name: String,
}

// 更新教师请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct UpdateProfessorRequest {
    pub name: Option<String>,
}
