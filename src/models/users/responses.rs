use super::entities::User;
use crate::models::professors::entities::Professor;
use serde::Serialize;
use ts_rs::TS;

// 用户创建响应，教师账号附带同步创建的教师档案
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserResponse {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor: Option<Professor>,
}
