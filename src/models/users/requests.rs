use super::entities::UserType;
use serde::Deserialize;
use ts_rs::TS;

// 用户创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub user_name: String,
    pub password: String,
    pub user_type: UserType,
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<UserType>,
}
