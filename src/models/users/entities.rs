use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserType {
    Professors, // 教师账号，创建时同步生成教师档案
    Admin,      // 管理员
}

impl UserType {
    pub const PROFESSORS: &'static str = "Professors";
    pub const ADMIN: &'static str = "Admin";

    // 创建该类型用户时是否需要同步创建教师档案
    pub fn creates_professor(&self) -> bool {
        matches!(self, UserType::Professors)
    }
}

impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserType>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid user type: '{s}'. Supported types: Professors, Admin"
            ))
        })
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Professors => write!(f, "{}", UserType::PROFESSORS),
            UserType::Admin => write!(f, "{}", UserType::ADMIN),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserType::PROFESSORS => Ok(UserType::Professors),
            UserType::ADMIN => Ok(UserType::Admin),
            _ => Err(format!("Invalid user type: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub user_name: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub user_type: UserType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_round_trips_through_strings() {
        assert_eq!("Professors".parse::<UserType>().unwrap(), UserType::Professors);
        assert_eq!(UserType::Admin.to_string(), "Admin");
        assert!("professor".parse::<UserType>().is_err());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            user_name: "drsmith".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            user_type: UserType::Professors,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userName"], "drsmith");
        assert_eq!(json["userType"], "Professors");
        assert!(json.get("passwordHash").is_none());
    }
}
