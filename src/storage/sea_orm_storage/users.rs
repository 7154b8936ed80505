use super::SeaOrmStorage;
use crate::entity::professors::ActiveModel as ProfessorActiveModel;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{LedgerError, Result};
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UpdateUserRequest},
    responses::UserResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户
    ///
    /// 教师账号在同一事务内创建同名教师档案，任一步失败整体回滚。
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<UserResponse> {
        let now = chrono::Utc::now().timestamp();
        let creates_professor = req.user_type.creates_professor();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LedgerError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            user_name: Set(req.user_name.clone()),
            password_hash: Set(req.password),
            user_type: Set(req.user_type.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = model
            .insert(&txn)
            .await
            .map_err(|e| LedgerError::from_db("创建用户失败", e))?;

        let professor = if creates_professor {
            let professor = ProfessorActiveModel {
                name: Set(req.user_name),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| LedgerError::from_db("创建教师档案失败", e))?;
            Some(professor.into_professor())
        } else {
            None
        };

        txn.commit()
            .await
            .map_err(|e| LedgerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(UserResponse {
            user: user.into_user(),
            professor,
        })
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, user_name: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::UserName.eq(user_name))
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 列出全部用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let users = Users::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        // 先检查用户是否存在
        let existing = self.get_user_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(user_name) = update.user_name {
            model.user_name = Set(user_name);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(user_type) = update.user_type {
            model.user_type = Set(user_type.to_string());
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("更新用户失败", e))?;

        Ok(Some(updated.into_user()))
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("删除用户失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }
}
