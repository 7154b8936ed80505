//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::professors::{ActiveModel, Column, Entity as Professors};
use crate::errors::{LedgerError, Result};
use crate::models::professors::{
    entities::ProfessorDetail,
    requests::{CreateProfessorRequest, UpdateProfessorRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_professor_impl(&self, req: CreateProfessorRequest) -> Result<ProfessorDetail> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("创建教师失败", e))?;

        self.single_professor_detail(result).await
    }

    /// 通过 ID 获取教师及其课程
    pub async fn get_professor_by_id_impl(&self, id: i64) -> Result<Option<ProfessorDetail>> {
        let result = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.single_professor_detail(model).await?)),
            None => Ok(None),
        }
    }

    /// 列出全部教师
    pub async fn list_professors_impl(&self) -> Result<Vec<ProfessorDetail>> {
        let professors = Professors::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询教师列表失败: {e}")))?;

        self.professor_details(professors).await
    }

    /// 更新教师
    pub async fn update_professor_impl(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<ProfessorDetail>> {
        let existing = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询教师失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("更新教师失败", e))?;

        Ok(Some(self.single_professor_detail(updated).await?))
    }

    /// 删除教师（仍有课程时由外键拒绝）
    pub async fn delete_professor_impl(&self, id: i64) -> Result<bool> {
        let result = Professors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("删除教师失败", e))?;

        Ok(result.rows_affected > 0)
    }

    async fn single_professor_detail(
        &self,
        model: crate::entity::professors::Model,
    ) -> Result<ProfessorDetail> {
        self.professor_details(vec![model])
            .await?
            .pop()
            .ok_or_else(|| LedgerError::database_operation("加载教师详情失败"))
    }
}
