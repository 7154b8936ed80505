//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model};
use crate::errors::{LedgerError, Result};
use crate::models::students::{
    entities::StudentDetail,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生，学号重复时返回 Conflict
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<StudentDetail> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            academic_number: Set(req.academic_number),
            student_name: Set(req.student_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("创建学生失败", e))?;

        self.single_student_detail(result).await
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        match self.find_student_model(id).await? {
            Some(model) => Ok(Some(self.single_student_detail(model).await?)),
            None => Ok(None),
        }
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<StudentDetail>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询学生列表失败: {e}")))?;

        self.student_details(students).await
    }

    /// 更新学生
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        if self.find_student_model(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(academic_number) = update.academic_number {
            model.academic_number = Set(academic_number);
        }

        if let Some(student_name) = update.student_name {
            model.student_name = Set(student_name);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("更新学生失败", e))?;

        Ok(Some(self.single_student_detail(updated).await?))
    }

    /// 删除学生（仍有选课或考勤时由外键拒绝）
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("删除学生失败", e))?;

        Ok(result.rows_affected > 0)
    }

    async fn find_student_model(&self, id: i64) -> Result<Option<Model>> {
        Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询学生失败: {e}")))
    }

    async fn single_student_detail(&self, model: Model) -> Result<StudentDetail> {
        self.student_details(vec![model])
            .await?
            .pop()
            .ok_or_else(|| LedgerError::database_operation("加载学生详情失败"))
    }
}
