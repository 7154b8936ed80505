//! 选课存储操作

use super::SeaOrmStorage;
use crate::entity::course_enrollments::{ActiveModel, Column, Entity as CourseEnrollments, Model};
use crate::entity::students::Entity as Students;
use crate::errors::{LedgerError, Result};
use crate::models::enrollments::{
    entities::EnrollmentDetail,
    requests::{CreateEnrollmentRequest, EnrollmentListQuery, UpdateEnrollmentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建选课记录，同一学生重复选同一课程返回 Conflict
    pub async fn create_enrollment_impl(
        &self,
        req: CreateEnrollmentRequest,
    ) -> Result<EnrollmentDetail> {
        self.ensure_student_exists(req.student_id).await?;
        self.ensure_course_exists(req.course_id).await?;

        let now = chrono::Utc::now().timestamp();
        let enrollment_date = req.enrollment_date.map(|d| d.timestamp()).unwrap_or(now);

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            enrollment_date: Set(enrollment_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("创建选课记录失败", e))?;

        self.single_enrollment_detail(result).await
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<EnrollmentDetail>> {
        match self.find_enrollment_model(id).await? {
            Some(model) => Ok(Some(self.single_enrollment_detail(model).await?)),
            None => Ok(None),
        }
    }

    /// 列出选课记录，可按课程、学生筛选
    pub async fn list_enrollments_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<Vec<EnrollmentDetail>> {
        let mut select = CourseEnrollments::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let enrollments = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询选课列表失败: {e}")))?;

        self.enrollment_details(enrollments).await
    }

    /// 更新选课记录
    pub async fn update_enrollment_impl(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<EnrollmentDetail>> {
        if self.find_enrollment_model(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            self.ensure_student_exists(student_id).await?;
            model.student_id = Set(student_id);
        }

        if let Some(course_id) = update.course_id {
            self.ensure_course_exists(course_id).await?;
            model.course_id = Set(course_id);
        }

        if let Some(enrollment_date) = update.enrollment_date {
            model.enrollment_date = Set(enrollment_date.timestamp());
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("更新选课记录失败", e))?;

        Ok(Some(self.single_enrollment_detail(updated).await?))
    }

    /// 删除选课记录
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = CourseEnrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("删除选课记录失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub(super) async fn ensure_student_exists(&self, id: i64) -> Result<()> {
        let student = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询学生失败: {e}")))?;

        match student {
            Some(_) => Ok(()),
            None => Err(LedgerError::validation(format!("Student {id} does not exist"))),
        }
    }

    async fn find_enrollment_model(&self, id: i64) -> Result<Option<Model>> {
        CourseEnrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询选课记录失败: {e}")))
    }

    async fn single_enrollment_detail(&self, model: Model) -> Result<EnrollmentDetail> {
        self.enrollment_details(vec![model])
            .await?
            .pop()
            .ok_or_else(|| LedgerError::database_operation("加载选课详情失败"))
    }
}
