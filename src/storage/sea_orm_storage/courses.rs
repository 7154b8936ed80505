//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Model};
use crate::entity::professors::Entity as Professors;
use crate::errors::{LedgerError, Result};
use crate::models::courses::{
    entities::CourseDetail,
    requests::{CreateCourseRequest, UpdateCourseRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课程，所属教师必须存在
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<CourseDetail> {
        self.ensure_professor_exists(req.professor_id).await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            course_name: Set(req.course_name),
            professor_id: Set(req.professor_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("创建课程失败", e))?;

        self.single_course_detail(result).await
    }

    /// 通过 ID 获取课程及全部关联
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<CourseDetail>> {
        match self.find_course_model(id).await? {
            Some(model) => Ok(Some(self.single_course_detail(model).await?)),
            None => Ok(None),
        }
    }

    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<CourseDetail>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询课程列表失败: {e}")))?;

        self.course_details(courses).await
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<CourseDetail>> {
        if self.find_course_model(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(course_name) = update.course_name {
            model.course_name = Set(course_name);
        }

        if let Some(professor_id) = update.professor_id {
            self.ensure_professor_exists(professor_id).await?;
            model.professor_id = Set(professor_id);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("更新课程失败", e))?;

        Ok(Some(self.single_course_detail(updated).await?))
    }

    /// 删除课程（仍有课次、选课或考勤时由外键拒绝）
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("删除课程失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub(super) async fn find_course_model(&self, id: i64) -> Result<Option<Model>> {
        Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询课程失败: {e}")))
    }

    pub(super) async fn ensure_course_exists(&self, id: i64) -> Result<()> {
        match self.find_course_model(id).await? {
            Some(_) => Ok(()),
            None => Err(LedgerError::validation(format!("Course {id} does not exist"))),
        }
    }

    async fn ensure_professor_exists(&self, id: i64) -> Result<()> {
        let professor = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询教师失败: {e}")))?;

        match professor {
            Some(_) => Ok(()),
            None => Err(LedgerError::validation(format!(
                "Professor {id} does not exist"
            ))),
        }
    }

    async fn single_course_detail(&self, model: Model) -> Result<CourseDetail> {
        self.course_details(vec![model])
            .await?
            .pop()
            .ok_or_else(|| LedgerError::database_operation("加载课程详情失败"))
    }
}
