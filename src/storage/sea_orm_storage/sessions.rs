//! 课次存储操作

use super::SeaOrmStorage;
use crate::entity::course_attendance::{Column as AttendanceColumn, Entity as CourseAttendance};
use crate::entity::course_sessions::{ActiveModel, Column, Entity as CourseSessions, Model};
use crate::errors::{LedgerError, Result};
use crate::models::sessions::{
    entities::SessionDetail,
    requests::{CreateSessionRequest, SessionListQuery, UpdateSessionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课次，所属课程必须存在
    pub async fn create_session_impl(
        &self,
        course_id: i64,
        req: CreateSessionRequest,
    ) -> Result<SessionDetail> {
        self.ensure_course_exists(course_id).await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            course_id: Set(course_id),
            session_date: Set(req.session_date),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            topic: Set(req.topic),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("创建课次失败", e))?;

        self.single_session_detail(result).await
    }

    /// 通过 ID 获取课次
    pub async fn get_session_by_id_impl(&self, id: i64) -> Result<Option<SessionDetail>> {
        match self.find_session_model(id).await? {
            Some(model) => Ok(Some(self.single_session_detail(model).await?)),
            None => Ok(None),
        }
    }

    /// 列出课次，可按课程筛选
    pub async fn list_sessions_impl(&self, query: SessionListQuery) -> Result<Vec<SessionDetail>> {
        let mut select = CourseSessions::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        let sessions = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询课次列表失败: {e}")))?;

        self.session_details(sessions).await
    }

    /// 更新课次
    ///
    /// 更换所属课程时，该课次下考勤记录的 course_id 在同一事务内同步更新。
    pub async fn update_session_impl(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<SessionDetail>> {
        let Some(existing) = self.find_session_model(id).await? else {
            return Ok(None);
        };

        let moved_course = match update.course_id {
            Some(course_id) if course_id != existing.course_id => {
                self.ensure_course_exists(course_id).await?;
                Some(course_id)
            }
            _ => None,
        };

        let now = chrono::Utc::now().timestamp();
        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(course_id) = moved_course {
            model.course_id = Set(course_id);
        }

        if let Some(session_date) = update.session_date {
            model.session_date = Set(session_date);
        }

        if let Some(start_time) = update.start_time {
            model.start_time = Set(Some(start_time));
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(Some(end_time));
        }

        if let Some(topic) = update.topic {
            model.topic = Set(Some(topic));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LedgerError::database_operation(format!("开启事务失败: {e}")))?;

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| LedgerError::from_db("更新课次失败", e))?;

        if let Some(course_id) = moved_course {
            CourseAttendance::update_many()
                .col_expr(
                    AttendanceColumn::CourseId,
                    sea_orm::sea_query::Expr::value(course_id),
                )
                .col_expr(
                    AttendanceColumn::UpdatedAt,
                    sea_orm::sea_query::Expr::value(now),
                )
                .filter(AttendanceColumn::SessionId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| LedgerError::from_db("同步考勤课程失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| LedgerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(self.single_session_detail(updated).await?))
    }

    /// 删除课次（仍有考勤记录时由外键拒绝）
    pub async fn delete_session_impl(&self, id: i64) -> Result<bool> {
        let result = CourseSessions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("删除课次失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub(super) async fn find_session_model(&self, id: i64) -> Result<Option<Model>> {
        CourseSessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询课次失败: {e}")))
    }

    async fn single_session_detail(&self, model: Model) -> Result<SessionDetail> {
        self.session_details(vec![model])
            .await?
            .pop()
            .ok_or_else(|| LedgerError::database_operation("加载课次详情失败"))
    }
}
