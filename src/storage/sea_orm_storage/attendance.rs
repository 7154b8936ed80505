//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::course_attendance::{ActiveModel, Column, Entity as CourseAttendance, Model};
use crate::entity::course_sessions::Entity as CourseSessions;
use crate::entity::students::Entity as Students;
use crate::errors::{LedgerError, Result};
use crate::models::attendance::{
    entities::AttendanceDetail,
    report::AttendanceReport,
    requests::{AttendanceListQuery, MarkAttendanceRequest, UpdateAttendanceRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

// 课次所属课程与请求中的课程必须一致
fn check_course_matches(requested: Option<i64>, session_course_id: i64) -> Result<()> {
    match requested {
        Some(course_id) if course_id != session_course_id => Err(LedgerError::validation(format!(
            "Course {course_id} does not match the session's course {session_course_id}"
        ))),
        _ => Ok(()),
    }
}

// 在给定连接上查询课次所属课程
async fn session_course_id<C: ConnectionTrait>(db: &C, session_id: i64) -> Result<i64> {
    let session = CourseSessions::find_by_id(session_id)
        .one(db)
        .await
        .map_err(|e| LedgerError::database_operation(format!("查询课次失败: {e}")))?;

    session
        .map(|s| s.course_id)
        .ok_or_else(|| LedgerError::validation(format!("Session {session_id} does not exist")))
}

async fn ensure_student<C: ConnectionTrait>(db: &C, student_id: i64) -> Result<()> {
    let student = Students::find_by_id(student_id)
        .one(db)
        .await
        .map_err(|e| LedgerError::database_operation(format!("查询学生失败: {e}")))?;

    match student {
        Some(_) => Ok(()),
        None => Err(LedgerError::validation(format!(
            "Student {student_id} does not exist"
        ))),
    }
}

impl SeaOrmStorage {
    /// 登记考勤
    ///
    /// 以 (student_id, session_id) 为键：已有记录则更新出勤状态，否则新建。
    /// course_id 取自课次，整个过程在一个事务内完成。
    pub async fn mark_attendance_impl(&self, req: MarkAttendanceRequest) -> Result<AttendanceDetail> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LedgerError::database_operation(format!("开启事务失败: {e}")))?;

        let course_id = session_course_id(&txn, req.session_id).await?;
        check_course_matches(req.course_id, course_id)?;
        ensure_student(&txn, req.student_id).await?;

        let existing = CourseAttendance::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::SessionId.eq(req.session_id))
            .one(&txn)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let saved = match existing {
            Some(record) => ActiveModel {
                id: Set(record.id),
                course_id: Set(course_id),
                is_present: Set(req.is_present),
                updated_at: Set(now),
                ..Default::default()
            }
            .update(&txn)
            .await
            .map_err(|e| LedgerError::from_db("更新考勤记录失败", e))?,
            None => ActiveModel {
                student_id: Set(req.student_id),
                course_id: Set(course_id),
                session_id: Set(req.session_id),
                is_present: Set(req.is_present),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| LedgerError::from_db("创建考勤记录失败", e))?,
        };

        txn.commit()
            .await
            .map_err(|e| LedgerError::database_operation(format!("提交事务失败: {e}")))?;

        self.single_attendance_detail(saved).await
    }

    /// 通过 ID 获取考勤记录
    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<AttendanceDetail>> {
        match self.find_attendance_model(id).await? {
            Some(model) => Ok(Some(self.single_attendance_detail(model).await?)),
            None => Ok(None),
        }
    }

    /// 列出考勤记录，可按课程、学生、课次筛选
    pub async fn list_attendance_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<Vec<AttendanceDetail>> {
        let mut select = CourseAttendance::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(session_id) = query.session_id {
            select = select.filter(Column::SessionId.eq(session_id));
        }

        let records = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询考勤列表失败: {e}")))?;

        self.attendance_details(records).await
    }

    /// 更新考勤记录
    ///
    /// 更换课次时 course_id 随之重新推导；显式给出的 course_id 必须与课次一致。
    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceDetail>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LedgerError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = CourseAttendance::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询考勤记录失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let course_id = match update.session_id {
            Some(session_id) if session_id != existing.session_id => {
                let course_id = session_course_id(&txn, session_id).await?;
                model.session_id = Set(session_id);
                model.course_id = Set(course_id);
                course_id
            }
            _ => existing.course_id,
        };
        check_course_matches(update.course_id, course_id)?;

        if let Some(student_id) = update.student_id {
            ensure_student(&txn, student_id).await?;
            model.student_id = Set(student_id);
        }

        if let Some(is_present) = update.is_present {
            model.is_present = Set(is_present);
        }

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| LedgerError::from_db("更新考勤记录失败", e))?;

        txn.commit()
            .await
            .map_err(|e| LedgerError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(self.single_attendance_detail(updated).await?))
    }

    /// 删除考勤记录
    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = CourseAttendance::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::from_db("删除考勤记录失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程出勤汇总
    pub async fn get_attendance_report_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<AttendanceReport>> {
        let Some(course) = self.find_course_model(course_id).await? else {
            return Ok(None);
        };

        let sessions = self.sessions_of_course(course_id).await?;
        let attendance = self
            .attendance_by_column(Column::CourseId, &[course_id])
            .await?;

        let mut student_ids: Vec<i64> = attendance.iter().map(|a| a.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();
        let students = self.students_in(&student_ids).await?;

        Ok(Some(AttendanceReport::build(
            course.into_course(),
            sessions,
            students,
            &attendance,
        )))
    }

    async fn find_attendance_model(&self, id: i64) -> Result<Option<Model>> {
        CourseAttendance::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LedgerError::database_operation(format!("查询考勤记录失败: {e}")))
    }

    async fn single_attendance_detail(&self, model: Model) -> Result<AttendanceDetail> {
        self.attendance_details(vec![model])
            .await?
            .pop()
            .ok_or_else(|| LedgerError::database_operation("加载考勤详情失败"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_mismatch_is_validation_error() {
        let err = check_course_matches(Some(2), 1).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert!(check_course_matches(Some(1), 1).is_ok());
        assert!(check_course_matches(None, 1).is_ok());
    }
}
