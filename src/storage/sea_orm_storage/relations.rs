//! 关联数据批量加载
//!
//! 每类详情只按主记录的 id 集合各查询一次关联表，再在内存中分组，
//! 避免列表接口产生 N+1 查询。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{
    course_attendance, course_enrollments, course_sessions, courses, professors, students,
};
use crate::errors::{LedgerError, Result};
use crate::models::{
    attendance::entities::{Attendance, AttendanceDetail},
    courses::entities::{Course, CourseDetail},
    enrollments::entities::{Enrollment, EnrollmentDetail},
    professors::entities::{Professor, ProfessorDetail},
    sessions::entities::{CourseSession, SessionDetail},
    students::entities::{Student, StudentDetail},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

// 按列值集合查询，结果按 id 升序
async fn find_in<E>(
    db: &DatabaseConnection,
    column: E::Column,
    ids: &[i64],
    order: E::Column,
    what: &str,
) -> Result<Vec<E::Model>>
where
    E: EntityTrait,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    E::find()
        .filter(column.is_in(ids.iter().copied()))
        .order_by_asc(order)
        .all(db)
        .await
        .map_err(|e| LedgerError::database_operation(format!("查询{what}失败: {e}")))
}

fn group_by<T>(items: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for item in items {
        grouped.entry(key(&item)).or_default().push(item);
    }
    grouped
}

fn index_by<T>(items: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, T> {
    items.into_iter().map(|item| (key(&item), item)).collect()
}

fn unique_ids(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl SeaOrmStorage {
    async fn courses_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, Course>> {
        let models = find_in::<Courses>(&self.db, courses::Column::Id, ids, courses::Column::Id, "课程")
            .await?;
        Ok(index_by(
            models.into_iter().map(|m| m.into_course()).collect(),
            |c| c.id,
        ))
    }

    async fn professors_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, Professor>> {
        let models = find_in::<Professors>(
            &self.db,
            professors::Column::Id,
            ids,
            professors::Column::Id,
            "教师",
        )
        .await?;
        Ok(index_by(
            models.into_iter().map(|m| m.into_professor()).collect(),
            |p| p.id,
        ))
    }

    async fn students_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, Student>> {
        let models = find_in::<Students>(
            &self.db,
            students::Column::Id,
            ids,
            students::Column::Id,
            "学生",
        )
        .await?;
        Ok(index_by(
            models.into_iter().map(|m| m.into_student()).collect(),
            |s| s.id,
        ))
    }

    async fn sessions_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, CourseSession>> {
        let models = find_in::<CourseSessions>(
            &self.db,
            course_sessions::Column::Id,
            ids,
            course_sessions::Column::Id,
            "课次",
        )
        .await?;
        Ok(index_by(
            models.into_iter().map(|m| m.into_session()).collect(),
            |s| s.id,
        ))
    }

    async fn sessions_by_column(
        &self,
        column: course_sessions::Column,
        ids: &[i64],
    ) -> Result<Vec<CourseSession>> {
        let models =
            find_in::<CourseSessions>(&self.db, column, ids, course_sessions::Column::Id, "课次")
                .await?;
        Ok(models.into_iter().map(|m| m.into_session()).collect())
    }

    async fn enrollments_by_column(
        &self,
        column: course_enrollments::Column,
        ids: &[i64],
    ) -> Result<Vec<Enrollment>> {
        let models = find_in::<CourseEnrollments>(
            &self.db,
            column,
            ids,
            course_enrollments::Column::Id,
            "选课记录",
        )
        .await?;
        Ok(models.into_iter().map(|m| m.into_enrollment()).collect())
    }

    pub(super) async fn attendance_by_column(
        &self,
        column: course_attendance::Column,
        ids: &[i64],
    ) -> Result<Vec<Attendance>> {
        let models = find_in::<CourseAttendance>(
            &self.db,
            column,
            ids,
            course_attendance::Column::Id,
            "考勤记录",
        )
        .await?;
        Ok(models.into_iter().map(|m| m.into_attendance()).collect())
    }

    /// 教师 + 所授课程
    pub(super) async fn professor_details(
        &self,
        models: Vec<ProfessorModel>,
    ) -> Result<Vec<ProfessorDetail>> {
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let course_models = find_in::<Courses>(
            &self.db,
            courses::Column::ProfessorId,
            &ids,
            courses::Column::Id,
            "课程",
        )
        .await?;
        let mut courses = group_by(
            course_models.into_iter().map(|m| m.into_course()).collect(),
            |c| c.professor_id,
        );

        Ok(models
            .into_iter()
            .map(|m| ProfessorDetail {
                courses: courses.remove(&m.id).unwrap_or_default(),
                professor: m.into_professor(),
            })
            .collect())
    }

    /// 学生 + 选课 + 考勤
    pub(super) async fn student_details(
        &self,
        models: Vec<StudentModel>,
    ) -> Result<Vec<StudentDetail>> {
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let mut enrollments = group_by(
            self.enrollments_by_column(course_enrollments::Column::StudentId, &ids)
                .await?,
            |e| e.student_id,
        );
        let mut attendance = group_by(
            self.attendance_by_column(course_attendance::Column::StudentId, &ids)
                .await?,
            |a| a.student_id,
        );

        Ok(models
            .into_iter()
            .map(|m| StudentDetail {
                enrollments: enrollments.remove(&m.id).unwrap_or_default(),
                attendance: attendance.remove(&m.id).unwrap_or_default(),
                student: m.into_student(),
            })
            .collect())
    }

    /// 课程 + 教师 + 课次 + 选课 + 考勤
    pub(super) async fn course_details(
        &self,
        models: Vec<CourseModel>,
    ) -> Result<Vec<CourseDetail>> {
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let professor_ids = unique_ids(models.iter().map(|m| m.professor_id));

        let professors = self.professors_by_ids(&professor_ids).await?;
        let mut sessions = group_by(
            self.sessions_by_column(course_sessions::Column::CourseId, &ids)
                .await?,
            |s| s.course_id,
        );
        let mut enrollments = group_by(
            self.enrollments_by_column(course_enrollments::Column::CourseId, &ids)
                .await?,
            |e| e.course_id,
        );
        let mut attendance = group_by(
            self.attendance_by_column(course_attendance::Column::CourseId, &ids)
                .await?,
            |a| a.course_id,
        );

        Ok(models
            .into_iter()
            .map(|m| CourseDetail {
                professor: professors.get(&m.professor_id).cloned(),
                sessions: sessions.remove(&m.id).unwrap_or_default(),
                enrollments: enrollments.remove(&m.id).unwrap_or_default(),
                attendance: attendance.remove(&m.id).unwrap_or_default(),
                course: m.into_course(),
            })
            .collect())
    }

    /// 课次 + 课程 + 考勤
    pub(super) async fn session_details(
        &self,
        models: Vec<SessionModel>,
    ) -> Result<Vec<SessionDetail>> {
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let course_ids = unique_ids(models.iter().map(|m| m.course_id));

        let courses = self.courses_by_ids(&course_ids).await?;
        let mut attendance = group_by(
            self.attendance_by_column(course_attendance::Column::SessionId, &ids)
                .await?,
            |a| a.session_id,
        );

        Ok(models
            .into_iter()
            .map(|m| SessionDetail {
                course: courses.get(&m.course_id).cloned(),
                attendance: attendance.remove(&m.id).unwrap_or_default(),
                session: m.into_session(),
            })
            .collect())
    }

    /// 选课 + 学生 + 课程
    pub(super) async fn enrollment_details(
        &self,
        models: Vec<EnrollmentModel>,
    ) -> Result<Vec<EnrollmentDetail>> {
        let student_ids = unique_ids(models.iter().map(|m| m.student_id));
        let course_ids = unique_ids(models.iter().map(|m| m.course_id));

        let students = self.students_by_ids(&student_ids).await?;
        let courses = self.courses_by_ids(&course_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| EnrollmentDetail {
                student: students.get(&m.student_id).cloned(),
                course: courses.get(&m.course_id).cloned(),
                enrollment: m.into_enrollment(),
            })
            .collect())
    }

    /// 考勤 + 学生 + 课程 + 课次
    pub(super) async fn attendance_details(
        &self,
        models: Vec<AttendanceModel>,
    ) -> Result<Vec<AttendanceDetail>> {
        let student_ids = unique_ids(models.iter().map(|m| m.student_id));
        let course_ids = unique_ids(models.iter().map(|m| m.course_id));
        let session_ids = unique_ids(models.iter().map(|m| m.session_id));

        let students = self.students_by_ids(&student_ids).await?;
        let courses = self.courses_by_ids(&course_ids).await?;
        let sessions = self.sessions_by_ids(&session_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| AttendanceDetail {
                student: students.get(&m.student_id).cloned(),
                course: courses.get(&m.course_id).cloned(),
                session: sessions.get(&m.session_id).cloned(),
                attendance: m.into_attendance(),
            })
            .collect())
    }

    /// 学生 id 集合对应的学生（供出勤汇总使用）
    pub(super) async fn students_in(&self, ids: &[i64]) -> Result<Vec<Student>> {
        let mut students: Vec<Student> = self.students_by_ids(ids).await?.into_values().collect();
        students.sort_by_key(|s| s.id);
        Ok(students)
    }

    /// 某课程的全部课次
    pub(super) async fn sessions_of_course(&self, course_id: i64) -> Result<Vec<CourseSession>> {
        self.sessions_by_column(course_sessions::Column::CourseId, &[course_id])
            .await
    }
}
