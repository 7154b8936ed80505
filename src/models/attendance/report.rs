//! 课程出勤汇总
//!
//! 行为学生（至少有一条该课程考勤记录），列为课次。
//! 单元格为出勤当且仅当存在 is_present = true 的记录，缺失记录视为缺勤。

use std::collections::{HashMap, HashSet};

use super::entities::Attendance;
use crate::models::courses::entities::Course;
use crate::models::sessions::entities::CourseSession;
use crate::models::students::entities::Student;
use serde::Serialize;
use ts_rs::TS;

// 单个 (学生, 课次) 单元格
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceCell {
    pub session_id: i64,
    pub is_present: bool,
}

// 一名学生的出勤行
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceReportRow {
    pub student: Student,
    pub cells: Vec<AttendanceCell>,
    pub present_count: i64,
}

// 课程出勤汇总
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceReport {
    pub course: Course,
    pub sessions: Vec<CourseSession>,
    pub rows: Vec<AttendanceReportRow>,
    pub total_sessions: i64,
    pub total_students: i64,
}

impl AttendanceReport {
    /// 由课程的课次、学生与考勤记录构建汇总
    ///
    /// `students` 可以包含无考勤记录的学生，它们不会出现在结果中；
    /// 不属于该课程的考勤记录会被忽略。
    pub fn build(
        course: Course,
        mut sessions: Vec<CourseSession>,
        students: Vec<Student>,
        attendance: &[Attendance],
    ) -> Self {
        sessions.retain(|s| s.course_id == course.id);
        sessions.sort_by(|a, b| {
            a.session_date
                .cmp(&b.session_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        let course_records: Vec<&Attendance> = attendance
            .iter()
            .filter(|a| a.course_id == course.id)
            .collect();

        let attending: HashSet<i64> = course_records.iter().map(|a| a.student_id).collect();
        let present: HashSet<(i64, i64)> = course_records
            .iter()
            .filter(|a| a.is_present)
            .map(|a| (a.student_id, a.session_id))
            .collect();

        // 去重并按 id 排序
        let mut by_id: HashMap<i64, Student> = HashMap::new();
        for student in students {
            if attending.contains(&student.id) {
                by_id.entry(student.id).or_insert(student);
            }
        }
        let mut students: Vec<Student> = by_id.into_values().collect();
        students.sort_by_key(|s| s.id);

        let rows: Vec<AttendanceReportRow> = students
            .into_iter()
            .map(|student| {
                let cells: Vec<AttendanceCell> = sessions
                    .iter()
                    .map(|session| AttendanceCell {
                        session_id: session.id,
                        is_present: present.contains(&(student.id, session.id)),
                    })
                    .collect();
                let present_count = cells.iter().filter(|c| c.is_present).count() as i64;
                AttendanceReportRow {
                    student,
                    cells,
                    present_count,
                }
            })
            .collect();

        Self {
            total_sessions: sessions.len() as i64,
            total_students: rows.len() as i64,
            course,
            sessions,
            rows,
        }
    }

    /// 导出表头：学生姓名、学号，之后每个课次一列
    pub fn column_headers(&self) -> Vec<String> {
        let mut headers = vec!["Student Name".to_string(), "Academic Number".to_string()];
        headers.extend(
            self.sessions
                .iter()
                .map(|s| format!("Attended {}", s.session_date.format("%Y-%m-%d"))),
        );
        headers
    }

    /// 导出文件名
    pub fn export_filename(&self) -> String {
        format!("{}_Attendance.xlsx", self.course.course_name)
    }
}

impl AttendanceCell {
    pub fn label(&self) -> &'static str {
        if self.is_present { "Yes" } else { "No" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn course(id: i64, name: &str) -> Course {
        Course {
            id,
            course_name: name.to_string(),
            professor_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn session(id: i64, course_id: i64, y: i32, m: u32, d: u32) -> CourseSession {
        CourseSession {
            id,
            course_id,
            session_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            start_time: None,
            end_time: None,
            topic: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn student(id: i64, number: &str, name: &str) -> Student {
        Student {
            id,
            academic_number: number.to_string(),
            student_name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn mark(id: i64, student_id: i64, course_id: i64, session_id: i64, is_present: bool) -> Attendance {
        Attendance {
            id,
            student_id,
            course_id,
            session_id,
            is_present,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_single_present_mark() {
        let report = AttendanceReport::build(
            course(1, "CS101"),
            vec![session(10, 1, 2024, 2, 1)],
            vec![student(5, "S0000001", "Alice")],
            &[mark(1, 5, 1, 10, true)],
        );

        assert_eq!(report.total_sessions, 1);
        assert_eq!(report.total_students, 1);
        assert_eq!(report.rows[0].student.academic_number, "S0000001");
        assert!(report.rows[0].cells[0].is_present);
        assert_eq!(report.rows[0].cells[0].label(), "Yes");
        assert_eq!(report.rows[0].present_count, 1);
        assert_eq!(
            report.column_headers(),
            vec!["Student Name", "Academic Number", "Attended 2024-02-01"]
        );
        assert_eq!(report.export_filename(), "CS101_Attendance.xlsx");
    }

    #[test]
    fn test_grid_is_students_by_sessions() {
        let sessions = vec![
            session(12, 1, 2024, 2, 8),
            session(10, 1, 2024, 2, 1),
            session(11, 1, 2024, 2, 1),
        ];
        let students = vec![
            student(7, "S0000007", "Carol"),
            student(5, "S0000005", "Alice"),
            student(6, "S0000006", "Bob"),
        ];
        let attendance = vec![
            mark(1, 5, 1, 10, true),
            mark(2, 7, 1, 12, false),
            mark(3, 7, 1, 11, true),
        ];

        let report = AttendanceReport::build(course(1, "CS101"), sessions, students, &attendance);

        // Bob 没有任何考勤记录，不出现在汇总中
        assert_eq!(report.total_students, 2);
        assert_eq!(report.total_sessions, 3);
        let session_ids: Vec<i64> = report.sessions.iter().map(|s| s.id).collect();
        assert_eq!(session_ids, vec![10, 11, 12]);

        let cells: usize = report.rows.iter().map(|r| r.cells.len()).sum();
        assert_eq!(cells, 2 * 3);

        let alice = &report.rows[0];
        assert_eq!(alice.student.id, 5);
        let alice_marks: Vec<bool> = alice.cells.iter().map(|c| c.is_present).collect();
        assert_eq!(alice_marks, vec![true, false, false]);

        let carol = &report.rows[1];
        assert_eq!(carol.student.id, 7);
        let carol_labels: Vec<&str> = carol.cells.iter().map(|c| c.label()).collect();
        assert_eq!(carol_labels, vec!["No", "Yes", "No"]);
        assert_eq!(carol.present_count, 1);
    }

    #[test]
    fn test_records_of_other_courses_are_ignored() {
        let report = AttendanceReport::build(
            course(1, "CS101"),
            vec![session(10, 1, 2024, 2, 1), session(20, 2, 2024, 2, 1)],
            vec![student(5, "S0000005", "Alice")],
            &[mark(1, 5, 2, 20, true)],
        );

        assert_eq!(report.total_sessions, 1);
        assert_eq!(report.total_students, 0);
        assert!(report.rows.is_empty());
    }
}
