use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use super::SeaOrmStorage;
use crate::config::DatabaseConfig;
use crate::errors::LedgerError;
use crate::models::attendance::requests::{
    AttendanceListQuery, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentListQuery};
use crate::models::professors::requests::CreateProfessorRequest;
use crate::models::sessions::requests::{CreateSessionRequest, UpdateSessionRequest};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::models::users::entities::UserType;
use crate::models::users::requests::CreateUserRequest;

async fn memory_storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory database should connect")
}

// 教师 Dr. Smith -> 课程 CS101 -> 2024-02-01 课次 -> 学生 S1
async fn seed_course(storage: &SeaOrmStorage) -> (i64, i64, i64, i64) {
    let professor = storage
        .create_professor_impl(CreateProfessorRequest {
            name: "Dr. Smith".to_string(),
        })
        .await
        .unwrap();
    let course = storage
        .create_course_impl(CreateCourseRequest {
            course_name: "CS101".to_string(),
            professor_id: professor.professor.id,
        })
        .await
        .unwrap();
    let session = storage
        .create_session_impl(
            course.course.id,
            CreateSessionRequest {
                course_id: None,
                session_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                start_time: Some("09:00".to_string()),
                end_time: Some("10:30".to_string()),
                topic: Some("Intro".to_string()),
            },
        )
        .await
        .unwrap();
    let student = storage
        .create_student_impl(CreateStudentRequest {
            academic_number: "S0000001".to_string(),
            student_name: "Alice Doe".to_string(),
        })
        .await
        .unwrap();

    (
        professor.professor.id,
        course.course.id,
        session.session.id,
        student.student.id,
    )
}

#[tokio::test]
async fn test_get_missing_records_returns_none() {
    let storage = memory_storage().await;

    assert!(storage.get_user_by_id_impl(999).await.unwrap().is_none());
    assert!(storage.get_professor_by_id_impl(999).await.unwrap().is_none());
    assert!(storage.get_student_by_id_impl(999).await.unwrap().is_none());
    assert!(storage.get_course_by_id_impl(999).await.unwrap().is_none());
    assert!(storage.get_session_by_id_impl(999).await.unwrap().is_none());
    assert!(storage.get_enrollment_by_id_impl(999).await.unwrap().is_none());
    assert!(storage.get_attendance_by_id_impl(999).await.unwrap().is_none());
    assert!(!storage.delete_student_impl(999).await.unwrap());
}

#[tokio::test]
async fn test_professor_user_creates_professor_record() {
    let storage = memory_storage().await;

    let created = storage
        .create_user_impl(CreateUserRequest {
            user_name: "drsmith".to_string(),
            password: "hashed".to_string(),
            user_type: UserType::Professors,
        })
        .await
        .unwrap();

    let professor = created.professor.expect("professor should be created");
    assert_eq!(professor.name, "drsmith");
    assert_eq!(storage.count_users_impl().await.unwrap(), 1);

    let professors = storage.list_professors_impl().await.unwrap();
    assert_eq!(professors.len(), 1);
    assert_eq!(professors[0].professor.name, "drsmith");
}

#[tokio::test]
async fn test_admin_user_has_no_professor_record() {
    let storage = memory_storage().await;

    let created = storage
        .create_user_impl(CreateUserRequest {
            user_name: "admin".to_string(),
            password: "hashed".to_string(),
            user_type: UserType::Admin,
        })
        .await
        .unwrap();

    assert!(created.professor.is_none());
    assert!(storage.list_professors_impl().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_user_name_rolls_back() {
    let storage = memory_storage().await;
    let req = CreateUserRequest {
        user_name: "drsmith".to_string(),
        password: "hashed".to_string(),
        user_type: UserType::Professors,
    };

    storage.create_user_impl(req.clone()).await.unwrap();
    let err = storage.create_user_impl(req).await.unwrap_err();

    assert!(matches!(err, LedgerError::Conflict(_)));
    assert_eq!(storage.count_users_impl().await.unwrap(), 1);
    // 失败的创建不能留下孤立的教师档案
    assert_eq!(storage.list_professors_impl().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_professor_insert_discards_user() {
    let storage = memory_storage().await;
    // 去掉教师表，让事务中的第二次插入失败
    storage
        .db
        .execute_unprepared("DROP TABLE professors")
        .await
        .unwrap();

    let err = storage
        .create_user_impl(CreateUserRequest {
            user_name: "drsmith".to_string(),
            password: "hashed".to_string(),
            user_type: UserType::Professors,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, LedgerError::DatabaseOperation(_)));
    assert_eq!(storage.count_users_impl().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let storage = memory_storage().await;
    let (professor_id, course_id, session_id, student_id) = seed_course(&storage).await;

    let course = storage.get_course_by_id_impl(course_id).await.unwrap().unwrap();
    assert_eq!(course.course.course_name, "CS101");
    assert_eq!(course.course.professor_id, professor_id);
    assert_eq!(course.professor.unwrap().name, "Dr. Smith");
    assert_eq!(course.sessions.len(), 1);

    let session = storage.get_session_by_id_impl(session_id).await.unwrap().unwrap();
    assert_eq!(
        session.session.session_date,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    );
    assert_eq!(session.session.start_time.as_deref(), Some("09:00"));
    assert_eq!(session.course.unwrap().id, course_id);

    let student = storage.get_student_by_id_impl(student_id).await.unwrap().unwrap();
    assert_eq!(student.student.academic_number, "S0000001");

    let professor = storage
        .get_professor_by_id_impl(professor_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(professor.courses.len(), 1);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let storage = memory_storage().await;
    let (_, course_id, _, student_id) = seed_course(&storage).await;

    let updated = storage
        .update_student_impl(
            student_id,
            UpdateStudentRequest {
                student_name: Some("Alice Smith".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.student.student_name, "Alice Smith");
    assert_eq!(updated.student.academic_number, "S0000001");

    let course = storage
        .update_course_impl(
            course_id,
            UpdateCourseRequest {
                course_name: Some("CS102".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(course.course.course_name, "CS102");

    assert!(
        storage
            .update_course_impl(999, UpdateCourseRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_then_get_returns_none() {
    let storage = memory_storage().await;
    let student = storage
        .create_student_impl(CreateStudentRequest {
            academic_number: "S0000009".to_string(),
            student_name: "Bob Ray".to_string(),
        })
        .await
        .unwrap();

    assert!(storage.delete_student_impl(student.student.id).await.unwrap());
    assert!(
        storage
            .get_student_by_id_impl(student.student.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_academic_number_conflicts() {
    let storage = memory_storage().await;
    let req = CreateStudentRequest {
        academic_number: "S0000001".to_string(),
        student_name: "Alice Doe".to_string(),
    };

    storage.create_student_impl(req.clone()).await.unwrap();
    let err = storage.create_student_impl(req).await.unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));
}

#[tokio::test]
async fn test_course_requires_existing_professor() {
    let storage = memory_storage().await;

    let err = storage
        .create_course_impl(CreateCourseRequest {
            course_name: "CS101".to_string(),
            professor_id: 42,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

#[tokio::test]
async fn test_delete_professor_with_courses_is_restricted() {
    let storage = memory_storage().await;
    let (professor_id, _, _, _) = seed_course(&storage).await;

    let err = storage.delete_professor_impl(professor_id).await.unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));
    assert!(
        storage
            .get_professor_by_id_impl(professor_id)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_mark_attendance_is_upsert() {
    let storage = memory_storage().await;
    let (_, course_id, session_id, student_id) = seed_course(&storage).await;

    let first = storage
        .mark_attendance_impl(MarkAttendanceRequest {
            student_id,
            session_id,
            course_id: None,
            is_present: true,
        })
        .await
        .unwrap();
    assert_eq!(first.attendance.course_id, course_id);
    assert!(first.attendance.is_present);

    let second = storage
        .mark_attendance_impl(MarkAttendanceRequest {
            student_id,
            session_id,
            course_id: Some(course_id),
            is_present: false,
        })
        .await
        .unwrap();
    assert_eq!(second.attendance.id, first.attendance.id);
    assert!(!second.attendance.is_present);

    let all = storage
        .list_attendance_impl(AttendanceListQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].student.as_ref().unwrap().academic_number, "S0000001");
    assert_eq!(all[0].session.as_ref().unwrap().id, session_id);
}

#[tokio::test]
async fn test_mark_attendance_rejects_mismatched_course() {
    let storage = memory_storage().await;
    let (professor_id, _, session_id, student_id) = seed_course(&storage).await;
    let other = storage
        .create_course_impl(CreateCourseRequest {
            course_name: "MATH200".to_string(),
            professor_id,
        })
        .await
        .unwrap();

    let err = storage
        .mark_attendance_impl(MarkAttendanceRequest {
            student_id,
            session_id,
            course_id: Some(other.course.id),
            is_present: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(
        storage
            .list_attendance_impl(AttendanceListQuery::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_moving_attendance_to_other_session_rederives_course() {
    let storage = memory_storage().await;
    let (professor_id, _, session_id, student_id) = seed_course(&storage).await;
    let other = storage
        .create_course_impl(CreateCourseRequest {
            course_name: "MATH200".to_string(),
            professor_id,
        })
        .await
        .unwrap();
    let other_session = storage
        .create_session_impl(
            other.course.id,
            CreateSessionRequest {
                course_id: None,
                session_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                start_time: None,
                end_time: None,
                topic: None,
            },
        )
        .await
        .unwrap();
    let mark = storage
        .mark_attendance_impl(MarkAttendanceRequest {
            student_id,
            session_id,
            course_id: None,
            is_present: true,
        })
        .await
        .unwrap();

    let moved = storage
        .update_attendance_impl(
            mark.attendance.id,
            UpdateAttendanceRequest {
                session_id: Some(other_session.session.id),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.attendance.course_id, other.course.id);
    assert!(moved.attendance.is_present);
}

#[tokio::test]
async fn test_rejected_attendance_update_leaves_record_untouched() {
    let storage = memory_storage().await;
    let (_, course_id, session_id, student_id) = seed_course(&storage).await;
    let mark = storage
        .mark_attendance_impl(MarkAttendanceRequest {
            student_id,
            session_id,
            course_id: None,
            is_present: true,
        })
        .await
        .unwrap();

    // 学生不存在：事务回滚，出勤状态不变
    let err = storage
        .update_attendance_impl(
            mark.attendance.id,
            UpdateAttendanceRequest {
                student_id: Some(9999),
                is_present: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    assert!(
        storage
            .update_attendance_impl(9999, UpdateAttendanceRequest::default())
            .await
            .unwrap()
            .is_none()
    );

    let current = storage
        .get_attendance_by_id_impl(mark.attendance.id)
        .await
        .unwrap()
        .unwrap();
    assert!(current.attendance.is_present);
    assert_eq!(current.attendance.course_id, course_id);
}

#[tokio::test]
async fn test_moving_session_keeps_attendance_course_in_sync() {
    let storage = memory_storage().await;
    let (professor_id, _, session_id, student_id) = seed_course(&storage).await;
    let other = storage
        .create_course_impl(CreateCourseRequest {
            course_name: "MATH200".to_string(),
            professor_id,
        })
        .await
        .unwrap();
    storage
        .mark_attendance_impl(MarkAttendanceRequest {
            student_id,
            session_id,
            course_id: None,
            is_present: true,
        })
        .await
        .unwrap();

    storage
        .update_session_impl(
            session_id,
            UpdateSessionRequest {
                course_id: Some(other.course.id),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    let records = storage
        .list_attendance_impl(AttendanceListQuery {
            session_id: Some(session_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(records[0].attendance.course_id, other.course.id);
}

#[tokio::test]
async fn test_enrollment_filters_and_duplicates() {
    let storage = memory_storage().await;
    let (_, course_id, _, student_id) = seed_course(&storage).await;
    let req = CreateEnrollmentRequest {
        student_id,
        course_id,
        enrollment_date: None,
    };

    let enrollment = storage.create_enrollment_impl(req.clone()).await.unwrap();
    assert_eq!(enrollment.course.unwrap().course_name, "CS101");
    assert_eq!(enrollment.student.unwrap().id, student_id);

    let err = storage.create_enrollment_impl(req).await.unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));

    let by_course = storage
        .list_enrollments_impl(EnrollmentListQuery {
            course_id: Some(course_id),
            student_id: None,
        })
        .await
        .unwrap();
    assert_eq!(by_course.len(), 1);

    let other_course = storage
        .list_enrollments_impl(EnrollmentListQuery {
            course_id: Some(course_id + 100),
            student_id: None,
        })
        .await
        .unwrap();
    assert!(other_course.is_empty());
}

#[tokio::test]
async fn test_attendance_report_shows_present_student() {
    let storage = memory_storage().await;
    let (_, course_id, session_id, student_id) = seed_course(&storage).await;
    storage
        .mark_attendance_impl(MarkAttendanceRequest {
            student_id,
            session_id,
            course_id: Some(course_id),
            is_present: true,
        })
        .await
        .unwrap();

    let report = storage
        .get_attendance_report_impl(course_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.course.course_name, "CS101");
    assert_eq!(report.total_sessions, 1);
    assert_eq!(report.total_students, 1);
    assert_eq!(report.rows[0].student.id, student_id);
    assert!(report.rows[0].cells[0].is_present);
    assert_eq!(
        report.column_headers()[2],
        "Attended 2024-02-01".to_string()
    );

    assert!(storage.get_attendance_report_impl(999).await.unwrap().is_none());
}
