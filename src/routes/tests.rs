use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use super::configure_api_routes;
use crate::config::DatabaseConfig;
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::utils::{json_error_handler, path_error_handler, query_error_handler};

async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory database should connect");
    Arc::new(storage)
}

macro_rules! test_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .configure(configure_api_routes),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn test_get_missing_records_returns_not_found() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    for path in [
        "/api/v1/users/999",
        "/api/v1/professors/999",
        "/api/v1/students/999",
        "/api/v1/courses/999",
        "/api/v1/sessions/999",
        "/api/v1/enrollments/999",
        "/api/v1/attendance/999",
    ] {
        let (status, body) = send!(app, test::TestRequest::get().uri(path));
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {path}");
        assert_ne!(body["code"], 0);
        assert!(body.get("data").is_none());
    }
}

#[actix_web::test]
async fn test_invalid_path_id_is_bad_request() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/v1/courses/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1000);
}

#[actix_web::test]
async fn test_course_report_scenario() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, professor) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/professors")
            .set_json(json!({ "name": "Dr. Smith" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let professor_id = professor["data"]["id"].as_i64().unwrap();

    let (status, course) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .set_json(json!({ "courseName": "CS101", "professorId": professor_id }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let course_id = course["data"]["id"].as_i64().unwrap();

    let (status, session) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/courses/{course_id}/sessions"))
            .set_json(json!({ "sessionDate": "2024-02-01", "startTime": "09:00", "endTime": "10:30" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let session_id = session["data"]["id"].as_i64().unwrap();
    assert_eq!(session["data"]["courseId"], course_id);

    let (status, student) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({ "academicNumber": "S0000001", "studentName": "Alice Doe" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let student_id = student["data"]["id"].as_i64().unwrap();

    let (status, mark) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/attendance").set_json(json!({
            "studentId": student_id,
            "sessionId": session_id,
            "courseId": course_id,
            "isPresent": true
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(mark["data"]["courseId"], course_id);

    let (status, report) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/courses/{course_id}/attendance-report"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["data"]["totalSessions"], 1);
    assert_eq!(report["data"]["totalStudents"], 1);
    let row = &report["data"]["rows"][0];
    assert_eq!(row["student"]["academicNumber"], "S0000001");
    assert_eq!(row["cells"][0]["sessionId"], session_id);
    assert_eq!(row["cells"][0]["isPresent"], true);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/courses/{course_id}/attendance-report/export"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("CS101_Attendance.xlsx"));
    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..2], b"PK");
}

#[actix_web::test]
async fn test_report_for_missing_course_is_not_found() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/v1/courses/42/attendance-report")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2301);
}

#[actix_web::test]
async fn test_professor_user_creates_professor() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/users").set_json(json!({
            "userName": "smith",
            "password": "correct-horse",
            "userType": "Professors"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["userName"], "smith");
    assert!(body["data"]["user"].get("passwordHash").is_none());
    assert_eq!(body["data"]["professor"]["name"], "smith");

    let (status, professors) = send!(app, test::TestRequest::get().uri("/api/v1/professors"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(professors["data"].as_array().unwrap().len(), 1);

    let (status, _) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/users").set_json(json!({
            "userName": "smith",
            "password": "another-pass",
            "userType": "Admin"
        }))
    );
    assert_eq!(status, StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_invalid_user_payloads_are_rejected() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/users").set_json(json!({
            "userName": "ok_name",
            "password": "short",
            "userType": "Admin"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);

    let (status, _) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/users").set_json(json!({
            "userName": "ok_name",
            "password": "long-enough",
            "userType": "Student"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_course_with_unknown_professor_is_rejected() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .set_json(json!({ "courseName": "CS101", "professorId": 77 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);
}

#[actix_web::test]
async fn test_update_then_delete_student() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({ "academicNumber": "S0000002", "studentName": "Bob Ray" }))
    );
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, updated) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/students/{id}"))
            .set_json(json!({ "studentName": "Bobby Ray" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["studentName"], "Bobby Ray");
    assert_eq!(updated["data"]["academicNumber"], "S0000002");

    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/students/{id}"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/students/{id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_qr_check_in_marks_student_present() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (_, professor) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/professors")
            .set_json(json!({ "name": "Dr. Smith" }))
    );
    let (_, course) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/courses").set_json(json!({
            "courseName": "CS101",
            "professorId": professor["data"]["id"]
        }))
    );
    let course_id = course["data"]["id"].as_i64().unwrap();
    let (_, session) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/sessions")
            .set_json(json!({ "courseId": course_id, "sessionDate": "2024-02-01" }))
    );
    let session_id = session["data"]["id"].as_i64().unwrap();
    let (_, student) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({ "academicNumber": "S0000001", "studentName": "Alice Doe" }))
    );
    let student_id = student["data"]["id"].as_i64().unwrap();

    let (status, issued) = send!(
        app,
        test::TestRequest::post().uri(&format!("/api/v1/sessions/{session_id}/qr-token"))
    );
    assert_eq!(status, StatusCode::OK);
    let token = issued["data"]["token"].as_str().unwrap().to_string();

    let (status, checked_in) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/attendance/check-in")
            .set_json(json!({ "token": token, "studentId": student_id }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(checked_in["data"]["sessionId"], session_id);
    assert_eq!(checked_in["data"]["courseId"], course_id);
    assert_eq!(checked_in["data"]["isPresent"], true);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/attendance/check-in")
            .set_json(json!({ "token": "not-a-token", "studentId": student_id }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2605);
}

#[actix_web::test]
async fn test_health_reports_database_status() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/v1/system/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "ok");
}

#[actix_web::test]
async fn test_delete_professor_with_courses_is_conflict() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (_, professor) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/professors")
            .set_json(json!({ "name": "Dr. Smith" }))
    );
    let professor_id = professor["data"]["id"].as_i64().unwrap();
    let (status, course) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .set_json(json!({ "courseName": "CS101", "professorId": professor_id }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let course_id = course["data"]["id"].as_i64().unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/professors/{professor_id}"))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 1009);
    assert!(!body["message"].as_str().unwrap().contains("FOREIGN KEY"));

    // 课程仍然存在，教师也未被删除
    let (status, _) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/professors/{professor_id}"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/courses/{course_id}"))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/professors/{professor_id}"))
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_names_with_punctuation_are_accepted() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/users").set_json(json!({
            "userName": "Dr. Smith",
            "password": "password123",
            "userType": "Professors"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["professor"]["name"], "Dr. Smith");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({ "academicNumber": "2024/001", "studentName": "Alice Doe" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["academicNumber"], "2024/001");
}
