pub mod check_in;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod mark;
pub mod report;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceListQuery, CheckInRequest, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取考勤列表
    pub async fn list_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request, query).await
    }

    // 登记考勤（按学生与课次覆盖）
    pub async fn mark_attendance(
        &self,
        request: &HttpRequest,
        attendance_data: MarkAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, request, attendance_data).await
    }

    pub async fn get_attendance(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_attendance(self, request, attendance_id).await
    }

    pub async fn update_attendance(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
        update_data: UpdateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, request, attendance_id, update_data).await
    }

    pub async fn delete_attendance(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, request, attendance_id).await
    }

    // 扫码签到
    pub async fn check_in(
        &self,
        request: &HttpRequest,
        check_in_data: CheckInRequest,
    ) -> ActixResult<HttpResponse> {
        check_in::check_in(self, request, check_in_data).await
    }

    // 课程出勤汇总
    pub async fn get_course_report(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_course_report(self, request, course_id).await
    }

    // 导出课程出勤表
    pub async fn export_course_report(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        export::export_course_report(self, request, course_id).await
    }
}
