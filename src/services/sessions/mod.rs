pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod qr_token;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sessions::requests::{
    CreateSessionRequest, SessionListQuery, UpdateSessionRequest,
};
use crate::storage::Storage;

pub struct SessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SessionService {
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

    // 获取课次列表
    pub async fn list_sessions(
        &self,
        request: &HttpRequest,
        query: SessionListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_sessions(self, request, query).await
    }

    // 创建课次；path_course_id 来自 /courses/{id}/sessions
    pub async fn create_session(
        &self,
        request: &HttpRequest,
        path_course_id: Option<i64>,
        session_data: CreateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(self, request, path_course_id, session_data).await
    }

    pub async fn get_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_session(self, request, session_id).await
    }

    pub async fn update_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
        update_data: UpdateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_session(self, request, session_id, update_data).await
    }

    pub async fn delete_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_session(self, request, session_id).await
    }

    // 签发签到二维码令牌
    pub async fn issue_qr_token(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        qr_token::issue_qr_token(self, request, session_id).await
    }
}
