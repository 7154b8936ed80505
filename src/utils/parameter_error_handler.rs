//! 请求参数解析失败时统一返回 400 响应体

use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: String) -> Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

// JSON 请求体错误
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload rejected on {}: {}", req.path(), err);
    bad_request(format!("Invalid JSON payload: {err}"))
}

// 查询参数错误
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string rejected on {}: {}", req.path(), err);
    bad_request(format!("Invalid query parameters: {err}"))
}

// 路径参数错误
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Path rejected on {}: {}", req.path(), err);
    bad_request(format!("Invalid path parameters: {err}"))
}
