//! 路径参数安全提取
//!
//! 路由中的 `{id}` 必须是正整数，否则直接返回 400 响应体。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

// 解析路径中的正整数 ID
fn parse_positive_id(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let message = format!("Invalid path parameter '{name}': {raw}");
            let response = HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
            Err(InternalError::from_response(message, response).into())
        }
    }
}

/// 路径中的 `{id}`
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_positive_id(req, "id").map(SafeIDI64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn extract(path_value: &str) -> Result<SafeIDI64, actix_web::Error> {
        let req = TestRequest::default()
            .param("id", path_value.to_string())
            .to_http_request();
        parse_positive_id(&req, "id").map(SafeIDI64)
    }

    #[test]
    fn test_accepts_positive_integer() {
        assert_eq!(extract("42").unwrap().0, 42);
    }

    #[test]
    fn test_rejects_non_numeric_and_non_positive() {
        for bad in ["abc", "0", "-3", "1.5", ""] {
            let err = extract(bad).unwrap_err();
            assert_eq!(
                err.as_response_error().status_code(),
                actix_web::http::StatusCode::BAD_REQUEST
            );
        }
    }
}
