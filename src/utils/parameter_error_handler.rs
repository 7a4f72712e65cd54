//! 请求参数解析错误处理
//!
//! JSON 请求体反序列化失败返回 422，其余请求体/查询参数错误返回 400，
//! 统一使用 ApiResponse 包装。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let response = match &err {
        JsonPayloadError::Deserialize(e) => HttpResponse::UnprocessableEntity().json(
            ApiResponse::error_empty(ErrorCode::ValidationFailed, format!("Invalid request body: {e}")),
        ),
        _ => HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Malformed request body: {err}"),
        )),
    };

    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Query parameter error on {}: {}", req.path(), err);

    let response = HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        format!("Invalid query parameters: {err}"),
    ));

    InternalError::from_response(err, response).into()
}
