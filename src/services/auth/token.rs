use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserSummary;
use crate::models::{ApiResponse, ErrorCode, auth::responses::UserInfoResponse};

use super::AuthService;

/// 返回当前登录用户的摘要信息，用户由 RequireJWT 中间件解析
pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => {
            let response = UserInfoResponse {
                user: UserSummary::from(&user),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}
