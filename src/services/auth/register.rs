use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::users::entities::{UserRole, UserSummary};
use crate::models::users::requests::CreateUserRequest;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::RegisterRequest, responses::AuthResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_phone};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 字段校验
    if let Err(msg) = validate_register_fields(&register_request) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 2. 邮箱查重（唯一索引兜底）
    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check email uniqueness: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Registration failed: {e}"),
                )),
            );
        }
    }

    // 3. 密码哈希
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "Registration failed, unable to hash password",
                )),
            );
        }
    };

    // 4. 创建用户（注册只产生学生账号）
    let create_request = CreateUserRequest {
        email: register_request.email,
        phone: register_request.phone,
        password: password_hash,
        first_name: register_request.first_name,
        last_name: register_request.last_name,
        role: UserRole::Student,
    };

    match storage.create_user(create_request).await {
        Ok(user) => match user.generate_access_token() {
            Ok(access_token) => {
                info!("User {} registered successfully", user.email);
                let response = AuthResponse {
                    access_token,
                    token_type: "bearer".to_string(),
                    expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                    user: UserSummary::from(&user),
                };
                Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(response, "Registration successful")))
            }
            Err(e) => {
                error!("Failed to generate JWT token: {}", e);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        "Registration succeeded but token generation failed",
                    )),
                )
            }
        },
        Err(e) => {
            let msg = format!("Registration failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                // 查重与插入之间被并发注册抢先
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::UserEmailAlreadyExists,
                    "Email already registered",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::RegisterFailed, msg)))
            }
        }
    }
}

/// 注册字段校验辅助函数
fn validate_register_fields(req: &RegisterRequest) -> Result<(), &'static str> {
    validate_email(&req.email)?;
    if let Some(phone) = &req.phone {
        validate_phone(phone)?;
    }
    validate_password(&req.password)?;
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err("First name and last name cannot be empty");
    }
    Ok(())
}
