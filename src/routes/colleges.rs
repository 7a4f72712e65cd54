use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::colleges::requests::{CollegeListQuery, CreateCollegeRequest};
use crate::models::users::entities::UserRole;
use crate::services::CollegeService;

// 懒加载的全局 CollegeService 实例
static COLLEGE_SERVICE: Lazy<CollegeService> = Lazy::new(CollegeService::new_lazy);

pub async fn list_colleges(
    req: HttpRequest,
    query: web::Query<CollegeListQuery>,
) -> ActixResult<HttpResponse> {
    COLLEGE_SERVICE
        .list_colleges(&req, query.into_inner())
        .await
}

pub async fn create_college(
    req: HttpRequest,
    college_data: web::Json<CreateCollegeRequest>,
) -> ActixResult<HttpResponse> {
    COLLEGE_SERVICE
        .create_college(&req, college_data.into_inner())
        .await
}

// 配置路由
pub fn configure_colleges_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/colleges").service(
            web::resource("")
                // 公开的学院列表
                .route(web::get().to(list_colleges))
                .route(
                    web::post()
                        .to(create_college)
                        // 咨询师与管理员可录入学院
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                        .wrap(middlewares::RequireJWT),
                ),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::Storage;
    use actix_web::{App, http::StatusCode, test, web};
    use std::sync::Arc;

    async fn setup_storage() -> Arc<dyn Storage> {
        Arc::new(SeaOrmStorage::new_in_memory().await.expect("storage"))
    }

    async fn create_user_with_role(
        storage: &Arc<dyn Storage>,
        email: &str,
        role: UserRole,
    ) -> (String, String) {
        let user = storage
            .create_user(CreateUserRequest {
                email: email.to_string(),
                phone: None,
                password: "phc-hash".to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                role,
            })
            .await
            .expect("create user");
        let token = user.generate_access_token().expect("token");
        (user.id, token)
    }

    fn college_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Test College",
            "location": "Patna, Bihar",
            "state": "Bihar",
            "courses": ["B.Tech"],
            "fees_range": "₹2-8 Lakhs",
            "rating": 4.0,
            "description": "Test",
            "established_year": 2001,
        })
    }

    #[actix_web::test]
    async fn test_student_create_college_forbidden() {
        let storage = setup_storage().await;
        let (_, token) = create_user_with_role(&storage, "s@x.com", UserRole::Student).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_colleges_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/colleges")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(college_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_counsellor_create_college_allowed() {
        let storage = setup_storage().await;
        let (_, token) = create_user_with_role(&storage, "c@x.com", UserRole::Counsellor).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_colleges_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/colleges")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(college_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // 列表接口可见新录入的学院
        let req = test::TestRequest::get().uri("/api/colleges").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_create_college_without_token_unauthorized() {
        let storage = setup_storage().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_colleges_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/colleges")
            .set_json(college_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
