use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SeedService;
use crate::errors::Result;
use crate::models::colleges::requests::CreateCollegeRequest;
use crate::models::courses::entities::CourseType;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::testimonials::requests::CreateTestimonialRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn handle_init_data(
    service: &SeedService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match seed_if_empty(storage.as_ref()).await {
        Ok(true) => {
            info!("Sample data initialized: 3 colleges, 3 courses, 2 testimonials");
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Sample data initialized successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Sample data already exists",
        ))),
        Err(e) => {
            error!("Failed to initialize sample data: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to initialize sample data: {e}"),
                )),
            )
        }
    }
}

/// 存在性检查：已有学院即视为已初始化，返回是否写入了示例数据
pub(crate) async fn seed_if_empty(storage: &dyn Storage) -> Result<bool> {
    if storage.count_colleges().await? > 0 {
        return Ok(false);
    }

    for college in sample_colleges() {
        storage.create_college(college).await?;
    }
    for course in sample_courses() {
        storage.create_course(course).await?;
    }
    for testimonial in sample_testimonials() {
        storage.create_testimonial(testimonial).await?;
    }
    Ok(true)
}

fn sample_colleges() -> Vec<CreateCollegeRequest> {
    vec![
        CreateCollegeRequest {
            name: "Indian Institute of Technology, Patna".to_string(),
            location: "Patna, Bihar".to_string(),
            state: "Bihar".to_string(),
            courses: vec![CourseType::BTech],
            fees_range: "₹2-8 Lakhs".to_string(),
            rating: 4.5,
            description: "Premier engineering institute with excellent placement record"
                .to_string(),
            established_year: 2008,
        },
        CreateCollegeRequest {
            name: "Patna Medical College".to_string(),
            location: "Patna, Bihar".to_string(),
            state: "Bihar".to_string(),
            courses: vec![CourseType::Bhms, CourseType::Bams],
            fees_range: "₹1-3 Lakhs".to_string(),
            rating: 4.2,
            description: "Leading medical college in Bihar".to_string(),
            established_year: 1925,
        },
        CreateCollegeRequest {
            name: "Birla Institute of Technology, Mesra".to_string(),
            location: "Ranchi, Jharkhand".to_string(),
            state: "Jharkhand".to_string(),
            courses: vec![CourseType::BTech, CourseType::BPharma],
            fees_range: "₹5-12 Lakhs".to_string(),
            rating: 4.3,
            description: "Private engineering and pharmacy college".to_string(),
            established_year: 1955,
        },
    ]
}

fn sample_courses() -> Vec<CreateCourseRequest> {
    vec![
        CreateCourseRequest {
            name: "Bachelor of Technology".to_string(),
            course_type: CourseType::BTech,
            duration: "4 years".to_string(),
            description: "Undergraduate engineering program".to_string(),
            eligibility: "12th with PCM (75%+ marks)".to_string(),
            career_opportunities: vec![
                "Software Engineer".to_string(),
                "System Analyst".to_string(),
                "Project Manager".to_string(),
            ],
        },
        CreateCourseRequest {
            name: "Bachelor of Physiotherapy".to_string(),
            course_type: CourseType::Bpt,
            duration: "4.5 years".to_string(),
            description: "Healthcare program focusing on physical rehabilitation".to_string(),
            eligibility: "12th with PCB (50%+ marks)".to_string(),
            career_opportunities: vec![
                "Physiotherapist".to_string(),
                "Sports Therapist".to_string(),
                "Rehabilitation Specialist".to_string(),
            ],
        },
        CreateCourseRequest {
            name: "Bachelor of Pharmacy".to_string(),
            course_type: CourseType::BPharma,
            duration: "4 years".to_string(),
            description: "Pharmaceutical sciences program".to_string(),
            eligibility: "12th with PCM/PCB (50%+ marks)".to_string(),
            career_opportunities: vec![
                "Pharmacist".to_string(),
                "Drug Inspector".to_string(),
                "Research Analyst".to_string(),
            ],
        },
    ]
}

fn sample_testimonials() -> Vec<CreateTestimonialRequest> {
    vec![
        CreateTestimonialRequest {
            student_name: "Rahul Kumar".to_string(),
            course: "B.Tech Computer Science".to_string(),
            college: "IIT Patna".to_string(),
            message:
                "Edu-Mentor helped me secure admission in my dream college. The counselling was excellent!"
                    .to_string(),
            rating: 5.0,
            photo_url: None,
            is_featured: true,
        },
        CreateTestimonialRequest {
            student_name: "Priya Singh".to_string(),
            course: "B.Pharma".to_string(),
            college: "BIT Mesra".to_string(),
            message: "Thanks to Edu-Mentor, I got admission with scholarship. Highly recommended!"
                .to_string(),
            rating: 4.8,
            photo_url: None,
            is_featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::validate::validate_rating;

    #[test]
    fn test_sample_data_shape() {
        assert_eq!(sample_colleges().len(), 3);
        assert_eq!(sample_courses().len(), 3);
        assert_eq!(sample_testimonials().len(), 2);

        for college in sample_colleges() {
            assert!(validate_rating(college.rating).is_ok());
        }
        for testimonial in sample_testimonials() {
            assert!(validate_rating(testimonial.rating).is_ok());
        }
    }

    #[tokio::test]
    async fn test_seed_twice_inserts_nothing() {
        let storage = SeaOrmStorage::new_in_memory().await.expect("storage");

        // 首次写入示例数据
        let inserted = seed_if_empty(&storage).await.expect("first seed");
        assert!(inserted);
        assert_eq!(storage.count_colleges().await.expect("count"), 3);

        // 二次调用命中存在性检查，不再写入
        let inserted = seed_if_empty(&storage).await.expect("second seed");
        assert!(!inserted);
        assert_eq!(storage.count_colleges().await.expect("count"), 3);
        assert_eq!(storage.count_active_colleges().await.expect("count"), 3);
    }
}
