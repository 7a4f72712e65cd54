pub mod admin;
pub mod applications;
pub mod appointments;
pub mod auth;
pub mod blogs;
pub mod colleges;
pub mod courses;
pub mod enquiries;
pub mod seed;
pub mod testimonials;

pub use admin::AdminService;
pub use applications::ApplicationService;
pub use appointments::AppointmentService;
pub use auth::AuthService;
pub use blogs::BlogService;
pub use colleges::CollegeService;
pub use courses::CourseService;
pub use enquiries::EnquiryService;
pub use seed::SeedService;
pub use testimonials::TestimonialService;
