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

pub use admin::configure_admin_routes;
pub use applications::configure_applications_routes;
pub use appointments::configure_appointments_routes;
pub use auth::configure_auth_routes;
pub use blogs::configure_blogs_routes;
pub use colleges::configure_colleges_routes;
pub use courses::configure_courses_routes;
pub use enquiries::configure_enquiries_routes;
pub use seed::configure_seed_routes;
pub use testimonials::configure_testimonials_routes;
