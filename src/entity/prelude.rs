//! 预导入模块，方便使用

pub use super::applications::{
    ActiveModel as ApplicationActiveModel, Entity as Applications, Model as ApplicationModel,
};
pub use super::appointments::{
    ActiveModel as AppointmentActiveModel, Entity as Appointments, Model as AppointmentModel,
};
pub use super::blog_posts::{
    ActiveModel as BlogPostActiveModel, Entity as BlogPosts, Model as BlogPostModel,
};
pub use super::colleges::{
    ActiveModel as CollegeActiveModel, Entity as Colleges, Model as CollegeModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::enquiries::{
    ActiveModel as EnquiryActiveModel, Entity as Enquiries, Model as EnquiryModel,
};
pub use super::testimonials::{
    ActiveModel as TestimonialActiveModel, Entity as Testimonials, Model as TestimonialModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
