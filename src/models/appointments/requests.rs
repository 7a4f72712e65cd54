use serde::Deserialize;

// 预约创建请求
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub appointment_date: chrono::NaiveDate,
    pub appointment_time: chrono::NaiveTime,
    pub purpose: String,
    pub notes: Option<String>,
}

// 预约列表可见范围（按角色确定）
#[derive(Debug, Clone)]
pub enum AppointmentListScope {
    /// 管理员：全部预约
    All,
    /// 学生：自己发起的预约
    Student(String),
    /// 咨询师：分配给自己的预约
    Counsellor(String),
}
