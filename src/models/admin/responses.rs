use serde::Serialize;

// 管理员仪表盘统计响应
#[derive(Debug, Serialize)]
pub struct AdminStatsResponse {
    pub total_students: u64,
    pub total_applications: u64,
    pub total_colleges: u64,
    pub pending_enquiries: u64,
}
