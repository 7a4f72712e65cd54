use serde::{Deserialize, Serialize};

// 申请状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        };
        write!(f, "{tag}")
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "submitted" => Ok(ApplicationStatus::Submitted),
            "under_review" => Ok(ApplicationStatus::UnderReview),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!(
                "无效的申请状态: '{s}'. 支持: pending, submitted, under_review, approved, rejected"
            )),
        }
    }
}

// 入学申请实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub student_id: String,
    pub college_id: String,
    pub course_id: String,
    pub status: ApplicationStatus,
    pub documents: Vec<String>,
    pub notes: Option<String>,
    pub applied_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for tag in ["pending", "submitted", "under_review", "approved", "rejected"] {
            let parsed = ApplicationStatus::from_str(tag).expect("parse status");
            assert_eq!(parsed.to_string(), tag);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!(ApplicationStatus::from_str("accepted").is_err());
    }
}
