use serde::{Deserialize, Serialize};

// 课程类别（封闭标签集）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum CourseType {
    #[serde(rename = "B.Tech")]
    BTech,
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "BPT")]
    Bpt,
    #[serde(rename = "B.Pharma")]
    BPharma,
    #[serde(rename = "M.Pharma")]
    MPharma,
    #[serde(rename = "BHMS")]
    Bhms,
    #[serde(rename = "BAMS")]
    Bams,
}

impl CourseType {
    pub const BTECH: &'static str = "B.Tech";
    pub const DIPLOMA: &'static str = "Diploma";
    pub const BPT: &'static str = "BPT";
    pub const BPHARMA: &'static str = "B.Pharma";
    pub const MPHARMA: &'static str = "M.Pharma";
    pub const BHMS: &'static str = "BHMS";
    pub const BAMS: &'static str = "BAMS";
}

impl<'de> Deserialize<'de> for CourseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            CourseType::BTech => CourseType::BTECH,
            CourseType::Diploma => CourseType::DIPLOMA,
            CourseType::Bpt => CourseType::BPT,
            CourseType::BPharma => CourseType::BPHARMA,
            CourseType::MPharma => CourseType::MPHARMA,
            CourseType::Bhms => CourseType::BHMS,
            CourseType::Bams => CourseType::BAMS,
        };
        write!(f, "{tag}")
    }
}

impl std::str::FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CourseType::BTECH => Ok(CourseType::BTech),
            CourseType::DIPLOMA => Ok(CourseType::Diploma),
            CourseType::BPT => Ok(CourseType::Bpt),
            CourseType::BPHARMA => Ok(CourseType::BPharma),
            CourseType::MPHARMA => Ok(CourseType::MPharma),
            CourseType::BHMS => Ok(CourseType::Bhms),
            CourseType::BAMS => Ok(CourseType::Bams),
            _ => Err(format!(
                "无效的课程类别: '{s}'. 支持: B.Tech, Diploma, BPT, B.Pharma, M.Pharma, BHMS, BAMS"
            )),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub course_type: CourseType,
    pub duration: String,
    pub description: String,
    pub eligibility: String,
    pub career_opportunities: Vec<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_course_type_round_trip() {
        for tag in [
            "B.Tech",
            "Diploma",
            "BPT",
            "B.Pharma",
            "M.Pharma",
            "BHMS",
            "BAMS",
        ] {
            let parsed = CourseType::from_str(tag).expect("parse course type");
            assert_eq!(parsed.to_string(), tag);
        }
    }

    #[test]
    fn test_course_type_serde_uses_tag() {
        let json = serde_json::to_string(&CourseType::BPharma).expect("serialize");
        assert_eq!(json, "\"B.Pharma\"");
        let back: CourseType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, CourseType::BPharma);
    }

    #[test]
    fn test_course_type_rejects_unknown() {
        assert!(CourseType::from_str("MBBS").is_err());
    }
}
