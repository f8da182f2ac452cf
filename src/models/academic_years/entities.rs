use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub enum Semester {
    Odd,
    Even,
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::Odd => write!(f, "odd"),
            Semester::Even => write!(f, "even"),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "odd" => Ok(Semester::Odd),
            "even" => Ok(Semester::Even),
            _ => Err(format!("Invalid semester: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct AcademicYear {
    // 学年ID
    pub id: String,
    // 学年名称，如 "2025/2026"
    pub name: String,
    // 学期
    pub semester: Semester,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_roundtrip() {
        assert_eq!("odd".parse::<Semester>().unwrap(), Semester::Odd);
        assert_eq!("even".parse::<Semester>().unwrap(), Semester::Even);
        assert_eq!(Semester::Odd.to_string(), "odd");
    }

    #[test]
    fn test_semester_invalid() {
        assert!("third".parse::<Semester>().is_err());
    }
}
