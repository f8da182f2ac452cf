//! 成绩聚合
//!
//! 报告书与汇总表共用的纯函数：按科目求平均、保留两位小数、
//! 与科目及格线（KKM）比较。

use std::collections::HashMap;

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 按科目聚合成绩行，返回 科目ID -> 平均分（两位小数）
pub fn average_by_subject(rows: &[(String, f64)]) -> HashMap<String, f64> {
    let mut sums: HashMap<&str, (f64, u32)> = HashMap::new();
    for (subject_id, score) in rows {
        let entry = sums.entry(subject_id.as_str()).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(subject_id, (sum, count))| (subject_id.to_string(), round2(sum / count as f64)))
        .collect()
}

/// 按 (学生, 科目) 聚合成绩行，返回 学生ID -> (科目ID -> 平均分)
pub fn average_by_student_subject(
    rows: &[(String, String, f64)],
) -> HashMap<String, HashMap<String, f64>> {
    let mut grouped: HashMap<&str, Vec<(String, f64)>> = HashMap::new();
    for (student_id, subject_id, score) in rows {
        grouped
            .entry(student_id.as_str())
            .or_default()
            .push((subject_id.clone(), *score));
    }

    grouped
        .into_iter()
        .map(|(student_id, rows)| (student_id.to_string(), average_by_subject(&rows)))
        .collect()
}

/// 平均分是否达到及格线（KKM），达线即及格
pub fn is_passing(average: f64, passing_grade: f64) -> bool {
    average >= passing_grade
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(86.666_666), 86.67);
        assert_eq!(round2(70.0), 70.0);
        assert_eq!(round2(0.005), 0.01);
    }

    #[test]
    fn test_average_by_subject() {
        let rows = vec![
            ("math".to_string(), 80.0),
            ("math".to_string(), 90.0),
            ("science".to_string(), 70.0),
        ];
        let averages = average_by_subject(&rows);
        assert_eq!(averages["math"], 85.0);
        assert_eq!(averages["science"], 70.0);
    }

    #[test]
    fn test_average_by_subject_rounding() {
        let rows = vec![
            ("math".to_string(), 80.0),
            ("math".to_string(), 85.0),
            ("math".to_string(), 92.0),
        ];
        let averages = average_by_subject(&rows);
        assert_eq!(averages["math"], 85.67);
    }

    #[test]
    fn test_average_by_subject_empty() {
        let averages = average_by_subject(&[]);
        assert!(averages.is_empty());
    }

    #[test]
    fn test_average_by_student_subject() {
        let rows = vec![
            ("s1".to_string(), "math".to_string(), 80.0),
            ("s1".to_string(), "math".to_string(), 90.0),
            ("s2".to_string(), "math".to_string(), 60.0),
        ];
        let averages = average_by_student_subject(&rows);
        assert_eq!(averages["s1"]["math"], 85.0);
        assert_eq!(averages["s2"]["math"], 60.0);
        assert!(!averages.contains_key("s3"));
    }

    #[test]
    fn test_is_passing_boundary() {
        // KKM 达线即及格
        assert!(is_passing(70.0, 70.0));
        assert!(is_passing(70.01, 70.0));
        assert!(!is_passing(69.99, 70.0));
    }
}
