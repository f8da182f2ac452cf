use once_cell::sync::Lazy;
use regex::Regex;

static NISN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("Invalid NISN regex"));

static NPSN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").expect("Invalid NPSN regex"));

static NIY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6,20}$").expect("Invalid NIY regex"));

static ACADEMIC_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})/(\d{4})$").expect("Invalid academic year regex"));

/// 校验学生学籍号（NISN，10 位数字）
pub fn validate_nisn(nisn: &str) -> Result<(), &'static str> {
    if !NISN_RE.is_match(nisn) {
        return Err("NISN must be exactly 10 digits");
    }
    Ok(())
}

/// 校验学校主数据编号（NPSN，8 位数字）
pub fn validate_npsn(npsn: &str) -> Result<(), &'static str> {
    if !NPSN_RE.is_match(npsn) {
        return Err("NPSN must be exactly 8 digits");
    }
    Ok(())
}

/// 校验教职工编号（NIY，6-20 位数字）
pub fn validate_niy(niy: &str) -> Result<(), &'static str> {
    if !NIY_RE.is_match(niy) {
        return Err("NIY must be 6 to 20 digits");
    }
    Ok(())
}

/// 校验学年名称
///
/// 格式 "YYYY/YYYY"，且后一年必须紧接前一年。
pub fn validate_academic_year_name(name: &str) -> Result<(), &'static str> {
    let Some(captures) = ACADEMIC_YEAR_RE.captures(name) else {
        return Err("Academic year must use the \"YYYY/YYYY\" format");
    };
    let start: i32 = captures[1].parse().map_err(|_| "Invalid start year")?;
    let end: i32 = captures[2].parse().map_err(|_| "Invalid end year")?;
    if end != start + 1 {
        return Err("Academic year end must be the year after its start");
    }
    Ok(())
}

/// 校验分数范围
///
/// 分数录入范围 0-100（含边界）。
pub fn validate_score(score: f64) -> Result<(), &'static str> {
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err("Score must be between 0 and 100");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nisn() {
        assert!(validate_nisn("0051234567").is_ok());
    }

    #[test]
    fn test_invalid_nisn() {
        assert!(validate_nisn("12345").is_err());
        assert!(validate_nisn("12345678901").is_err());
        assert!(validate_nisn("00512345a7").is_err());
    }

    #[test]
    fn test_valid_npsn() {
        assert!(validate_npsn("20100234").is_ok());
    }

    #[test]
    fn test_invalid_npsn() {
        assert!(validate_npsn("201002").is_err());
        assert!(validate_npsn("2010023x").is_err());
    }

    #[test]
    fn test_valid_niy() {
        assert!(validate_niy("198706152011").is_ok());
        assert!(validate_niy("123456").is_ok());
    }

    #[test]
    fn test_invalid_niy() {
        assert!(validate_niy("12345").is_err());
        assert!(validate_niy("abc123").is_err());
    }

    #[test]
    fn test_valid_academic_year_name() {
        assert!(validate_academic_year_name("2025/2026").is_ok());
    }

    #[test]
    fn test_invalid_academic_year_name() {
        assert!(validate_academic_year_name("2025-2026").is_err());
        assert!(validate_academic_year_name("2025/2027").is_err());
        assert!(validate_academic_year_name("2026/2025").is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(100.0).is_ok());
        assert!(validate_score(87.5).is_ok());
        assert!(validate_score(-0.5).is_err());
        assert!(validate_score(100.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
    }
}
