//! 主键生成
//!
//! 主键为不透明字符串：UUIDv7 的无连字符形式，按时间有序，可直接用于
//! 默认排序的平局裁决。

/// 生成一个新的主键
pub fn generate_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

/// 校验路径参数是否为合法主键形态（32 位十六进制）
pub fn is_valid_id(raw: &str) -> bool {
    raw.len() == 32 && raw.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 32);
        assert!(is_valid_id(&id));
    }

    #[test]
    fn test_generated_ids_unique() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_invalid_ids_rejected() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("abc"));
        assert!(!is_valid_id("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!is_valid_id("0198c5f2-7f7e-7000-8000-000000000000"));
    }
}
