//! SQL 辅助函数

/// 转义 LIKE 模式中的特殊字符
///
/// 用户输入进入 LIKE 查询前必须转义 `\`、`%`、`_`。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("Budi"), "Budi");
    }

    #[test]
    fn test_percent_escaped() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
    }

    #[test]
    fn test_underscore_escaped() {
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
    }

    #[test]
    fn test_backslash_escaped_first() {
        assert_eq!(escape_like_pattern("a\\%"), "a\\\\\\%");
    }
}
