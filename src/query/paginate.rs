//! 分页参数收敛
//!
//! 页码下限 1，页大小收敛到 [1, 100]，越界页由 Paginator 返回空页。

const MAX_PAGE_SIZE: i64 = 100;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// 将请求中的分页参数收敛为 Paginator 可用的 (page, size)
pub fn normalize_pagination(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1) as u64;
    let size = size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE) as u64;
    (page, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(normalize_pagination(None, None), (1, 10));
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_pagination(Some(3), Some(25)), (3, 25));
    }

    #[test]
    fn test_page_floor() {
        assert_eq!(normalize_pagination(Some(0), Some(10)), (1, 10));
        assert_eq!(normalize_pagination(Some(-5), Some(10)), (1, 10));
    }

    #[test]
    fn test_size_clamped() {
        assert_eq!(normalize_pagination(Some(1), Some(0)), (1, 1));
        assert_eq!(normalize_pagination(Some(1), Some(10000)), (1, 100));
    }
}
