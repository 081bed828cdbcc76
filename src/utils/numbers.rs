/// 解析 selected_numbers 列声明的号码
///
/// 该列保存客户端链上提交的原始内容, 正常情况是数字字符串,
/// 但没有任何约束保证。解析失败的行由调用方跳过 (不会出现在占号列表中)。
pub fn parse_selected_number(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// 号码去重并升序排列
/// 结果严格递增, 长度即占号数量
pub fn dedup_sorted(mut numbers: Vec<u32>) -> Vec<u32> {
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selected_number() {
        assert_eq!(parse_selected_number("42"), Some(42));
        assert_eq!(parse_selected_number(" 07 "), Some(7));
        assert_eq!(parse_selected_number("0"), Some(0));
    }

    #[test]
    fn test_parse_selected_number_rejects_garbage() {
        assert_eq!(parse_selected_number(""), None);
        assert_eq!(parse_selected_number("abc"), None);
        assert_eq!(parse_selected_number("-3"), None);
        assert_eq!(parse_selected_number("1.5"), None);
    }

    #[test]
    fn test_dedup_sorted() {
        assert_eq!(dedup_sorted(vec![9, 3, 3, 1, 9, 7]), vec![1, 3, 7, 9]);
        assert_eq!(dedup_sorted(vec![]), Vec::<u32>::new());
    }

    #[test]
    fn test_dedup_sorted_is_strictly_increasing() {
        let out = dedup_sorted(vec![5, 5, 5, 2, 2, 8]);
        assert!(out.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(out.len(), 3);
    }
}
