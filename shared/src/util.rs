use unicode_normalization::UnicodeNormalization;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// URL slug for a display name
///
/// Accented letters are decomposed (NFKD) and reduced to their ASCII base,
/// other non-ASCII characters are dropped. ASCII letters and digits are kept
/// (lowercased), every other run of characters collapses into a single `-`,
/// and leading/trailing dashes are dropped.
/// `"Crème brûlée & Rice"` becomes `"creme-brulee-rice"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Grilled  Salmon & Rice"), "grilled-salmon-rice");
        assert_eq!(slugify("  Tiramisu!  "), "tiramisu");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slugify_strips_accents() {
        assert_eq!(slugify("Crème brûlée"), "creme-brulee");
        assert_eq!(slugify("Jalapeño Poppers"), "jalapeno-poppers");
        // 无 ASCII 分解的字符直接丢弃
        assert_eq!(slugify("Борщ soup"), "soup");
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 之后
        assert!(now_millis() > 1_704_067_200_000);
    }
}
