//! Prefix range matching shared by the collection searches.

/// Highest code point of the Private Use Area, used as the range sentinel.
const RANGE_END: char = '\u{f8ff}';

/// Inclusive bounds `[keyword, keyword + U+F8FF]` selecting values that
/// start with `keyword` under binary collation.
pub fn bounds(keyword: &str) -> (String, String) {
    let mut upper = String::with_capacity(keyword.len().saturating_add(RANGE_END.len_utf8()));
    upper.push_str(keyword);
    upper.push(RANGE_END);
    (String::from(keyword), upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_appends_sentinel() {
        // Arrange & Act
        let (lower, upper) = bounds("陳");

        // Assert
        assert_eq!(lower, "陳");
        assert_eq!(upper, "陳\u{f8ff}");
    }
}
