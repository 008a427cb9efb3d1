/// Lenient integer parsing for numeric form fields.
///
/// Reads the leading integer of `input` (surrounding whitespace and a sign
/// allowed, trailing garbage ignored). Input without a leading integer
/// becomes `0`, never the previous value. No range clamping.
///
/// Example: `"12abc"` -> 12, `"abc"` -> 0, `""` -> 0, `"-3"` -> -3
pub fn parse_lenient_int(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }

    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_lenient_int("1000"), 1000);
        assert_eq!(parse_lenient_int("  42 "), 42);
        assert_eq!(parse_lenient_int("-3"), -3);
        assert_eq!(parse_lenient_int("+8"), 8);
    }

    #[test]
    fn test_non_numeric_becomes_zero() {
        assert_eq!(parse_lenient_int("abc"), 0);
        assert_eq!(parse_lenient_int(""), 0);
        assert_eq!(parse_lenient_int("-"), 0);
        assert_eq!(parse_lenient_int("x12"), 0);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_lenient_int("12abc"), 12);
        assert_eq!(parse_lenient_int("3.7"), 3);
    }

    #[test]
    fn test_no_clamping() {
        assert_eq!(parse_lenient_int("999"), 999);
        assert_eq!(parse_lenient_int("0"), 0);
    }
}
