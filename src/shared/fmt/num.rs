//! Number text helpers.

/// Trims trailing fractional zeros and inserts thousands separators.
///
/// Expects plain decimal text such as `"-1234.500"`; returns `"-1,234.5"`.
pub fn display_formatted_string(formatted: &str) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_grouped() {
        assert_eq!(display_formatted_string("0"), "0");
        assert_eq!(display_formatted_string("123"), "123");
        assert_eq!(display_formatted_string("1000"), "1,000");
        assert_eq!(display_formatted_string("1234567890"), "1,234,567,890");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(display_formatted_string("1.500"), "1.5");
        assert_eq!(display_formatted_string("100.00"), "100");
        assert_eq!(display_formatted_string("1000.00"), "1,000");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(display_formatted_string("-1000"), "-1,000");
        assert_eq!(display_formatted_string("-1234.56"), "-1,234.56");
        assert_eq!(display_formatted_string("-999"), "-999");
    }
}
