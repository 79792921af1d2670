//! Address shortening for display.

const PREFIX_CHARS: usize = 6;
const SUFFIX_CHARS: usize = 4;

/// Shortens an address to `0x1234...abcd` form.
///
/// Returns an empty string for empty input. Addresses shorter than 10
/// characters still format, but prefix and suffix overlap.
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = address.chars().collect();
    let prefix: String = chars.iter().take(PREFIX_CHARS).collect();
    let suffix: String = chars[chars.len().saturating_sub(SUFFIX_CHARS)..]
        .iter()
        .collect();

    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address_empty() {
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_format_address_full_length() {
        let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
        let short = format_address(addr);
        assert_eq!(short, "0x5290...9EE7");
        assert_eq!(short.len(), 13);
    }

    #[test]
    fn test_format_address_minimum_meaningful_length() {
        assert_eq!(format_address("0123456789"), "012345...6789");
        assert_eq!(format_address("0123456789").len(), 13);
    }

    #[test]
    fn test_format_address_short_input_overlaps() {
        assert_eq!(format_address("abc"), "abc...abc");
        assert_eq!(format_address("0x1234"), "0x1234...1234");
    }
}
