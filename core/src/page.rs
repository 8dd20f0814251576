pub const FIRST_PAGE: u32 = 1;

/// Constrains a requested page to `[1, page_count]`.
pub fn clamp_page(page: i64, page_count: u32) -> u32 {
    let last = i64::from(page_count.max(FIRST_PAGE));
    // Bounded by `last`, which came from a u32.
    page.clamp(i64::from(FIRST_PAGE), last) as u32
}

/// Reads the page encoded in a location fragment such as `#7`.
///
/// Takes the decimal prefix of the text after `#`: leading whitespace and a
/// sign are accepted, then the longest run of decimal digits, so `#7abc` is 7
/// and `#0x10` reads as 0. Anything that does not yield a positive number
/// falls back to the first page.
pub fn page_from_location(hash: &str) -> u32 {
    let Some(raw) = hash.strip_prefix('#') else {
        return FIRST_PAGE;
    };
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let len = digits.bytes().take_while(|byte| byte.is_ascii_digit()).count();
    if negative || len == 0 {
        return FIRST_PAGE;
    }
    let value = digits[..len].bytes().fold(0u32, |acc, byte| {
        acc.saturating_mul(10).saturating_add(u32::from(byte - b'0'))
    });
    if value == 0 {
        FIRST_PAGE
    } else {
        value
    }
}

pub fn hash_for_page(page: u32) -> String {
    format!("#{page}")
}

/// Page previewed next to `current`; the last page previews itself.
pub fn look_ahead_page(current: u32, page_count: u32) -> u32 {
    if current < page_count {
        current + 1
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_covers_both_ends() {
        assert_eq!(clamp_page(-40, 5), 1);
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(6, 5), 5);
        assert_eq!(clamp_page(i64::MAX, 5), 5);
        assert_eq!(clamp_page(i64::MIN, 5), 1);
    }

    #[test]
    fn empty_deck_clamps_to_first_page() {
        assert_eq!(clamp_page(9, 0), 1);
    }

    #[test]
    fn location_parsing_takes_decimal_prefix() {
        assert_eq!(page_from_location(""), 1);
        assert_eq!(page_from_location("#"), 1);
        assert_eq!(page_from_location("#12"), 12);
        assert_eq!(page_from_location("#7abc"), 7);
        assert_eq!(page_from_location("# 4"), 4);
        assert_eq!(page_from_location("#+3"), 3);
        assert_eq!(page_from_location("#0"), 1);
        assert_eq!(page_from_location("#-2"), 1);
        assert_eq!(page_from_location("#abc"), 1);
        assert_eq!(page_from_location("#0x10"), 1);
        assert_eq!(page_from_location("#010"), 10);
        assert_eq!(page_from_location("12"), 1);
        assert_eq!(page_from_location("#99999999999999"), u32::MAX);
    }

    #[test]
    fn hash_round_trips_every_page() {
        for page in 1..=64 {
            assert_eq!(page_from_location(&hash_for_page(page)), page);
        }
    }

    #[test]
    fn look_ahead_stops_at_last_page() {
        assert_eq!(look_ahead_page(1, 3), 2);
        assert_eq!(look_ahead_page(2, 3), 3);
        assert_eq!(look_ahead_page(3, 3), 3);
    }
}
