//! HS code helpers. Only the chapter (first two digits) and heading
//! (first four characters) of a code carry meaning here.

/// Width codes are left-zero-padded to before the chapter is read.
const PADDED_WIDTH: usize = 4;

/// Extracts the 2-digit chapter number.
///
/// Codes shorter than four characters are left-padded with zeros first, so
/// `"1"` reads as `"0001"` (chapter 0). Returns `None` when either chapter
/// character is not an ASCII digit.
pub fn chapter(hs_code: &str) -> Option<u8> {
    let len = hs_code.chars().count();
    let padded: String = std::iter::repeat('0')
        .take(PADDED_WIDTH.saturating_sub(len))
        .chain(hs_code.chars())
        .collect();

    let mut digits = padded.chars().take(2);
    let tens = digits.next()?.to_digit(10)?;
    let ones = digits.next()?.to_digit(10)?;
    Some((tens * 10 + ones) as u8)
}

/// The 4-character heading used as the reference store key.
/// Shorter codes are returned whole; surrounding whitespace is ignored.
pub fn heading(hs_code: &str) -> String {
    hs_code.trim().chars().take(PADDED_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_from_full_code() {
        assert_eq!(chapter("25084010"), Some(25));
        assert_eq!(chapter("28151010"), Some(28));
    }

    #[test]
    fn test_chapter_pads_short_codes() {
        assert_eq!(chapter("1"), Some(0));
        assert_eq!(chapter("15"), Some(0));
        assert_eq!(chapter("150"), Some(1));
        assert_eq!(chapter(""), Some(0));
    }

    #[test]
    fn test_chapter_rejects_non_digits() {
        assert_eq!(chapter("AB12"), None);
        assert_eq!(chapter("2X0810"), None);
        assert_eq!(chapter("-250"), None);
    }

    #[test]
    fn test_heading_takes_first_four() {
        assert_eq!(heading("25084010"), "2508");
        assert_eq!(heading("  28151010 "), "2815");
        assert_eq!(heading("84"), "84");
        assert_eq!(heading(""), "");
    }
}
