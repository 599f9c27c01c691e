/// Whether `raw` is acceptable input for a numeric field. Blank input is.
pub fn is_numeric_input(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    if is_radix_literal(trimmed) {
        return true;
    }
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" && trimmed.len() - unsigned.len() <= 1 {
        return true;
    }
    // Rust also accepts "inf" and "nan", which are not numbers here.
    if unsigned
        .chars()
        .next()
        .is_some_and(|c| !(c.is_ascii_digit() || c == '.'))
    {
        return false;
    }
    trimmed.parse::<f64>().is_ok()
}

/// Unsigned `0x`, `0o` and `0b` literals.
fn is_radix_literal(raw: &str) -> bool {
    let radix = match raw.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return false,
    };
    let digits = &raw[2..];
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

/// Parses the leading integer of `raw`, decimal or `0x` hex; anything
/// unparseable becomes 0 and out-of-range values saturate.
pub fn coerce_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }
    match i64::from_str_radix(digits, radix) {
        Ok(value) => sign * value,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_accepts_numbers_and_blank() {
        for raw in [
            "41", " 41 ", "-3", "4.5", ".5", "1e3", "", "   ", "Infinity", "0x1F", "0b101", "0O17",
        ] {
            assert!(is_numeric_input(raw), "{raw:?} should be numeric");
        }
    }

    #[test]
    fn numeric_input_rejects_text() {
        for raw in [
            "abc", "4a", "N/A", "nan", "inf", "--1", "0x", "0xZ1", "-0x1F", "0b102",
        ] {
            assert!(!is_numeric_input(raw), "{raw:?} should not be numeric");
        }
    }

    #[test]
    fn coerce_integer_takes_leading_digits() {
        assert_eq!(coerce_integer("41"), 41);
        assert_eq!(coerce_integer(" 41.9"), 41);
        assert_eq!(coerce_integer("-7 years"), -7);
        assert_eq!(coerce_integer("N/A"), 0);
        assert_eq!(coerce_integer(""), 0);
        assert_eq!(coerce_integer("-"), 0);
    }

    #[test]
    fn coerce_integer_saturates_on_overflow() {
        let huge = "99999999999999999999";
        assert!(is_numeric_input(huge));

        assert_eq!(coerce_integer(huge), i64::MAX);
        assert_eq!(coerce_integer(&format!("-{huge}")), i64::MIN);
        assert_eq!(coerce_integer("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn coerce_integer_reads_hex_but_not_other_radixes() {
        assert_eq!(coerce_integer("0x1F"), 31);
        assert_eq!(coerce_integer("-0X10"), -16);
        assert_eq!(coerce_integer("0x"), 0);
        assert_eq!(coerce_integer("0b11"), 0);
        assert_eq!(coerce_integer("0o17"), 0);
    }
}
