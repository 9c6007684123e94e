//! Leading-number parsing for host measurement strings like `"123.5px"`.

/// Parses the longest decimal number at the start of `text`, ignoring
/// whatever follows it.
///
/// Mirrors the host's `parseFloat`: leading whitespace is skipped, a sign
/// and `Infinity` are accepted, an exponent only counts when it has
/// digits. Returns `NaN` if there is no numeric prefix at all.
///
/// ```rust
/// use resizekit_dom::parse_float;
///
/// assert_eq!(parse_float("100.5px"), 100.5);
/// assert_eq!(parse_float("  -2e3em"), -2000.0);
/// assert!(parse_float("auto").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // The prefix is plain ASCII `[+-]digits[.digits][e[+-]digits]`, which
    // `f64::from_str` always accepts ("5." and ".5" included).
    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Whitespace and line terminators skipped before a number: Unicode
/// `White_Space` minus NEL, plus the byte order mark.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}
