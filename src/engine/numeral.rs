//! Plain-numeral recognition shared by every "does this look numeric" check

/// Whether `s` is a plain numeral: an optional `+`/`-` sign, digits, and at
/// most one decimal point, with at least one digit overall.
///
/// Exponents (`1e5`), thousands separators (`1,000`), surrounding whitespace
/// and special float spellings (`NaN`, `inf`) are not numerals.
pub fn is_numeral(s: &str) -> bool {
    let body = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);

    let mut digits = 0usize;
    let mut points = 0usize;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => {
                points += 1;
                if points > 1 {
                    return false;
                }
            }
            _ => return false,
        }
    }

    digits > 0
}
