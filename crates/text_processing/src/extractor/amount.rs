//! Amount parsing

/// Parse a matched digit run into a non-negative amount
///
/// Pattern tables match digits with `\d`, which admits every Unicode
/// decimal digit. ASCII and Devanagari digits are converted; anything else
/// is a malformed token and yields `None`, which makes the pattern that
/// captured it count as not matching.
pub fn parse_amount(token: &str) -> Option<f64> {
    let mut ascii = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            '0'..='9' | '.' => ascii.push(c),
            '\u{0966}'..='\u{096F}' => {
                let digit = (c as u32 - 0x0966) as u8;
                ascii.push(char::from(b'0' + digit));
            }
            _ => return None,
        }
    }

    let value: f64 = ascii.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
