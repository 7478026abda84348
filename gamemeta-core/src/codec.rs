//! Fast primitive codecs for metadata field values.
//!
//! The parsers accept a deliberately narrow grammar (no whitespace, no `+`,
//! no exponent) so that values already stored in gamelists decode the same
//! way everywhere. They never panic: a `None` result means the input did not
//! match, and the caller chooses the fallback.

/// Parse `-?[0-9]+` spanning the whole string.
///
/// Values that do not fit in an `i32` are rejected.
pub fn string_to_int(s: &str) -> Option<i32> {
    let (value, rest) = parse_int(s.as_bytes())?;
    rest.is_empty().then_some(value)
}

/// Parse `-?[0-9]+` starting at byte `offset`, which must be followed by `stop`.
///
/// Returns the value and the byte index of the terminator, so the caller can
/// continue parsing a composite string such as `"2-4"` after it.
pub fn string_to_int_until(s: &str, offset: usize, stop: u8) -> Option<(i32, usize)> {
    let bytes = s.as_bytes().get(offset..)?;
    let (value, rest) = parse_int(bytes)?;
    (rest.first() == Some(&stop)).then_some((value, s.len() - rest.len()))
}

fn parse_int(bytes: &[u8]) -> Option<(i32, &[u8])> {
    let (negative, digits) = split_sign(bytes);
    let len = digit_run(digits);
    if len == 0 {
        return None;
    }

    // Accumulate towards the sign so that i32::MIN parses.
    let mut value: i32 = 0;
    for &b in &digits[..len] {
        let digit = i32::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some((value, &digits[len..]))
}

/// Parse `-?[0-9]+(\.[0-9]*)?` spanning the whole string.
///
/// The value is `integer + fraction / 10^digits`. A trailing `.` with no
/// digits is accepted (`"1."` is 1.0), as older gamelists contain it.
pub fn string_to_float(s: &str) -> Option<f32> {
    let (negative, bytes) = split_sign(s.as_bytes());

    let int_len = digit_run(bytes);
    if int_len == 0 {
        return None;
    }
    let mut int_part = 0f64;
    for &b in &bytes[..int_len] {
        int_part = int_part * 10.0 + f64::from(b - b'0');
    }

    let mut fract_part = 0f64;
    let mut pow10 = 1f64;
    let rest = &bytes[int_len..];
    match rest.split_first() {
        None => {}
        Some((b'.', fraction)) => {
            let fract_len = digit_run(fraction);
            if fract_len != fraction.len() {
                return None;
            }
            // Digits past f64 precision cannot change an f32 result.
            for &b in fraction.iter().take(17) {
                fract_part = fract_part * 10.0 + f64::from(b - b'0');
                pow10 *= 10.0;
            }
        }
        Some(_) => return None,
    }

    let value = (int_part + fract_part / pow10) as f32;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Format a float with exactly `precision` fractional digits.
///
/// Extra digits are truncated, not rounded: `0.9999` at precision 2 is
/// `"0.99"`. Truncation works on the shortest decimal form of the value, so
/// a string produced here parses back to a value that formats identically.
pub fn float_to_string(value: f32, precision: usize) -> String {
    // Also folds -0.0 into 0.0.
    let value = if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    };
    let repr = value.to_string();
    let (int_part, fract_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut result = String::with_capacity(int_part.len() + precision + 1);
    result.push_str(int_part);
    if precision > 0 {
        result.push('.');
        result.extend(
            fract_part
                .chars()
                .chain(std::iter::repeat('0'))
                .take(precision),
        );
    }
    result
}

/// Format a value as exactly 8 uppercase hex digits, zero-padded.
pub fn int_to_hex(value: u32) -> String {
    format!("{:08X}", value)
}

/// Parse a hex string of either case. Leading zeros are allowed; values
/// that overflow 32 bits are rejected.
pub fn hex_to_int(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    s.chars().try_fold(0u32, |acc, c| {
        let digit = c.to_digit(16)?;
        acc.checked_mul(16)?.checked_add(digit)
    })
}

/// Pack a `"min-max"` range into one integer: max in the high 16 bits, min
/// in the low 16 bits, so packed values sort by maximum first.
///
/// A lone number `n` is the range `n-n`. Bounds are swapped when given in
/// descending order; each must fit in 16 bits.
pub fn range_to_int(s: &str) -> Option<u32> {
    if !s.contains('-') {
        let n = range_bound(string_to_int(s)?)?;
        return Some((n << 16) | n);
    }

    let (min, dash) = string_to_int_until(s, 0, b'-')?;
    let max = string_to_int(&s[dash + 1..])?;
    let (mut min, mut max) = (range_bound(min)?, range_bound(max)?);
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    Some((max << 16) | min)
}

/// Inverse of [`range_to_int`], formatted high half first: `"<max>-<min>"`.
pub fn int_to_range(range: u32) -> String {
    format!("{}-{}", range >> 16, range & 0xFFFF)
}

fn range_bound(n: i32) -> Option<u32> {
    u16::try_from(n).ok().map(u32::from)
}

fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
#[path = "tests/codec_tests.rs"]
mod tests;
