//! Display formatting for computed volumes.
//!
//! Integral values print without a decimal point; everything else prints with
//! exactly two fractional digits. Rounding is half-up on the shortest decimal
//! representation of the `f64`, so `1.005` becomes `1.01` even though its
//! binary value sits just below the midpoint. The separator is always `.`.

/// Absolute distance from the nearest integer below which a value counts as integral.
pub const DEFAULT_INTEGER_TOLERANCE: f64 = 1e-9;

/// Fractional digits used for non-integral values.
pub const FRACTION_DIGITS: usize = 2;

pub fn format_volume(value: f64) -> String {
    format_volume_with_tolerance(value, DEFAULT_INTEGER_TOLERANCE)
}

pub fn format_volume_with_tolerance(value: f64, tolerance: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    if is_integral(value, tolerance) {
        let nearest = value.round();
        if nearest == 0.0 {
            // also catches -0.0
            return "0".to_string();
        }
        return format!("{:.0}", nearest);
    }

    // f64 Display never uses exponent notation
    round_half_up(&value.to_string(), FRACTION_DIGITS)
}

/// Whether `value` is within `tolerance` of an integer. A tolerance of zero
/// is the exact `value % 1.0 == 0.0` check.
pub fn is_integral(value: f64, tolerance: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    if tolerance <= 0.0 {
        return value % 1.0 == 0.0;
    }
    (value - value.round()).abs() <= tolerance
}

fn round_half_up(repr: &str, places: usize) -> String {
    let (negative, unsigned) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let kept_fraction = frac_part
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(places);
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(kept_fraction)
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(places)
        .is_some_and(|&next| next >= b'5');
    if round_up {
        increment(&mut digits);
    }

    let split = digits.len() - places;
    let to_text = |ds: &[u8]| ds.iter().map(|&d| char::from(b'0' + d)).collect::<String>();
    let is_zero = digits.iter().all(|&d| d == 0);
    let sign = if negative && !is_zero { "-" } else { "" };

    format!("{}{}.{}", sign, to_text(&digits[..split]), to_text(&digits[split..]))
}

fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
