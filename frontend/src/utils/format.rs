// Parsing follows the browser's parseInt/parseFloat: a valid numeric prefix
// counts, trailing garbage is ignored.

pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = split_sign(s);
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturates instead of failing on overflow
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(sign * magnitude)
}

pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (sign, rest) = split_sign(s);
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in rest.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + 1;
    }
    if !seen_digit {
        return None;
    }
    let mantissa = rest[..end].trim_end_matches('.');
    let exponent = exponent_prefix(&rest[end..]);
    format!("{}{}", mantissa, exponent)
        .parse::<f64>()
        .ok()
        .map(|v| sign as f64 * v)
}

// `e`/`E`, an optional sign and at least one digit; anything shorter is ignored.
fn exponent_prefix(rest: &str) -> &str {
    let Some(after_e) = rest.strip_prefix(['e', 'E']) else {
        return "";
    };
    let signed = after_e.strip_prefix(['+', '-']).unwrap_or(after_e);
    let sign_len = after_e.len() - signed.len();
    let digits = signed.find(|c: char| !c.is_ascii_digit()).unwrap_or(signed.len());
    if digits == 0 {
        return "";
    }
    &rest[..1 + sign_len + digits]
}

fn split_sign(s: &str) -> (i64, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else {
        (1, s)
    }
}

/// Rounds half toward positive infinity, like `Math.round`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Groups the integer part in threes with commas: 56430 -> "56,430".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(round_half_up(value) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_semantics() {
        assert_eq!(parse_int_prefix("150"), Some(150));
        assert_eq!(parse_int_prefix("  42px"), Some(42));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn int_prefix_saturates_on_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn float_prefix_semantics() {
        assert_eq!(parse_float_prefix("0.15"), Some(0.15));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("2."), Some(2.0));
        assert_eq!(parse_float_prefix("1.2.3"), Some(1.2));
        assert_eq!(parse_float_prefix("-0.25kWh"), Some(-0.25));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("kWh"), None);
    }

    #[test]
    fn float_prefix_reads_exponents() {
        assert_eq!(parse_float_prefix("1e-1"), Some(0.1));
        assert_eq!(parse_float_prefix("2.5E2"), Some(250.0));
        assert_eq!(parse_float_prefix("3e+1x"), Some(30.0));
        assert_eq!(parse_float_prefix("4e"), Some(4.0));
        assert_eq!(parse_float_prefix("5e-"), Some(5.0));
        assert_eq!(parse_float_prefix("6.e1"), Some(60.0));
    }

    #[test]
    fn rounding_matches_math_round() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(26280.000000000004), 26280.0);
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(56430.0), "$56,430");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(-1500.0), "$-1,500");
    }
}
