// File: crates/scatter-core/src/format.rs
// Summary: Number formatting for tooltips (percent, grouped) and tick labels (fixed, grouped).

/// Raw value followed by `%`, e.g. `18.7%`.
pub fn format_percent(v: f64) -> String {
    format!("{v}%")
}

/// English-locale number: thousands separators, at most three decimals,
/// trailing zeros dropped. `43200` becomes `43,200`.
pub fn format_grouped(v: f64) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }
    let fixed = format!("{:.3}", v.abs());
    let trimmed = match fixed.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() { int.to_string() } else { format!("{int}.{frac}") }
        }
        None => fixed,
    };
    with_sign(v, &trimmed)
}

/// Fixed `decimals` places with thousands separators; tick label format.
pub fn format_fixed_grouped(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }
    let fixed = format!("{:.*}", decimals, v.abs());
    with_sign(v, &fixed)
}

fn with_sign(v: f64, unsigned: &str) -> String {
    let (int, frac) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut out = String::with_capacity(unsigned.len() + int.len() / 3 + 1);
    let is_zero = unsigned.bytes().all(|b| b == b'0' || b == b'.');
    if v < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int));
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn non_finite(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_keeps_raw_digits() {
        assert_eq!(format_percent(18.7), "18.7%");
        assert_eq!(format_percent(21.0), "21%");
    }

    #[test]
    fn grouped_like_locale_string() {
        assert_eq!(format_grouped(43200.0), "43,200");
        assert_eq!(format_grouped(38.5), "38.5");
        assert_eq!(format_grouped(1234.5678), "1,234.568");
        assert_eq!(format_grouped(-1_234_567.0), "-1,234,567");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(f64::NAN), "NaN");
    }

    #[test]
    fn fixed_for_ticks() {
        assert_eq!(format_fixed_grouped(40_000.0, 0), "40,000");
        assert_eq!(format_fixed_grouped(12.5, 1), "12.5");
        assert_eq!(format_fixed_grouped(999.0, 0), "999");
    }
}
