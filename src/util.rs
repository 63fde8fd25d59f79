// Utility helpers for parsing and basic statistics.
//
// CSV cells arrive as loose strings; everything here turns them into typed
// values or `None` so the loader can decide how to fail.
use chrono::Month;
use num_format::{Locale, ToFormattedString};
use once_cell::sync::Lazy;

/// The twelve months in calendar order, January first.
pub static CALENDAR: Lazy<Vec<Month>> = Lazy::new(|| {
    std::iter::successors(Some(Month::January), |m| Some(m.succ()))
        .take(12)
        .collect()
});

/// Parse a string-like value into `f64`, tolerating whitespace and
/// thousands separators (`"1,250.50"`). Exponent notation (`1e3`) is fine;
/// `NaN` and infinities are rejected so they never sneak into the sums.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    let v = s.replace(',', "").parse::<f64>().ok()?;
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}

pub fn parse_i32_safe(s: Option<&str>) -> Option<i32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i32>().ok()
}

/// Full English month name or three-letter abbreviation, any case.
pub fn parse_month_safe(s: Option<&str>) -> Option<Month> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<Month>().ok()
}

pub fn non_empty_label(s: Option<String>) -> Option<String> {
    let s = s?.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

pub fn mean(v: &[f64]) -> f64 {
    // Returns 0 for an empty slice to avoid NaNs.
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus thousands separators, e.g. `1,234,567.89`.
    let neg = n.is_sign_negative() && n != 0.0;
    let abs_n = n.abs();
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
