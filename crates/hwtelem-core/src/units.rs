//! Unit conversion and number formatting.

/// Bytes in one binary gigabyte (1024³).
pub const BYTES_PER_GIB: u64 = 1 << 30;

/// Round `value` to `decimals` places, half away from zero.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Convert bytes to binary gigabytes, rounded to 2 decimals.
#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_gigabytes(bytes: u64) -> f64 {
    round_to(bytes as f64 / BYTES_PER_GIB as f64, 2)
}

/// Render a byte count as `"<n.nn> GB"`.
pub fn format_gigabytes(bytes: u64) -> String {
    format!("{:.2} GB", bytes_to_gigabytes(bytes))
}

/// `part / whole * 100`, clamped to `[0, 100]`. A zero `whole` yields 0.
#[allow(clippy::cast_precision_loss)]
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

/// Render a percentage with one decimal place, e.g. `"42.5%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", round_to(value, 1))
}
