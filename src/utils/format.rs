//! Display formatting for indicator values
//!
//! Large values are abbreviated with `K`, `M` and `B` suffixes and one decimal.
//! Non-finite input formats as zero.

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

fn abbreviate(value: f64) -> Option<String> {
    let abs = value.abs();
    if abs >= BILLION {
        Some(format!("{:.1}B", value / BILLION))
    } else if abs >= MILLION {
        Some(format!("{:.1}M", value / MILLION))
    } else if abs >= THOUSAND {
        Some(format!("{:.1}K", value / THOUSAND))
    } else {
        None
    }
}

// Half-up rounding so -2.5 becomes -2
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Format a count, e.g. `12707.0` as `"12.7K"`
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    abbreviate(value).unwrap_or_else(|| round_half_up(value).to_string())
}

/// Format an amount in reais, e.g. `96201.42` as `"R$ 96.2K"`
#[must_use]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "R$ 0".to_string();
    }
    if let Some(short) = abbreviate(value) {
        return format!("R$ {short}");
    }

    let rounded = round_half_up(value);
    if rounded < 0 {
        format!("-R$ {}", rounded.unsigned_abs())
    } else {
        format!("R$ {rounded}")
    }
}

/// Format a ratio as a percentage, e.g. `0.604` as `"60.4%"`
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    format!("{:.1}%", value * 100.0)
}
