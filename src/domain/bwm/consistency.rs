//! Consistency ratio for BWM comparison sets.

/// Consistency index by maximum comparison value (index 0 is unused).
const CONSISTENCY_INDEX: [f64; 10] = [0.0, 0.00, 0.44, 1.00, 1.63, 2.30, 3.00, 3.73, 4.47, 5.23];

/// Default acceptance threshold for the consistency ratio.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Consistency index for the largest comparison value. Values outside the
/// 1..=9 scale use the index of 9.
pub fn consistency_index(max_comparison: u8) -> f64 {
    match max_comparison {
        1..=9 => CONSISTENCY_INDEX[max_comparison as usize],
        _ => CONSISTENCY_INDEX[9],
    }
}

/// `CR = ξ / CI`. A set whose largest value is 1 is perfectly consistent.
pub fn consistency_ratio(ksi: f64, max_comparison: u8) -> f64 {
    let ci = consistency_index(max_comparison);
    if ci <= 0.0 {
        0.0
    } else {
        ksi / ci
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
