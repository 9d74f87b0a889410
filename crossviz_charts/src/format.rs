// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate formatting helpers.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a share in `[0, 1]` as a percentage with one decimal, e.g. `0.5556 -> "55.6%"`.
///
/// Exact ties round away from zero, so `1/16` renders as `"6.3%"`. Non-finite input renders as
/// `"0.0%"`.
pub fn format_percent(rate: f64) -> String {
    if !rate.is_finite() {
        return String::from("0.0%");
    }
    let pct = (rate * 1000.0).round() / 10.0;
    let pct = if pct == 0.0 { 0.0 } else { pct }; // normalize `-0.0`
    alloc::format!("{pct:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_percentages() {
        assert_eq!(format_percent(10.0 / 18.0), "55.6%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-0.0), "0.0%");
        assert_eq!(format_percent(1.0 / 16.0), "6.3%");
        assert_eq!(format_percent(3.0 / 16.0), "18.8%");
    }

    #[test]
    fn non_finite_is_zero() {
        assert_eq!(format_percent(f64::NAN), "0.0%");
        assert_eq!(format_percent(f64::INFINITY), "0.0%");
    }
}
