//! Number formatting for dashboard text
//!
//! Halves round away from zero on the exact binary value, the way the web
//! dashboard's `toFixed` and `Math.round` do. Rust's `{:.1}` rounds them to
//! even instead, so user-facing figures go through [`fixed`].

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// A number printed with exactly `decimals` fraction digits
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    value: f64,
    decimals: u32,
}

/// Wrap `value` for display with `decimals` fraction digits
pub fn fixed(value: f64, decimals: u32) -> Fixed {
    Fixed { value, decimals }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.decimals as usize;
        match Decimal::from_f64_retain(self.value) {
            Some(exact) => {
                let rounded = exact
                    .round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
                write!(f, "{:.*}", precision, rounded)
            }
            // NaN, infinities and values beyond the decimal range
            None => write!(f, "{:.*}", precision, self.value),
        }
    }
}

/// Nearest integer, halves toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    if value - value.floor() == 0.5 {
        value.ceil()
    } else {
        value.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(fixed(22.25, 1).to_string(), "22.3");
        assert_eq!(fixed(44.5, 0).to_string(), "45");
        assert_eq!(fixed(2.5, 0).to_string(), "3");
        assert_eq!(fixed(-22.25, 1).to_string(), "-22.3");
    }

    #[test]
    fn test_non_ties_follow_binary_value() {
        // 0.15 is stored just below the half
        assert_eq!(fixed(0.15, 1).to_string(), "0.1");
        assert_eq!(fixed(22.24, 1).to_string(), "22.2");
        assert_eq!(fixed(29.96, 1).to_string(), "30.0");
    }

    #[test]
    fn test_pads_fraction_digits() {
        assert_eq!(fixed(22.0, 1).to_string(), "22.0");
        assert_eq!(fixed(55.0, 0).to_string(), "55");
        assert_eq!(format!("**{}°C**", fixed(31.4, 1)), "**31.4°C**");
    }

    #[test]
    fn test_non_finite_values_still_print() {
        assert_eq!(fixed(f64::NAN, 1).to_string(), "NaN");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-24.5), -24.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(-2.4), -2.0);
        assert_eq!(round_half_up(7.0), 7.0);
    }
}
