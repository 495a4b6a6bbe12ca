//! Curve-derived risk metrics.
//! All functions are pure -- they take the sampled curve and return values.

use crate::payoff::CurvePoint;

/// Largest net payoff on the curve.
/// Returns `f64::NEG_INFINITY` for an empty curve; the engine always
/// samples at least one point.
pub fn max_profit(curve: &[CurvePoint]) -> f64 {
    curve.iter().fold(f64::NEG_INFINITY, |acc, p| if p.y > acc { p.y } else { acc })
}

/// Smallest net payoff on the curve, whatever its sign.
/// Returns `f64::INFINITY` for an empty curve.
pub fn max_loss(curve: &[CurvePoint]) -> f64 {
    curve.iter().fold(f64::INFINITY, |acc, p| if p.y < acc { p.y } else { acc })
}

/// Prices at which the net payoff flips strictly between negative and
/// positive across two adjacent samples. The later sample's price is
/// reported; nothing is interpolated. A sample sitting exactly on zero
/// breaks the flip on both sides, so it is never reported.
pub fn break_even_points(curve: &[CurvePoint]) -> Vec<f64> {
    curve
        .windows(2)
        .filter(|w| {
            let (prev, cur) = (w[0].y, w[1].y);
            (prev < 0.0 && cur > 0.0) || (prev > 0.0 && cur < 0.0)
        })
        .map(|w| w[1].x)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(ys: &[f64]) -> Vec<CurvePoint> {
        ys.iter()
            .enumerate()
            .map(|(i, &y)| CurvePoint { x: i as f64, y })
            .collect()
    }

    #[test]
    fn test_extrema() {
        let c = curve(&[-3.0, -1.0, 2.5, 7.0, 4.0]);
        assert_eq!(max_profit(&c), 7.0);
        assert_eq!(max_loss(&c), -3.0);
    }

    #[test]
    fn test_extrema_all_positive() {
        let c = curve(&[5.0, 2.0, 9.0]);
        assert_eq!(max_loss(&c), 2.0);
    }

    #[test]
    fn test_single_point() {
        let c = curve(&[1.5]);
        assert_eq!(max_profit(&c), 1.5);
        assert_eq!(max_loss(&c), 1.5);
        assert!(break_even_points(&c).is_empty());
    }

    #[test]
    fn test_strict_sign_flips_both_directions() {
        let c = curve(&[-2.0, -0.5, 0.5, 3.0, -1.0]);
        assert_eq!(break_even_points(&c), vec![2.0, 4.0]);
    }

    #[test]
    fn test_exact_zero_is_not_a_crossing() {
        let c = curve(&[-1.0, 0.0, 1.0, 0.0, -1.0]);
        assert!(break_even_points(&c).is_empty());
    }

    #[test]
    fn test_flat_zero_curve() {
        let c = curve(&[0.0; 10]);
        assert_eq!(max_profit(&c), 0.0);
        assert_eq!(max_loss(&c), 0.0);
        assert!(break_even_points(&c).is_empty());
    }
}
