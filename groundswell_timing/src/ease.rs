// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for driven animations.

/// Cubic ease-out: fast start, decelerating into the endpoint.
///
/// Maps normalized progress `t` in `[0, 1]` to `(t - 1)³ + 1`. Inputs
/// outside the unit interval are clamped, so overshooting hosts (a frame
/// that lands past the animation's end time) settle on exactly `1.0`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let u = t - 1.0;
    u * u * u + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn out_of_range_input_clamps() {
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(2.5), 1.0);
    }

    #[test]
    fn midpoint_is_seven_eighths() {
        let got = ease_out_cubic(0.5);
        assert!((got - 0.875).abs() < 1e-12, "got {got}");
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let t = f64::from(i) / 100.0;
            let v = ease_out_cubic(t);
            assert!(v >= prev, "dipped at t={t}");
            prev = v;
        }
    }

    #[test]
    fn decelerates_toward_the_end() {
        let early = ease_out_cubic(0.2) - ease_out_cubic(0.1);
        let late = ease_out_cubic(0.9) - ease_out_cubic(0.8);
        assert!(early > late, "ease-out spends its speed early");
    }
}
