//! Unit cubic bezier easing between two keyframes.
//!
//! The curve runs from (0, 0) to (1, 1) with two control points taken from the
//! keyframe handles. Given a linear progression `x`, `solve` finds the curve
//! parameter with that x and returns the matching y.

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl UnitBezier {
    pub fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        // Polynomial coefficients with implicit end points (0,0) and (1,1).
        let cx = 3.0 * p1x;
        let bx = 3.0 * (p2x - p1x) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * p1y;
        let by = 3.0 * (p2y - p1y) - cy;
        let ay = 1.0 - cy - by;

        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Curve parameter whose x equals `x`. Newton first, bisection as fallback.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = self.sample_x(t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = self.sample_dx(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let mut low = 0.0;
        let mut high = 1.0;
        t = x.clamp(low, high);
        for _ in 0..BISECTION_ITERATIONS {
            let sample = self.sample_x(t);
            if (sample - x).abs() < EPSILON {
                break;
            }
            if x > sample {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) * 0.5;
        }
        t
    }

    /// Eased progression for a linear progression `x` in [0, 1].
    pub fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        let curve = UnitBezier::new(0.5, 0.0, 0.5, 1.0);
        assert_eq!(curve.solve(0.0), 0.0);
        assert_eq!(curve.solve(1.0), 1.0);
        assert_eq!(curve.solve(-0.3), 0.0);
        assert_eq!(curve.solve(1.7), 1.0);
    }

    #[test]
    fn test_linear_handles_give_identity() {
        let curve = UnitBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for step in 1..10 {
            let x = step as f64 / 10.0;
            assert!((curve.solve(x) - x).abs() < 1e-5, "x = {x}");
        }
    }

    #[test]
    fn test_symmetric_ease_passes_through_midpoint() {
        let curve = UnitBezier::new(0.5, 0.0, 0.5, 1.0);
        assert!((curve.solve(0.5) - 0.5).abs() < 1e-5);

        // Ease in-out: slow at the start, fast in the middle.
        assert!(curve.solve(0.1) < 0.1);
        assert!(curve.solve(0.9) > 0.9);
    }

    #[test]
    fn test_monotonic_for_monotonic_curve() {
        let curve = UnitBezier::new(0.42, 0.0, 0.58, 1.0);
        let mut previous = 0.0;
        for step in 0..=100 {
            let value = curve.solve(step as f64 / 100.0);
            assert!(value + 1e-9 >= previous);
            previous = value;
        }
    }
}
