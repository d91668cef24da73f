//! Monotone piecewise-cubic interpolation over tabulated points.

use frw_core::errors::{ErrorInfo, FrwError};

fn curve_error(code: &str, message: impl Into<String>) -> FrwError {
    FrwError::Data(ErrorInfo::new(code, message.into()))
}

/// Piecewise-cubic Hermite interpolant with Fritsch-Carlson slopes.
///
/// Slopes are limited so the interpolant never overshoots the tabulated
/// values between knots. Queries outside the covered range clamp to the
/// boundary values rather than extrapolating.
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneCurve {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
}

impl MonotoneCurve {
    /// Builds a curve through the given points.
    ///
    /// Requires at least two points, finite values and strictly increasing
    /// `xs`.
    pub fn from_points(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, FrwError> {
        let k = xs.len();
        if k < 2 {
            return Err(curve_error(
                "D101",
                format!("curve requires at least 2 points, got {k}"),
            ));
        }
        if ys.len() != k {
            return Err(curve_error(
                "D102",
                format!("curve has {k} x values but {} y values", ys.len()),
            ));
        }
        for i in 0..k {
            if !xs[i].is_finite() || !ys[i].is_finite() {
                return Err(curve_error(
                    "D103",
                    format!("curve point {i} is not finite (x={}, y={})", xs[i], ys[i]),
                ));
            }
        }
        for i in 1..k {
            if xs[i] <= xs[i - 1] {
                return Err(curve_error(
                    "D104",
                    format!(
                        "curve x values must be strictly increasing, but x[{}]={} >= x[{}]={}",
                        i - 1,
                        xs[i - 1],
                        i,
                        xs[i]
                    ),
                ));
            }
        }

        let slopes = fritsch_carlson_slopes(&xs, &ys);
        Ok(Self { xs, ys, slopes })
    }

    /// Smallest tabulated x value.
    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    /// Largest tabulated x value.
    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Evaluates the interpolant, clamping `x` into the covered range.
    pub fn eval(&self, x: f64) -> f64 {
        let k = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[k - 1] {
            return self.ys[k - 1];
        }

        let i = match self
            .xs
            .binary_search_by(|v| v.partial_cmp(&x).expect("finite by construction"))
        {
            Ok(idx) => idx.min(k - 2),
            Err(idx) => (idx - 1).min(k - 2),
        };

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;

        let h00 = (1.0 + 2.0 * t) * (1.0 - t) * (1.0 - t);
        let h10 = t * (1.0 - t) * (1.0 - t);
        let h01 = t * t * (3.0 - 2.0 * t);
        let h11 = t * t * (t - 1.0);

        h00 * self.ys[i]
            + h10 * h * self.slopes[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.slopes[i + 1]
    }
}

/// Hermite slopes limited by the Fritsch-Carlson criterion (alpha^2 + beta^2 <= 9).
fn fritsch_carlson_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let k = x.len();
    debug_assert!(k >= 2);

    let mut delta = Vec::with_capacity(k - 1);
    for i in 0..k - 1 {
        delta.push((y[i + 1] - y[i]) / (x[i + 1] - x[i]));
    }

    let mut m = vec![0.0; k];
    m[0] = delta[0];
    for i in 1..k - 1 {
        if delta[i - 1].signum() != delta[i].signum() {
            m[i] = 0.0;
        } else {
            m[i] = 0.5 * (delta[i - 1] + delta[i]);
        }
    }
    m[k - 1] = delta[k - 2];

    for i in 0..k - 1 {
        if delta[i].abs() < 1e-30 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
        } else {
            let alpha = m[i] / delta[i];
            let beta = m[i + 1] / delta[i];
            let phi = alpha * alpha + beta * beta;
            if phi > 9.0 {
                let tau = 3.0 / phi.sqrt();
                m[i] = tau * alpha * delta[i];
                m[i + 1] = tau * beta * delta[i];
            }
        }
    }

    m
}
