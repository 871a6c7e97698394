//! Pearson correlation with significance testing and Fisher-z intervals.

use super::beta::student_t_two_sided;

/// Normal quantile for a 95% two-sided interval.
const Z_95: f64 = 1.96;

/// Pearson correlation coefficient between two equal-length slices.
///
/// Returns NaN if the slices differ in length, are shorter than 2, or
/// either side has zero variance (correlation undefined for a constant
/// series). The result is clamped to [-1, 1] against rounding drift.
pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

/// Pearson coefficient with a two-sided p-value.
///
/// The p-value comes from the exact t-distribution with n-2 degrees of
/// freedom: t = r * sqrt((n-2) / (1 - r^2)). Perfectly correlated input
/// (|r| = 1) yields p = 0. Samples with n < 3 have no degrees of freedom
/// to test, so p is fixed at 1.0.
pub fn pearson_test(x: &[f64], y: &[f64]) -> (f64, f64) {
    let r = pearson_r(x, y);
    if r.is_nan() {
        return (f64::NAN, f64::NAN);
    }
    let n = x.len();
    if n < 3 {
        return (r, 1.0);
    }
    if (r.abs() - 1.0).abs() < f64::EPSILON {
        return (r, 0.0);
    }
    let df = (n - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    (r, student_t_two_sided(t, df))
}

/// 95% confidence interval for a correlation via the Fisher z-transform.
///
/// se = 1/sqrt(n-3); interval = tanh(atanh(r) -/+ 1.96*se). Degrades to
/// (0, 0) when n <= 3, where the transform's standard error is undefined.
pub fn fisher_interval(r: f64, n: usize) -> (f64, f64) {
    if n <= 3 || r.is_nan() {
        return (0.0, 0.0);
    }
    let se = 1.0 / ((n - 3) as f64).sqrt();
    let z = r.clamp(-1.0, 1.0).atanh();
    ((z - Z_95 * se).tanh(), (z + Z_95 * se).tanh())
}
