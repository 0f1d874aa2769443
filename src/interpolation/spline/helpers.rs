use crate::interpolation::errors::InterpolationError;


/// Copies of `(x, y)` reordered by increasing `x`.
pub(crate) fn sorted_points(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&i, &j| x[i].total_cmp(&x[j]));
    order.iter().map(|&i| (x[i], y[i])).unzip()
}


/// Spacings between adjacent knots
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Index `i` of the interval `[x_i, x_{i+1}]` holding `xq`; the last
/// interval also owns the right end point.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}


/// Per-interval `b_i`, `d_i` of `a_i + b_i t + c_i t² + d_i t³` given the
/// second-derivative coefficients `c` (`a_i` is `y[i]`).
pub(crate) fn cubic_coeffs(
    h: &[f64],
    y: &[f64],
    c: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), InterpolationError> {
    let m = h.len();
    let mut b = Vec::with_capacity(m);
    let mut d = Vec::with_capacity(m);

    for i in 0..m {
        b.push((y[i + 1] - y[i]) / h[i] - h[i] * (2.0 * c[i] + c[i + 1]) / 3.0);
        d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
    }
    if b.iter().chain(&d).any(|v| !v.is_finite()) {
        return Err(InterpolationError::SingularSpline);
    }

    Ok((b, d))
}
