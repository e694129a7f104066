use crate::distribution::error::NormalDistErr;
use crate::error::DtcomputeErr;
use statrs::distribution::{ContinuousCDF, Normal};

fn std_normal() -> Result<Normal, DtcomputeErr> {
    Normal::new(0.0, 1.0).map_err(|e| NormalDistErr::Construction(e.to_string()).into())
}

/// Quantile of the standard normal distribution. The endpoints 0 and 1 map
/// to infinite values, so they are rejected along with anything outside.
pub fn std_normal_quantile(p: f64) -> Result<f64, DtcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(std_normal()?.inverse_cdf(p))
}

/// Two-sided critical value for significance level alpha, i.e. the quantile
/// at 1 - alpha / 2. Taken from the lower tail so that small alphas do not
/// round 1 - alpha / 2 up to 1.
pub fn two_sided_critical_value(alpha: f64) -> Result<f64, DtcomputeErr> {
    let tail = alpha / 2.;
    if tail == 0. && alpha > 0. {
        return Err(NormalDistErr::AlphaTooSmall(alpha).into());
    }
    Ok(-std_normal_quantile(tail)?)
}
