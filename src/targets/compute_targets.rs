use crate::design::types::ResolvedPrecision;
use crate::design::validate::{validate_alpha, validate_precision};
use crate::distribution::std_normal::two_sided_critical_value;
use crate::error::DtcomputeErr;
use crate::targets::error::TargetsErr;
use crate::targets::types::SampleTargets;

/// Number of individuals needed so that a Wald interval for a proportion
/// near `estimate` has half-width `half_width`
fn required_count(z: f64, estimate: f64, half_width: f64) -> f64 {
    z * z * estimate * (1. - estimate) / (half_width * half_width)
}

/// Computes the critical value, the diseased (m1) and non-diseased (m2)
/// requirements, and the ideal single-group prevalence
pub fn compute_targets(
    sensitivity: f64,
    specificity: f64,
    alpha: f64,
    sensitivity_half_width: f64,
    specificity_half_width: f64,
) -> Result<SampleTargets, DtcomputeErr> {
    validate_alpha(alpha)?;
    validate_precision(&ResolvedPrecision {
        sensitivity,
        specificity,
        sensitivity_half_width,
        specificity_half_width,
    })?;

    let z = two_sided_critical_value(alpha)?;
    let m1 = required_count(z, sensitivity, sensitivity_half_width);
    let m2 = required_count(z, specificity, specificity_half_width);
    tracing::debug!(z, m1, m2, "computed sample targets");

    // A squared half-width can underflow to zero
    if !m1.is_finite() {
        return Err(TargetsErr::NonFiniteTarget {
            parameter: "sensitivity half-width",
            half_width: sensitivity_half_width,
        }
        .into());
    }
    if !m2.is_finite() {
        return Err(TargetsErr::NonFiniteTarget {
            parameter: "specificity half-width",
            half_width: specificity_half_width,
        }
        .into());
    }

    // m1 + m2 == 0 gives 0 / 0
    let ideal_proportion = m1 / (m1 + m2);
    if !ideal_proportion.is_finite() {
        return Err(TargetsErr::NoVariance {
            sensitivity,
            specificity,
        }
        .into());
    }
    tracing::debug!(ideal_proportion, "computed ideal proportion");

    Ok(SampleTargets {
        z,
        m1,
        m2,
        ideal_proportion,
    })
}
