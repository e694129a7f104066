use crate::design::types::{PerMeasure, PrecisionTarget, ResolvedPrecision};
use crate::design::validate::{validate_precision, validate_threshold};
use crate::error::DtcomputeErr;

/// Converts a minimum acceptable value into (expected value, half-width):
/// the interval [threshold, 1] centered on its midpoint
pub fn threshold_to_interval(threshold: f64) -> (f64, f64) {
    ((threshold + 1.) / 2., (1. - threshold) / 2.)
}

/// Reduces any of the four precision modes (shared/independent width,
/// direct/threshold derived) to a single validated set of estimates and
/// half-widths
pub fn resolve_precision(target: &PrecisionTarget) -> Result<ResolvedPrecision, DtcomputeErr> {
    let resolved = match *target {
        PrecisionTarget::Direct {
            sensitivity,
            specificity,
            half_width,
        } => ResolvedPrecision {
            sensitivity,
            specificity,
            sensitivity_half_width: half_width.sensitivity(),
            specificity_half_width: half_width.specificity(),
        },
        PrecisionTarget::Threshold(thresholds) => {
            let (sensitivity_parameter, specificity_parameter) = match thresholds {
                PerMeasure::Shared(_) => ("threshold", "threshold"),
                PerMeasure::Independent { .. } => {
                    ("sensitivity threshold", "specificity threshold")
                }
            };
            validate_threshold(sensitivity_parameter, thresholds.sensitivity())?;
            validate_threshold(specificity_parameter, thresholds.specificity())?;

            let (sensitivity, sensitivity_half_width) =
                threshold_to_interval(thresholds.sensitivity());
            let (specificity, specificity_half_width) =
                threshold_to_interval(thresholds.specificity());
            ResolvedPrecision {
                sensitivity,
                specificity,
                sensitivity_half_width,
                specificity_half_width,
            }
        }
    };
    validate_precision(&resolved)?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::error::DesignErr;

    #[test]
    fn direct_shared() {
        let resolved = resolve_precision(&PrecisionTarget::Direct {
            sensitivity: 0.99,
            specificity: 0.95,
            half_width: PerMeasure::Shared(0.01),
        })
        .expect("failed to resolve direct precision");
        assert_eq!(
            resolved,
            ResolvedPrecision {
                sensitivity: 0.99,
                specificity: 0.95,
                sensitivity_half_width: 0.01,
                specificity_half_width: 0.01,
            }
        );
    }

    #[test]
    fn direct_independent() {
        let resolved = resolve_precision(&PrecisionTarget::Direct {
            sensitivity: 0.9,
            specificity: 0.8,
            half_width: PerMeasure::Independent {
                sensitivity: 0.03,
                specificity: 0.05,
            },
        })
        .expect("failed to resolve direct precision");
        assert_eq!(resolved.sensitivity_half_width, 0.03);
        assert_eq!(resolved.specificity_half_width, 0.05);
    }

    #[test]
    fn threshold_shared() {
        let resolved = resolve_precision(&PrecisionTarget::Threshold(PerMeasure::Shared(0.9)))
            .expect("failed to resolve threshold precision");
        assert!((resolved.sensitivity - 0.95).abs() < 1e-12);
        assert!((resolved.specificity - 0.95).abs() < 1e-12);
        assert!((resolved.sensitivity_half_width - 0.05).abs() < 1e-12);
        assert!((resolved.specificity_half_width - 0.05).abs() < 1e-12);
    }

    #[test]
    fn threshold_independent() {
        let resolved = resolve_precision(&PrecisionTarget::Threshold(PerMeasure::Independent {
            sensitivity: 0.8,
            specificity: 0.6,
        }))
        .expect("failed to resolve threshold precision");
        assert!((resolved.sensitivity - 0.9).abs() < 1e-12);
        assert!((resolved.specificity - 0.8).abs() < 1e-12);
        assert!((resolved.sensitivity_half_width - 0.1).abs() < 1e-12);
        assert!((resolved.specificity_half_width - 0.2).abs() < 1e-12);
    }

    #[test]
    fn threshold_interval_reaches_threshold() {
        for t in [0.0, 0.25, 0.5, 0.9, 0.99] {
            let (estimate, half_width) = threshold_to_interval(t);
            assert!((estimate - half_width - t).abs() < 1e-12);
            assert!((estimate + half_width - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn threshold_of_one_rejected() {
        assert_eq!(
            resolve_precision(&PrecisionTarget::Threshold(PerMeasure::Independent {
                sensitivity: 0.9,
                specificity: 1.0,
            })),
            Err(DesignErr::ThresholdOutOfBounds {
                parameter: "specificity threshold",
                value: 1.0
            }
            .into())
        );
    }

    #[test]
    fn zero_half_width_rejected() {
        assert_eq!(
            resolve_precision(&PrecisionTarget::Direct {
                sensitivity: 0.9,
                specificity: 0.9,
                half_width: PerMeasure::Shared(0.0),
            }),
            Err(DesignErr::NonPositiveHalfWidth {
                parameter: "sensitivity half-width",
                value: 0.0
            }
            .into())
        );
    }
}
