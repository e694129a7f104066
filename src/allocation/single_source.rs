use crate::allocation::error::AllocationErr;
use crate::error::DtcomputeErr;
use crate::targets::types::SampleTargets;

/// Rounds a real-valued sample size up to a whole number of people. Sizes
/// that do not fit in an i64 are rejected so later sums and gains stay exact.
pub(crate) fn to_count(size: f64) -> Result<u64, DtcomputeErr> {
    if !size.is_finite() || size >= i64::MAX as f64 {
        return Err(AllocationErr::SampleTooLarge { size }.into());
    }
    // -0.0 and tiny negatives from interpolation round up to 0
    Ok(size.ceil().max(0.) as u64)
}

/// Smallest sample from one group with prevalence `prevalence` whose expected
/// yield covers both requirements. Only meaningful for interior prevalences.
pub(crate) fn single_group_size(
    targets: &SampleTargets,
    prevalence: f64,
) -> Result<u64, DtcomputeErr> {
    let for_diseased = targets.m1 / prevalence;
    let for_non_diseased = targets.m2 / (1. - prevalence);
    to_count(for_diseased.max(for_non_diseased))
}

/// Sample size needed if the study drew only from a group with the given
/// prevalence. A pure group (prevalence exactly 0 or 1) can never supply
/// both kinds of individuals, so there is no finite answer.
pub fn necessary_single_source(
    targets: &SampleTargets,
    prevalence: f64,
) -> Result<Option<u64>, DtcomputeErr> {
    if prevalence == 0. || prevalence == 1. {
        Ok(None)
    } else {
        single_group_size(targets, prevalence).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::compute_targets::compute_targets;

    fn reference_targets() -> SampleTargets {
        compute_targets(0.99, 0.99, 0.05, 0.01, 0.01).expect("failed to compute sample targets")
    }

    #[test]
    fn pure_groups_unbounded() {
        let targets = reference_targets();
        assert_eq!(necessary_single_source(&targets, 0.), Ok(None));
        assert_eq!(necessary_single_source(&targets, 1.), Ok(None));
    }

    #[test]
    fn reference_baselines() {
        let targets = reference_targets();
        // Diseased requirement binds at low prevalence
        assert_eq!(necessary_single_source(&targets, 0.1), Ok(Some(3804)));
        // Healthy requirement binds at high prevalence
        assert_eq!(necessary_single_source(&targets, 0.65), Ok(Some(1087)));
    }

    #[test]
    fn ideal_prevalence_is_cheapest() {
        let targets = compute_targets(0.9, 0.8, 0.05, 0.05, 0.05).unwrap();
        let at_ideal = necessary_single_source(&targets, targets.ideal_proportion)
            .unwrap()
            .expect("ideal proportion should be interior");
        // At the ideal proportion the single group needs about m1 + m2
        assert!((at_ideal as f64 - targets.total()).abs() <= 1.);
        for p in [0.05, 0.2, 0.3, 0.4, 0.6, 0.9] {
            assert!(necessary_single_source(&targets, p).unwrap().unwrap() >= at_ideal);
        }
    }

    #[test]
    fn count_rounds_up() {
        assert_eq!(to_count(207.43), Ok(208));
        assert_eq!(to_count(554.0), Ok(554));
        assert_eq!(to_count(-0.0), Ok(0));
    }

    #[test]
    fn count_too_large() {
        assert_eq!(
            to_count(1e19),
            Err(AllocationErr::SampleTooLarge { size: 1e19 }.into())
        );
        assert!(to_count(i64::MAX as f64).is_err());
        assert!(to_count(f64::INFINITY).is_err());
        assert!(to_count(f64::NAN).is_err());
        // Largest double below 2^63 still fits
        assert_eq!(to_count(9.223372036854775e18), Ok(9_223_372_036_854_774_784));
    }

    #[test]
    fn baseline_too_large() {
        let targets = SampleTargets {
            z: 1.96,
            m1: 8e18,
            m2: 8e18,
            ideal_proportion: 0.5,
        };
        // 8e18 / 0.5 does not fit in an i64
        if let Err(e) = necessary_single_source(&targets, 0.5) {
            assert_eq!(
                String::from("while allocating sample: sample size 1.6e19 is too large to count"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
