use crate::allocation::error::AllocationErr;
use crate::allocation::gain::compute_gain;
use crate::allocation::single_source::{necessary_single_source, single_group_size, to_count};
use crate::allocation::types::{Allocation, AllocationReport, AllocationStrategy, Group};
use crate::design::resolve::resolve_precision;
use crate::design::types::{Prevalences, StudyDesign};
use crate::design::validate::validate_prevalences;
use crate::error::DtcomputeErr;
use crate::targets::compute_targets::compute_targets;
use crate::targets::types::SampleTargets;

/// Splits the combined target between the groups when the ideal proportion
/// lies between their prevalences, otherwise draws everything from the group
/// whose prevalence is closer to it. Returns (n1, n2, strategy).
fn allocate(
    targets: &SampleTargets,
    prevalences: &Prevalences,
) -> Result<(u64, u64, AllocationStrategy), DtcomputeErr> {
    let ideal = targets.ideal_proportion;
    let Prevalences {
        group1: p1,
        group2: p2,
    } = *prevalences;

    //----------------------------------------
    // Ideal proportion reachable by mixing the two groups
    //----------------------------------------
    if (p1 <= ideal && ideal <= p2) || (p2 <= ideal && ideal <= p1) {
        // Position of the ideal proportion between p2 (q = 0) and p1 (q = 1)
        let q = if p1 != p2 { (p2 - ideal) / (p2 - p1) } else { 0.5 };
        let total = targets.total();
        let n1 = to_count(total * q)?;
        let n2 = to_count(total * (1. - q))?;
        return Ok((n1, n2, AllocationStrategy::Split { q }));
    }

    //----------------------------------------
    // Ideal proportion outside both; use the closer group alone
    //----------------------------------------
    // Ties go to group 2
    let (group, prevalence) = if (p1 - ideal).abs() < (p2 - ideal).abs() {
        (Group::One, p1)
    } else {
        (Group::Two, p2)
    };
    if prevalence == 0. || prevalence == 1. {
        return Err(AllocationErr::PureGroupSelected { group, prevalence }.into());
    }
    let n = single_group_size(targets, prevalence)?;
    let strategy = AllocationStrategy::SingleGroup(group);
    match group {
        Group::One => Ok((n, 0, strategy)),
        Group::Two => Ok((0, n, strategy)),
    }
}

/// Allocates individuals to the two groups for already computed sample
/// targets and reports the single-source baselines and gain alongside
pub fn allocation_report(
    targets: &SampleTargets,
    prevalences: &Prevalences,
) -> Result<AllocationReport, DtcomputeErr> {
    validate_prevalences(prevalences)?;

    let (people_from_group1, people_from_group2, strategy) = allocate(targets, prevalences)?;
    tracing::debug!(
        ?strategy,
        people_from_group1,
        people_from_group2,
        "allocated sample"
    );

    let necessary_group1 = necessary_single_source(targets, prevalences.group1)?;
    let necessary_group2 = necessary_single_source(targets, prevalences.group2)?;
    tracing::debug!(
        ?necessary_group1,
        ?necessary_group2,
        "computed single-source baselines"
    );

    let allocated_total = people_from_group1
        .checked_add(people_from_group2)
        .ok_or(AllocationErr::SampleTooLarge {
            size: people_from_group1 as f64 + people_from_group2 as f64,
        })?;
    let gain = compute_gain(
        prevalences,
        necessary_group1,
        necessary_group2,
        allocated_total,
    )?;
    let allocation = Allocation {
        people_from_group1,
        people_from_group2,
        gain,
    };

    Ok(AllocationReport {
        targets: *targets,
        prevalences: *prevalences,
        strategy,
        necessary_group1,
        necessary_group2,
        allocation,
        expected_yield: allocation.expected_yield(prevalences),
    })
}

/// Number of people to draw from each sampling group, and the gain over the
/// best single group, for the given precision targets
pub fn compute_allocation(
    sensitivity: f64,
    specificity: f64,
    alpha: f64,
    sensitivity_half_width: f64,
    specificity_half_width: f64,
    prevalence_group1: f64,
    prevalence_group2: f64,
) -> Result<Allocation, DtcomputeErr> {
    let prevalences = Prevalences::new(prevalence_group1, prevalence_group2);
    let targets = compute_targets(
        sensitivity,
        specificity,
        alpha,
        sensitivity_half_width,
        specificity_half_width,
    )?;
    Ok(allocation_report(&targets, &prevalences)?.allocation)
}

/// Resolves the precision mode of a study design and computes the full
/// allocation report for it
pub fn compute_design(design: &StudyDesign) -> Result<AllocationReport, DtcomputeErr> {
    let precision = resolve_precision(&design.precision)?;
    let targets = compute_targets(
        precision.sensitivity,
        precision.specificity,
        design.alpha,
        precision.sensitivity_half_width,
        precision.specificity_half_width,
    )?;
    allocation_report(&targets, &design.prevalences)
}
