use crate::design::error::DesignErr;
use crate::design::types::{Prevalences, ResolvedPrecision};
use crate::error::DtcomputeErr;

// NaN fails every comparison, so each check is written to reject it

pub fn validate_probability(parameter: &'static str, value: f64) -> Result<(), DtcomputeErr> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DesignErr::ProbabilityOutOfBounds { parameter, value }.into());
    }
    Ok(())
}

pub fn validate_half_width(parameter: &'static str, value: f64) -> Result<(), DtcomputeErr> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(DesignErr::NonPositiveHalfWidth { parameter, value }.into());
    }
    Ok(())
}

pub fn validate_alpha(alpha: f64) -> Result<(), DtcomputeErr> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(DesignErr::BadAlpha(alpha).into());
    }
    Ok(())
}

pub fn validate_threshold(parameter: &'static str, value: f64) -> Result<(), DtcomputeErr> {
    if !(0.0..1.0).contains(&value) {
        return Err(DesignErr::ThresholdOutOfBounds { parameter, value }.into());
    }
    Ok(())
}

/// Each prevalence must be a probability, and the pair must contain at
/// least one diseased and one healthy individual between them
pub fn validate_prevalences(prevalences: &Prevalences) -> Result<(), DtcomputeErr> {
    validate_probability("prevalence in group 1", prevalences.group1)?;
    validate_probability("prevalence in group 2", prevalences.group2)?;
    let Prevalences { group1, group2 } = *prevalences;
    if (group1 == 0. && group2 == 0.) || (group1 == 1. && group2 == 1.) {
        return Err(DesignErr::DegeneratePrevalences { group1, group2 }.into());
    }
    Ok(())
}

pub fn validate_precision(precision: &ResolvedPrecision) -> Result<(), DtcomputeErr> {
    validate_probability("sensitivity", precision.sensitivity)?;
    validate_probability("specificity", precision.specificity)?;
    validate_half_width("sensitivity half-width", precision.sensitivity_half_width)?;
    validate_half_width("specificity half-width", precision.specificity_half_width)?;
    Ok(())
}
