//----------------------------------------
// design mod types
//----------------------------------------
use serde::Serialize;

/// A value given either once for both measures, or separately for
/// sensitivity and specificity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerMeasure {
    Shared(f64),
    Independent { sensitivity: f64, specificity: f64 },
}

impl PerMeasure {
    pub fn sensitivity(&self) -> f64 {
        match *self {
            PerMeasure::Shared(v) => v,
            PerMeasure::Independent { sensitivity, .. } => sensitivity,
        }
    }

    pub fn specificity(&self) -> f64 {
        match *self {
            PerMeasure::Shared(v) => v,
            PerMeasure::Independent { specificity, .. } => specificity,
        }
    }
}

/// How the precision requirement is stated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrecisionTarget {
    /// Expected sensitivity/specificity and the desired interval half-width(s)
    Direct {
        sensitivity: f64,
        specificity: f64,
        half_width: PerMeasure,
    },
    /// Minimum acceptable value(s); the interval is centered halfway between
    /// the threshold and 1 and reaches down to the threshold
    Threshold(PerMeasure),
}

/// Precision requirement reduced to the four numbers the sample targets use
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPrecision {
    pub sensitivity: f64,
    pub specificity: f64,
    pub sensitivity_half_width: f64,
    pub specificity_half_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prevalences {
    pub group1: f64,
    pub group2: f64,
}

impl Prevalences {
    pub fn new(group1: f64, group2: f64) -> Self {
        Prevalences { group1, group2 }
    }

    /// One group has no diseased individuals and the other no healthy ones
    pub fn is_complementary_pure(&self) -> bool {
        (self.group1 == 0. && self.group2 == 1.) || (self.group1 == 1. && self.group2 == 0.)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyDesign {
    pub precision: PrecisionTarget,
    pub alpha: f64,
    pub prevalences: Prevalences,
}
