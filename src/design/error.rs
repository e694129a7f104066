//----------------------------------------
// design errors
//----------------------------------------
use crate::error::DtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DesignErr {
    #[error("both prevalence values cannot be 0 or 1 at the same time; got {group1} and {group2}")]
    DegeneratePrevalences { group1: f64, group2: f64 },
    #[error("{parameter} should be in [0, 1]; got {value}")]
    ProbabilityOutOfBounds { parameter: &'static str, value: f64 },
    #[error("{parameter} should be a positive finite number; got {value}")]
    NonPositiveHalfWidth { parameter: &'static str, value: f64 },
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("{parameter} should be in [0, 1); got {value}")]
    ThresholdOutOfBounds { parameter: &'static str, value: f64 },
}

impl From<DesignErr> for DtcomputeErr {
    fn from(err: DesignErr) -> Self {
        DtcomputeErr::Design(err)
    }
}
