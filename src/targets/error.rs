//----------------------------------------
// targets errors
//----------------------------------------
use crate::error::DtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TargetsErr {
    #[error(
        "sensitivity ({sensitivity}) and specificity ({specificity}) both have zero \
        variance, so the ideal proportion is undefined"
    )]
    NoVariance { sensitivity: f64, specificity: f64 },
    #[error("{parameter} ({half_width:e}) is too small; the required count is not finite")]
    NonFiniteTarget {
        parameter: &'static str,
        half_width: f64,
    },
}

impl From<TargetsErr> for DtcomputeErr {
    fn from(err: TargetsErr) -> Self {
        DtcomputeErr::Targets(err)
    }
}
