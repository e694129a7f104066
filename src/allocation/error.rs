//----------------------------------------
// allocation errors
//----------------------------------------
use crate::allocation::types::Group;
use crate::error::DtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AllocationErr {
    #[error(
        "prevalence in {group} is {prevalence}; a single group needs both diseased and \
        healthy individuals"
    )]
    PureGroupSelected { group: Group, prevalence: f64 },
    #[error("sample size {size:e} is too large to count")]
    SampleTooLarge { size: f64 },
}

impl From<AllocationErr> for DtcomputeErr {
    fn from(err: AllocationErr) -> Self {
        DtcomputeErr::Allocation(err)
    }
}
