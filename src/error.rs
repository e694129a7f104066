//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::allocation::error::AllocationErr;
pub use crate::design::error::DesignErr;
pub use crate::distribution::error::NormalDistErr;
pub use crate::targets::error::TargetsErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DtcomputeErr {
    #[error("while validating study design: {0}")]
    Design(DesignErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while computing sample targets: {0}")]
    Targets(TargetsErr),
    #[error("while allocating sample: {0}")]
    Allocation(AllocationErr),
}
