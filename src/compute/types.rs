//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::allocation::types::{
    Allocation, AllocationReport, AllocationStrategy, ExpectedYield, Gain, Group,
};
pub use crate::design::types::{
    PerMeasure, PrecisionTarget, Prevalences, ResolvedPrecision, StudyDesign,
};
pub use crate::targets::types::SampleTargets;
