//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::allocation::compute_allocation::{
    allocation_report, compute_allocation, compute_design,
};
pub use crate::allocation::single_source::necessary_single_source;
pub use crate::design::resolve::{resolve_precision, threshold_to_interval};
pub use crate::distribution::std_normal::two_sided_critical_value;
pub use crate::targets::compute_targets::compute_targets;
