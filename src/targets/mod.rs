//----------------------------------------
// targets mod
//----------------------------------------
pub mod compute_targets;
pub mod error;
pub mod types;
