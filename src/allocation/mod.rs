//----------------------------------------
// allocation mod
//----------------------------------------
pub mod compute_allocation;
pub mod error;
pub mod gain;
pub mod single_source;
pub mod types;
