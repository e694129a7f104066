//----------------------------------------
// Root lib
//----------------------------------------
//! Sample size calculations for diagnostic accuracy studies that recruit
//! from two groups with different disease prevalence. Given the precision
//! wanted for sensitivity and specificity, it works out how many people to
//! draw from each group, and how many fewer that is than drawing from the
//! better of the two groups alone.

/// This module houses the public API for computing sample targets,
/// allocations and single-source baselines
pub mod compute;
/// This module contains error types
pub mod error;
mod allocation;
mod design;
mod distribution;
mod targets;
