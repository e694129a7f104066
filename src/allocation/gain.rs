use crate::allocation::error::AllocationErr;
use crate::allocation::types::Gain;
use crate::design::types::Prevalences;
use crate::error::DtcomputeErr;

fn signed(count: u64) -> Result<i64, DtcomputeErr> {
    i64::try_from(count).map_err(|_| {
        AllocationErr::SampleTooLarge {
            size: count as f64,
        }
        .into()
    })
}

/// Compares the best single-source sample against the two-group total.
/// The result is signed and is not clamped at zero.
pub fn compute_gain(
    prevalences: &Prevalences,
    necessary_group1: Option<u64>,
    necessary_group2: Option<u64>,
    allocated_total: u64,
) -> Result<Gain, DtcomputeErr> {
    if prevalences.is_complementary_pure() {
        return Ok(Gain::Insufficient);
    }
    let best_single = match (necessary_group1, necessary_group2) {
        (Some(n1), Some(n2)) => n1.min(n2),
        (Some(n), None) | (None, Some(n)) => n,
        // Both groups pure and not complementary; rejected by validation
        (None, None) => return Ok(Gain::Insufficient),
    };
    // Both operands are in [0, i64::MAX], so the difference cannot overflow
    let gain = signed(best_single)? - signed(allocated_total)?;
    if gain < 0 {
        tracing::warn!(
            gain,
            best_single,
            allocated_total,
            "two-group allocation needs more people than the best single group"
        );
    }
    Ok(Gain::Number(gain))
}
