use serde::Serialize;

/// Real-valued sample requirements for a precision target. Nothing here is
/// rounded; ceilings are only taken when individuals are allocated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleTargets {
    /// Two-sided normal critical value
    pub z: f64,
    /// Diseased individuals needed for the sensitivity interval
    pub m1: f64,
    /// Non-diseased individuals needed for the specificity interval
    pub m2: f64,
    /// Prevalence at which one group meets both requirements with the
    /// smallest total, m1 / (m1 + m2)
    pub ideal_proportion: f64,
}

impl SampleTargets {
    pub fn total(&self) -> f64 {
        self.m1 + self.m2
    }
}
