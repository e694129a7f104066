//----------------------------------------
// allocation mod types
//----------------------------------------
use std::fmt;

use serde::Serialize;

use crate::design::types::Prevalences;
use crate::targets::types::SampleTargets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    One,
    Two,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::One => write!(f, "group 1"),
            Group::Two => write!(f, "group 2"),
        }
    }
}

/// Sample size reduction from drawing on both groups instead of the better
/// single group. Negative when the split does worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Gain {
    Number(i64),
    /// One group is entirely diseased and the other entirely healthy, so no
    /// single source can be compared against
    Insufficient,
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gain::Number(n) => write!(f, "{n}"),
            Gain::Insufficient => write!(f, "1 source is not enough"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// Ideal proportion lies between the prevalences; q is the share of the
    /// combined target drawn from group 1
    Split { q: f64 },
    /// Ideal proportion lies outside both prevalences; everything comes from
    /// the closer group
    SingleGroup(Group),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub people_from_group1: u64,
    pub people_from_group2: u64,
    pub gain: Gain,
}

/// Expected number of diseased and non-diseased individuals in a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpectedYield {
    pub diseased: f64,
    pub non_diseased: f64,
}

impl Allocation {
    pub fn total(&self) -> u64 {
        self.people_from_group1 + self.people_from_group2
    }

    pub fn expected_yield(&self, prevalences: &Prevalences) -> ExpectedYield {
        let n1 = self.people_from_group1 as f64;
        let n2 = self.people_from_group2 as f64;
        ExpectedYield {
            diseased: n1 * prevalences.group1 + n2 * prevalences.group2,
            non_diseased: n1 * (1. - prevalences.group1) + n2 * (1. - prevalences.group2),
        }
    }
}

/// Allocation together with everything computed on the way to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationReport {
    pub targets: SampleTargets,
    pub prevalences: Prevalences,
    pub strategy: AllocationStrategy,
    /// Single-group sample sizes; None when the group is pure (prevalence 0
    /// or 1) and no finite sample from it suffices
    pub necessary_group1: Option<u64>,
    pub necessary_group2: Option<u64>,
    pub allocation: Allocation,
    pub expected_yield: ExpectedYield,
}
