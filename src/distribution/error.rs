//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::DtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("alpha ({0:e}) is too small for its two-sided critical value to be computed")]
    AlphaTooSmall(f64),
    #[error("failed to construct standard normal: {0}")]
    Construction(String),
}

impl From<NormalDistErr> for DtcomputeErr {
    fn from(err: NormalDistErr) -> Self {
        DtcomputeErr::NormalDist(err)
    }
}
