use crate::error::CvrErr;
use crate::normal::error::NormalDistErr;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Normal distribution parameterized by mean and standard deviation.
///
/// A standard deviation of zero is allowed and treated as a point mass at
/// the mean: the density is infinite there and zero elsewhere, and every
/// quantile is the mean itself. A NaN standard deviation (from non-binary
/// input) propagates NaN through every evaluation.
#[derive(Debug, Clone)]
pub struct NormalDist {
    mean: f64,
    std_dev: f64,
    inner: Option<Normal>,
}

impl NormalDist {
    pub fn new(mean: f64, std_dev: f64) -> Result<NormalDist, CvrErr> {
        if std_dev < 0.0 {
            return Err(NormalDistErr::NegativeStdDev(std_dev).into());
        }
        // statrs rejects zero and NaN parameters; those are handled here
        let inner = Normal::new(mean, std_dev).ok();
        Ok(NormalDist {
            mean,
            std_dev,
            inner,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0 && self.mean.is_finite()
    }

    pub fn pdf(&self, x: f64) -> f64 {
        match &self.inner {
            Some(normal) => normal.pdf(x),
            None if self.is_degenerate() => {
                if x == self.mean {
                    f64::INFINITY
                } else {
                    0.0
                }
            }
            None => f64::NAN,
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match &self.inner {
            Some(normal) => normal.cdf(x),
            None if self.is_degenerate() => {
                if x < self.mean {
                    0.0
                } else {
                    1.0
                }
            }
            None => f64::NAN,
        }
    }

    /// Percent-point function. `p` must lie strictly inside (0, 1).
    pub fn quantile(&self, p: f64) -> Result<f64, CvrErr> {
        if !(p > 0.0 && p < 1.0) {
            return Err(NormalDistErr::QuantileOutOfBounds(p).into());
        }
        Ok(match &self.inner {
            Some(normal) => normal.inverse_cdf(p),
            None if self.is_degenerate() => self.mean,
            None => f64::NAN,
        })
    }
}
