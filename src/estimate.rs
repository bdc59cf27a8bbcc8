// Copyright 2026 cost-distr developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! One sampling interface over the supported estimate families.

use core::fmt;

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::{Pert, PertError, SampleSet};

/// A cost estimate: one of the supported distribution families behind a
/// single [`Distribution`] implementation.
///
/// Exploratory cost models tend to try the same scenario under different
/// distribution assumptions. Making the family a value rather than a type
/// keeps those variants behind one call site.
///
/// # Example
///
/// ```rust
/// use cost_distr::CostEstimate;
///
/// let activities = CostEstimate::uniform(200.0, 600.0).unwrap();
/// let costs = activities.sample_set(1000, &mut rand::thread_rng());
/// assert!(costs.min().unwrap() >= 200.0);
/// assert!(costs.max().unwrap() <= 600.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum CostEstimate {
    /// Every value in `[min, max)` equally likely.
    Uniform(Uniform<f64>),
    /// Normally distributed around a mean. Unbounded, so only suitable where
    /// occasional out-of-range draws are acceptable.
    Normal(Normal<f64>),
    /// A three-point PERT estimate, bounded by `[min, max]`.
    Pert(Pert<f64>),
}

/// Error type returned from [`CostEstimate`] constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimateError {
    /// `max <= min`, or a bound is NaN.
    InvalidRange,
    /// `std_dev <= 0`, or `std_dev` is NaN.
    InvalidStdDev,
    /// Invalid PERT parameters.
    Pert(PertError),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::InvalidRange => {
                f.write_str("requirement min < max is not met in cost estimate")
            }
            EstimateError::InvalidStdDev => {
                f.write_str("std_dev is not positive in cost estimate")
            }
            EstimateError::Pert(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EstimateError {}

impl From<PertError> for EstimateError {
    fn from(e: PertError) -> EstimateError {
        EstimateError::Pert(e)
    }
}

impl CostEstimate {
    /// A uniform estimate over `[min, max)`.
    ///
    /// Both bounds must be finite.
    pub fn uniform(min: f64, max: f64) -> Result<CostEstimate, EstimateError> {
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(EstimateError::InvalidRange);
        }
        Ok(CostEstimate::Uniform(Uniform::new(min, max)))
    }

    /// A normal estimate with the given mean and standard deviation.
    pub fn normal(mean: f64, std_dev: f64) -> Result<CostEstimate, EstimateError> {
        if !(std_dev > 0.0) || mean.is_nan() {
            return Err(EstimateError::InvalidStdDev);
        }
        let normal = Normal::new(mean, std_dev).map_err(|_| EstimateError::InvalidStdDev)?;
        Ok(CostEstimate::Normal(normal))
    }

    /// A PERT estimate with the default shape factor of 4.
    pub fn pert(min: f64, most_likely: f64, max: f64) -> Result<CostEstimate, EstimateError> {
        Ok(CostEstimate::Pert(Pert::new(min, most_likely, max)?))
    }

    /// A PERT estimate with an explicit shape factor.
    pub fn pert_with_shape(
        min: f64,
        most_likely: f64,
        max: f64,
        shape: f64,
    ) -> Result<CostEstimate, EstimateError> {
        Ok(CostEstimate::Pert(Pert::new_with_shape(
            min,
            most_likely,
            max,
            shape,
        )?))
    }

    /// Draw `num_samples` values into a [`SampleSet`].
    pub fn sample_set<R: Rng + ?Sized>(&self, num_samples: usize, rng: &mut R) -> SampleSet<f64> {
        SampleSet::generate(self, num_samples, rng)
    }
}

impl Distribution<f64> for CostEstimate {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            CostEstimate::Uniform(d) => d.sample(rng),
            CostEstimate::Normal(d) => d.sample(rng),
            CostEstimate::Pert(d) => d.sample(rng),
        }
    }
}
