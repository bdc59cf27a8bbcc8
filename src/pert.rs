// Copyright 2026 cost-distr developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! The PERT distribution.

use core::fmt;

use num_traits::Float;
use rand::Rng;
use rand_distr::{Beta, Distribution, Open01};

use crate::SampleSet;

/// The PERT distribution.
///
/// A continuous distribution over `[min, max]` parameterised by a most-likely
/// value (mode) within that range and a shape factor controlling how tightly
/// samples cluster around the mode. It is the classic three-point-estimate
/// distribution: internally a [`Beta`] with
///
/// ```text
/// alpha = 1 + shape * (mode - min) / (max - min)
/// beta  = 1 + shape * (max - mode) / (max - min)
/// ```
///
/// scaled linearly onto `[min, max]`. The mean is
/// `(min + shape * mode + max) / (shape + 2)`.
///
/// # Example
///
/// ```rust
/// use cost_distr::{Distribution, Pert};
///
/// let d = Pert::new(500.0, 800.0, 1200.0).unwrap();
/// let v: f64 = d.sample(&mut rand::thread_rng());
/// println!("{} is from a PERT distribution", v);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Pert<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    min: F,
    range: F,
    beta: Beta<F>,
}

/// Error type returned from [`Pert`] constructors and [`sample_pert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PertError {
    /// `max <= min`, or `min` or `max` is not finite.
    InvalidRange,
    /// `most_likely` is not strictly between `min` and `max`, or is NaN.
    InvalidMode,
    /// `shape <= 0`, or `shape` is not finite.
    InvalidShape,
}

impl fmt::Display for PertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PertError::InvalidRange => "requirement min < max is not met in PERT distribution",
            PertError::InvalidMode => {
                "most_likely is not strictly inside (min, max) in PERT distribution"
            }
            PertError::InvalidShape => "shape is not positive in PERT distribution",
        })
    }
}

impl std::error::Error for PertError {}

impl<F> Pert<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    /// Set up the PERT distribution with defined `min`, `most_likely` and
    /// `max`.
    ///
    /// This is equivalent to calling `Pert::new_with_shape` with
    /// `shape == 4.0`.
    #[inline]
    pub fn new(min: F, most_likely: F, max: F) -> Result<Pert<F>, PertError> {
        Pert::new_with_shape(min, most_likely, max, F::from(4.).unwrap())
    }

    /// Set up the PERT distribution with defined `min`, `most_likely`, `max`
    /// and `shape`.
    ///
    /// Requires finite `min < most_likely < max` and finite `shape > 0`; a
    /// larger `shape` concentrates samples more tightly around `most_likely`.
    pub fn new_with_shape(
        min: F,
        most_likely: F,
        max: F,
        shape: F,
    ) -> Result<Pert<F>, PertError> {
        // Negated comparisons so that NaN inputs fail the checks too.
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(PertError::InvalidRange);
        }
        if !(most_likely > min && max > most_likely) {
            return Err(PertError::InvalidMode);
        }
        if !(shape > F::zero() && shape.is_finite()) {
            return Err(PertError::InvalidShape);
        }

        let one = F::one();
        let range = max - min;
        let alpha = one + shape * (most_likely - min) / range;
        let beta_param = one + shape * (max - most_likely) / range;
        // alpha and beta_param are > 1 given the checks above.
        let beta = Beta::new(alpha, beta_param).map_err(|_| PertError::InvalidShape)?;
        Ok(Pert { min, range, beta })
    }
}

impl<F> Distribution<F> for Pert<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        self.min + self.beta.sample(rng) * self.range
    }
}

/// Draw `num_samples` values from a PERT distribution into a [`SampleSet`].
///
/// Parameters are validated before any sampling occurs (fail-fast, no partial
/// output). `num_samples == 0` yields an empty set, not an error. Draw order
/// is preserved, so two calls with identically-seeded RNGs and identical
/// parameters produce identical sets.
///
/// # Example
///
/// ```rust
/// use cost_distr::sample_pert;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(10);
/// let costs = sample_pert(500.0, 800.0, 1200.0, 1000, 4.0, &mut rng).unwrap();
/// assert_eq!(costs.len(), 1000);
/// ```
pub fn sample_pert<F, R>(
    min: F,
    most_likely: F,
    max: F,
    num_samples: usize,
    shape: F,
    rng: &mut R,
) -> Result<SampleSet<F>, PertError>
where
    F: Float,
    Open01: Distribution<F>,
    R: Rng + ?Sized,
{
    let distr = Pert::new_with_shape(min, most_likely, max, shape)?;
    Ok(SampleSet::generate(&distr, num_samples, rng))
}
