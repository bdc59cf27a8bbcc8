// Copyright 2026 cost-distr developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Ordered batches of samples and their summary statistics.

use core::fmt;
use core::ops::Index;
use core::slice;

use num_traits::Float;
use rand::Rng;
use rand_distr::Distribution;

/// An ordered, fixed-length batch of samples from one sampling call.
///
/// A `SampleSet` is immutable once produced and owned solely by its caller;
/// it carries no identity beyond the call that created it. Sets of equal
/// length can be combined element-wise, which is how independent cost
/// components add up into a total-cost distribution.
///
/// # Example
///
/// ```rust
/// use cost_distr::{Pert, SampleSet};
///
/// let d = Pert::new(500.0, 800.0, 1200.0).unwrap();
/// let costs = SampleSet::generate(&d, 1000, &mut rand::thread_rng());
/// assert_eq!(costs.len(), 1000);
/// assert!(costs.mean().unwrap() > 500.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet<F>(Vec<F>);

/// Error type returned from [`SampleSet`] combination operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleSetError {
    /// The two sets do not have the same length.
    LengthMismatch,
    /// A set with zero variance has no defined correlation coefficient.
    ZeroVariance,
}

impl fmt::Display for SampleSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleSetError::LengthMismatch => "sample sets differ in length",
            SampleSetError::ZeroVariance => "sample set has zero variance",
        })
    }
}

impl std::error::Error for SampleSetError {}

impl<F: Float> SampleSet<F> {
    /// Draw `num_samples` values from `distr` in order.
    ///
    /// A count of zero yields an empty set.
    pub fn generate<D, R>(distr: &D, num_samples: usize, rng: &mut R) -> SampleSet<F>
    where
        D: Distribution<F>,
        R: Rng + ?Sized,
    {
        let mut samples = Vec::with_capacity(num_samples);
        for _ in 0..num_samples {
            samples.push(distr.sample(rng));
        }
        SampleSet(samples)
    }

    /// The number of samples in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set contains no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The samples as a slice, in draw order.
    #[inline]
    pub fn as_slice(&self) -> &[F] {
        &self.0
    }

    /// Iterate over the samples in draw order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, F> {
        self.0.iter()
    }

    /// The arithmetic mean, or `None` for an empty set.
    pub fn mean(&self) -> Option<F> {
        if self.is_empty() {
            return None;
        }
        let sum = self.0.iter().fold(F::zero(), |acc, &x| acc + x);
        Some(sum / F::from(self.len()).unwrap())
    }

    /// The smallest sample, or `None` for an empty set.
    pub fn min(&self) -> Option<F> {
        self.0.iter().copied().reduce(F::min)
    }

    /// The largest sample, or `None` for an empty set.
    pub fn max(&self) -> Option<F> {
        self.0.iter().copied().reduce(F::max)
    }

    /// The sample standard deviation (`n - 1` denominator), or `None` for a
    /// set of fewer than two samples.
    pub fn std_dev(&self) -> Option<F> {
        if self.len() < 2 {
            return None;
        }
        let mean = self.mean()?;
        let sum_sq = self.0.iter().fold(F::zero(), |acc, &x| {
            let d = x - mean;
            acc + d * d
        });
        Some((sum_sq / F::from(self.len() - 1).unwrap()).sqrt())
    }

    /// Element-wise sum of two sets of equal length.
    pub fn add(&self, other: &SampleSet<F>) -> Result<SampleSet<F>, SampleSetError> {
        if self.len() != other.len() {
            return Err(SampleSetError::LengthMismatch);
        }
        Ok(SampleSet(
            self.iter().zip(other.iter()).map(|(&a, &b)| a + b).collect(),
        ))
    }

    /// Multiply every sample by `factor`, e.g. a nightly rate by a number of
    /// nights.
    pub fn scale(&self, factor: F) -> SampleSet<F> {
        SampleSet(self.0.iter().map(|&x| x * factor).collect())
    }

    /// The Pearson correlation coefficient between two sets of equal length.
    ///
    /// Fails with [`SampleSetError::ZeroVariance`] when either set is
    /// constant (or has fewer than two samples), since the coefficient is
    /// undefined there.
    pub fn correlation(&self, other: &SampleSet<F>) -> Result<F, SampleSetError> {
        if self.len() != other.len() {
            return Err(SampleSetError::LengthMismatch);
        }
        if self.len() < 2 {
            return Err(SampleSetError::ZeroVariance);
        }
        let mean_x = self.mean().ok_or(SampleSetError::ZeroVariance)?;
        let mean_y = other.mean().ok_or(SampleSetError::ZeroVariance)?;
        let mut cov = F::zero();
        let mut var_x = F::zero();
        let mut var_y = F::zero();
        for (&x, &y) in self.iter().zip(other.iter()) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            cov = cov + dx * dy;
            var_x = var_x + dx * dx;
            var_y = var_y + dy * dy;
        }
        if var_x == F::zero() || var_y == F::zero() {
            return Err(SampleSetError::ZeroVariance);
        }
        Ok(cov / (var_x * var_y).sqrt())
    }
}

impl<F> From<Vec<F>> for SampleSet<F> {
    #[inline]
    fn from(samples: Vec<F>) -> SampleSet<F> {
        SampleSet(samples)
    }
}

impl<F> From<SampleSet<F>> for Vec<F> {
    #[inline]
    fn from(set: SampleSet<F>) -> Vec<F> {
        set.0
    }
}

impl<F> Index<usize> for SampleSet<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &F {
        &self.0[index]
    }
}

impl<'a, F> IntoIterator for &'a SampleSet<F> {
    type Item = &'a F;
    type IntoIter = slice::Iter<'a, F>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, F> {
        self.0.iter()
    }
}

impl<F> IntoIterator for SampleSet<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    #[inline]
    fn into_iter(self) -> std::vec::IntoIter<F> {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn summary_statistics() {
        let set = SampleSet::from(vec![2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(set.len(), 8);
        assert_eq!(set.mean(), Some(5.0));
        assert_eq!(set.min(), Some(2.0));
        assert_eq!(set.max(), Some(9.0));
        // sum of squared deviations is 32; 32 / 7 then sqrt
        let expected = (32.0f64 / 7.0).sqrt();
        assert!((set.std_dev().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_set() {
        let set: SampleSet<f64> = SampleSet::from(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.mean(), None);
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
        assert_eq!(set.std_dev(), None);
    }

    #[test]
    fn add_and_scale() {
        let a = SampleSet::from(vec![1.0f64, 2.0, 3.0]);
        let b = SampleSet::from(vec![10.0f64, 20.0, 30.0]);
        let total = a.add(&b).unwrap();
        assert_eq!(total.as_slice(), &[11.0, 22.0, 33.0]);

        let tripled = a.scale(3.0);
        assert_eq!(tripled.as_slice(), &[3.0, 6.0, 9.0]);

        let short = SampleSet::from(vec![1.0f64]);
        assert_eq!(a.add(&short).unwrap_err(), SampleSetError::LengthMismatch);
    }

    #[test]
    fn correlation_of_linear_dependence() {
        let a = SampleSet::from(vec![1.0f64, 2.0, 3.0, 4.0, 5.0]);
        let b = a.scale(2.0);
        assert!((a.correlation(&b).unwrap() - 1.0).abs() < 1e-12);

        let neg = SampleSet::from(vec![5.0f64, 4.0, 3.0, 2.0, 1.0]);
        assert!((a.correlation(&neg).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_errors() {
        let a = SampleSet::from(vec![1.0f64, 2.0, 3.0]);
        let short = SampleSet::from(vec![1.0f64]);
        assert_eq!(
            a.correlation(&short).unwrap_err(),
            SampleSetError::LengthMismatch
        );

        let constant = SampleSet::from(vec![7.0f64, 7.0, 7.0]);
        assert_eq!(
            a.correlation(&constant).unwrap_err(),
            SampleSetError::ZeroVariance
        );
    }

    #[test]
    fn correlation_of_independent_streams() {
        use rand_distr::Uniform;
        let mut rng = crate::test::rng(1234);
        let d = Uniform::new(0.0f64, 1.0);
        let a = SampleSet::generate(&d, 10_000, &mut rng);
        let b = SampleSet::generate(&d, 10_000, &mut rng);
        let r = a.correlation(&b).unwrap();
        assert!(r.abs() < 0.05, "r = {}", r);
    }

    #[test]
    fn generate_is_ordered_and_deterministic() {
        use rand_distr::Uniform;
        let d = Uniform::new(0.0f64, 1.0);
        let a = SampleSet::generate(&d, 50, &mut crate::test::rng(3));
        let b = SampleSet::generate(&d, 50, &mut crate::test::rng(3));
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }
}
