// Copyright 2026 cost-distr developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Budget models: independent cost items simulated into a total.

use core::fmt;

use rand::Rng;

use crate::{CostEstimate, SampleSet};

/// Error type returned from [`CostItem::with_quantity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetError {
    /// `quantity` is not a positive finite number.
    InvalidQuantity,
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BudgetError::InvalidQuantity => "quantity is not positive and finite in cost item",
        })
    }
}

impl std::error::Error for BudgetError {}

/// One named line in a budget: an estimate plus a quantity multiplier.
///
/// The quantity covers per-unit estimates, e.g. a nightly hotel rate over
/// three nights.
#[derive(Clone, Debug)]
pub struct CostItem {
    name: String,
    estimate: CostEstimate,
    quantity: f64,
}

impl CostItem {
    /// A cost item with quantity 1.
    pub fn new<S: Into<String>>(name: S, estimate: CostEstimate) -> CostItem {
        CostItem {
            name: name.into(),
            estimate,
            quantity: 1.0,
        }
    }

    /// A cost item whose sampled values are multiplied by `quantity`.
    ///
    /// Requires `quantity` to be positive and finite.
    pub fn with_quantity<S: Into<String>>(
        name: S,
        estimate: CostEstimate,
        quantity: f64,
    ) -> Result<CostItem, BudgetError> {
        if !(quantity > 0.0) || !quantity.is_finite() {
            return Err(BudgetError::InvalidQuantity);
        }
        Ok(CostItem {
            name: name.into(),
            estimate,
            quantity,
        })
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's estimate.
    pub fn estimate(&self) -> &CostEstimate {
        &self.estimate
    }

    /// The item's quantity multiplier.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }
}

/// A set of independent cost items simulated together.
///
/// Items are sampled in insertion order from a single caller-supplied RNG,
/// so a seeded run is reproducible end to end.
///
/// # Example
///
/// ```rust
/// use cost_distr::{BudgetModel, CostEstimate, CostItem};
///
/// let model = BudgetModel::new()
///     .with_item(CostItem::new(
///         "flights",
///         CostEstimate::pert(500.0, 800.0, 1200.0).unwrap(),
///     ))
///     .with_item(
///         CostItem::with_quantity(
///             "hotel",
///             CostEstimate::uniform(80.0, 200.0).unwrap(),
///             3.0, // nights
///         )
///         .unwrap(),
///     );
///
/// let run = model.simulate(1000, &mut rand::thread_rng());
/// assert_eq!(run.total().len(), 1000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BudgetModel {
    items: Vec<CostItem>,
}

impl BudgetModel {
    /// An empty budget model.
    pub fn new() -> BudgetModel {
        BudgetModel { items: Vec::new() }
    }

    /// Append a cost item.
    pub fn push(&mut self, item: CostItem) {
        self.items.push(item);
    }

    /// Append a cost item, builder style.
    pub fn with_item(mut self, item: CostItem) -> BudgetModel {
        self.items.push(item);
        self
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    /// The number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the model has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw `num_samples` values per item and combine them into a total.
    ///
    /// Each item's set is scaled by its quantity before entering the total.
    /// An empty model yields an all-zero total of the requested length.
    pub fn simulate<R: Rng + ?Sized>(&self, num_samples: usize, rng: &mut R) -> BudgetSamples {
        let mut items = Vec::with_capacity(self.items.len());
        let mut total = SampleSet::from(vec![0.0; num_samples]);
        for item in &self.items {
            let set = item.estimate.sample_set(num_samples, rng).scale(item.quantity);
            // Lengths are equal by construction.
            total = total.add(&set).unwrap();
            items.push((item.name.clone(), set));
        }
        BudgetSamples { items, total }
    }
}

/// The outcome of one [`BudgetModel::simulate`] run.
#[derive(Clone, Debug)]
pub struct BudgetSamples {
    items: Vec<(String, SampleSet<f64>)>,
    total: SampleSet<f64>,
}

impl BudgetSamples {
    /// Per-item sample sets in item order.
    pub fn items(&self) -> &[(String, SampleSet<f64>)] {
        &self.items
    }

    /// The sample set for a named item, if present.
    pub fn item(&self, name: &str) -> Option<&SampleSet<f64>> {
        self.items
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, set)| set)
    }

    /// The total-cost sample set.
    pub fn total(&self) -> &SampleSet<f64> {
        &self.total
    }

    /// The pairwise Pearson correlation matrix over all items plus the
    /// total, in item order with the total last.
    ///
    /// Entries are `None` where the coefficient is undefined (constant or
    /// too-short sets); the diagonal is `Some(1.0)`.
    pub fn correlation_matrix(&self) -> Vec<Vec<Option<f64>>> {
        let sets: Vec<&SampleSet<f64>> = self
            .items
            .iter()
            .map(|(_, set)| set)
            .chain(core::iter::once(&self.total))
            .collect();
        sets.iter()
            .map(|a| {
                sets.iter()
                    .map(|b| {
                        if core::ptr::eq(*a, *b) {
                            Some(1.0)
                        } else {
                            a.correlation(b).ok()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn vacation_model() -> BudgetModel {
        BudgetModel::new()
            .with_item(CostItem::new(
                "flights",
                CostEstimate::pert(500.0, 800.0, 1200.0).unwrap(),
            ))
            .with_item(CostItem::new(
                "accommodation",
                CostEstimate::pert(600.0, 900.0, 1500.0).unwrap(),
            ))
            .with_item(CostItem::new(
                "food",
                CostEstimate::pert(300.0, 500.0, 800.0).unwrap(),
            ))
            .with_item(CostItem::new(
                "activities",
                CostEstimate::uniform(200.0, 600.0).unwrap(),
            ))
    }

    #[test]
    fn total_is_elementwise_sum() {
        let mut rng = crate::test::rng(10);
        let run = vacation_model().simulate(500, &mut rng);
        assert_eq!(run.items().len(), 4);

        let mut expected = SampleSet::from(vec![0.0; 500]);
        for (_, set) in run.items() {
            assert_eq!(set.len(), 500);
            expected = expected.add(set).unwrap();
        }
        assert_eq!(run.total(), &expected);
    }

    #[test]
    fn quantity_scales_samples() {
        let mut model = BudgetModel::new();
        model.push(
            CostItem::with_quantity("hotel", CostEstimate::uniform(80.0, 200.0).unwrap(), 3.0)
                .unwrap(),
        );
        let run = model.simulate(1000, &mut crate::test::rng(20));
        let hotel = run.item("hotel").unwrap();
        assert!(hotel.min().unwrap() >= 240.0);
        assert!(hotel.max().unwrap() <= 600.0);
        assert!(run.item("flights").is_none());
    }

    #[test]
    fn invalid_quantities_are_rejected() {
        let estimate = CostEstimate::uniform(80.0, 200.0).unwrap();
        for quantity in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -3.0, 0.0] {
            assert_eq!(
                CostItem::with_quantity("hotel", estimate, quantity).unwrap_err(),
                BudgetError::InvalidQuantity
            );
        }
        assert_eq!(
            CostItem::with_quantity("hotel", estimate, 3.0)
                .unwrap()
                .quantity(),
            3.0
        );
    }

    #[test]
    fn empty_model_yields_zero_total() {
        let run = BudgetModel::new().simulate(10, &mut crate::test::rng(1));
        assert!(run.items().is_empty());
        assert_eq!(run.total().as_slice(), &[0.0; 10]);
    }

    #[test]
    fn zero_samples() {
        let run = vacation_model().simulate(0, &mut crate::test::rng(1));
        assert!(run.total().is_empty());
        for (_, set) in run.items() {
            assert!(set.is_empty());
        }
    }

    #[test]
    fn determinism() {
        let a = vacation_model().simulate(200, &mut crate::test::rng(55));
        let b = vacation_model().simulate(200, &mut crate::test::rng(55));
        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn correlation_matrix_shape() {
        let run = vacation_model().simulate(2000, &mut crate::test::rng(31));
        let matrix = run.correlation_matrix();
        // four items plus the total
        assert_eq!(matrix.len(), 5);
        for row in &matrix {
            assert_eq!(row.len(), 5);
        }
        for i in 0..5 {
            assert_eq!(matrix[i][i], Some(1.0));
        }
        // independent items are close to uncorrelated
        let r = matrix[0][1].unwrap();
        assert!(r.abs() < 0.1, "r = {}", r);
        // every item correlates positively with the total it feeds
        for i in 0..4 {
            assert!(matrix[i][4].unwrap() > 0.0);
        }
    }
}
