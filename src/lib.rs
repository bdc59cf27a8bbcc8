// Copyright 2026 cost-distr developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

//! Monte Carlo sampling for three-point cost estimates.
//!
//! Cost planning usually starts from a minimum, most-likely and maximum
//! figure per line item. This crate turns such estimates into sample sets:
//!
//! - [`Pert`] — the PERT distribution, a reparameterised [`Beta`] scaled to
//!   `[min, max]`, with a configurable shape (concentration) factor and the
//!   convenience function [`sample_pert`].
//! - [`CostEstimate`] — uniform, normal and PERT estimates behind a single
//!   [`Distribution`] implementation.
//! - [`SampleSet`] — an ordered batch of draws with summary statistics,
//!   element-wise combination and Pearson correlation.
//! - [`BudgetModel`] — several named cost items simulated together into
//!   per-item and total-cost sample sets.
//!
//! All sampling goes through a caller-supplied [`Rng`]: the crate never
//! creates or seeds a generator itself, so results are reproducible given a
//! seeded RNG.
//!
//! ```rust
//! use cost_distr::{Distribution, Pert};
//!
//! let flight = Pert::new(500.0, 800.0, 1200.0).unwrap();
//! let cost: f64 = flight.sample(&mut rand::thread_rng());
//! assert!((500.0..=1200.0).contains(&cost));
//! ```
//!
//! [`Beta`]: rand_distr::Beta
//! [`Rng`]: rand::Rng

pub use rand_distr::Distribution;

pub use self::budget::{BudgetError, BudgetModel, BudgetSamples, CostItem};
pub use self::estimate::{CostEstimate, EstimateError};
pub use self::pert::{sample_pert, Pert, PertError};
pub use self::sample_set::{SampleSet, SampleSetError};

mod budget;
mod estimate;
mod pert;
mod sample_set;
