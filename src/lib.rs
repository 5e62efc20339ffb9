//! # wvswap
//!
//! Pricing and P&L attribution for weighted variance swaps under a two-factor
//! mean-reverting stochastic-variance model.
//!
//! Implied and realized instantaneous variance each follow a Heston-style
//! square-root process; spot log-returns are correlated with both. Given the
//! market state at the start and end of a step, the total P&L of a
//! vega-hedged weighted variance swap is decomposed into theta, var-vega,
//! vanna, gamma and vega-hedge components.
//!
//! ## Architecture
//!
//! - **`params`** — Variance-process parameters and correlation structure
//! - **`swap`** — The [`WeightedVarianceSwap`] trait with shared analytics,
//!   and concrete instruments ([`VarianceSwap`])
//! - **`types`** — Per-operation input records and [`PnlAttribution`]
//!
//! ## Design
//!
//! - **Slices in, vectors out.** Every analytic is elementwise over
//!   equal-length scenario slices. Lengths are checked at the boundary;
//!   there is no broadcasting.
//! - **Validated parameters, unvalidated observations.** Model parameters are
//!   checked on construction and deserialization. Observations outside the
//!   model's domain (e.g. negative variance) yield NaN in the affected element,
//!   never a panic.
//! - **Immutable and thread-safe.** Instruments are `Send + Sync` and hold no
//!   interior mutability. Enable the `parallel` feature to evaluate large
//!   scenario batches with rayon.
//!
//! ```
//! use wvswap::params::{Correlation, VarianceProcessParams};
//! use wvswap::{PnlInputs, VarianceSwap, WeightedVarianceSwap};
//!
//! let swap = VarianceSwap::new(
//!     VarianceProcessParams::new(2.0, 0.04, 0.5)?,
//!     VarianceProcessParams::new(4.0, 0.04, 0.8)?,
//!     Correlation::new(-0.7, 0.0, 0.0)?,
//! );
//! let inputs = PnlInputs {
//!     f_0: &[100.0],
//!     f_t: &[98.5],
//!     real_var_0: &[0.045],
//!     imp_var_0: &[0.05],
//!     tau_0: &[0.5],
//!     imp_var_t: &[0.055],
//!     tau_t: &[0.5 - 1.0 / 252.0],
//! };
//! let attribution = swap.attribute_pnl(&inputs)?;
//! assert_eq!(attribution.total, swap.total_pnl(&inputs)?);
//! # Ok::<(), wvswap::VarSwapError>(())
//! ```

pub mod error;
mod kernel;
pub mod params;
pub mod swap;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{Result, VarSwapError};
#[doc(inline)]
pub use params::{Correlation, ModelParams, VarianceProcessParams};
#[doc(inline)]
pub use swap::{VarianceSwap, WeightedVarianceSwap};
#[doc(inline)]
pub use types::{ForwardMove, HedgeInputs, PnlAttribution, PnlInputs, VarianceStep};
