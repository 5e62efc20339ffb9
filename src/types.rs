//! Input records and output types for P&L analytics.
//!
//! Every time-dependent quantity is a slice of `f64`, one element per scenario.
//! The records below group the slices each operation needs so call sites read
//! as `f_0: &fwd_0` rather than a positional list of seven slices.
//!
//! All slices inside one record must have the same length; this is checked
//! when the record is consumed and reported as
//! [`VarSwapError::InvalidInput`](crate::VarSwapError::InvalidInput).
//!
//! Time arguments are times to expiry in years, not calendar times:
//! the step length is `tau_0 - tau_t`.

use serde::{Deserialize, Serialize};

use crate::error;
use crate::validate::validate_same_len;

/// Forward price at the start (`f_0`) and end (`f_t`) of a step.
#[derive(Debug, Clone, Copy)]
pub struct ForwardMove<'a> {
    /// Forward price at time 0.
    pub f_0: &'a [f64],
    /// Forward price at time t.
    pub f_t: &'a [f64],
}

impl ForwardMove<'_> {
    /// Number of scenarios, after checking that both slices agree.
    pub fn scenarios(&self) -> error::Result<usize> {
        validate_same_len(&[("f_0", self.f_0), ("f_t", self.f_t)])
    }
}

/// Implied variance and time to expiry at the start and end of a step.
#[derive(Debug, Clone, Copy)]
pub struct VarianceStep<'a> {
    /// Instantaneous implied variance at time 0.
    pub imp_var_0: &'a [f64],
    /// Time to expiry in years at time 0.
    pub tau_0: &'a [f64],
    /// Instantaneous implied variance at time t.
    pub imp_var_t: &'a [f64],
    /// Time to expiry in years at time t.
    pub tau_t: &'a [f64],
}

impl VarianceStep<'_> {
    /// Number of scenarios, after checking that all slices agree.
    pub fn scenarios(&self) -> error::Result<usize> {
        validate_same_len(&[
            ("imp_var_0", self.imp_var_0),
            ("tau_0", self.tau_0),
            ("imp_var_t", self.imp_var_t),
            ("tau_t", self.tau_t),
        ])
    }
}

/// Inputs to the minimum-variance vega hedge held over one step.
#[derive(Debug, Clone, Copy)]
pub struct HedgeInputs<'a> {
    /// Forward price at time 0.
    pub f_0: &'a [f64],
    /// Forward price at time t.
    pub f_t: &'a [f64],
    /// Instantaneous realized variance at time 0.
    pub real_var_0: &'a [f64],
    /// Instantaneous implied variance at time 0.
    pub imp_var_0: &'a [f64],
    /// Time to expiry in years at time 0.
    pub tau_0: &'a [f64],
    /// Time to expiry in years at time t.
    pub tau_t: &'a [f64],
}

impl HedgeInputs<'_> {
    /// Number of scenarios, after checking that all slices agree.
    pub fn scenarios(&self) -> error::Result<usize> {
        validate_same_len(&[
            ("f_0", self.f_0),
            ("f_t", self.f_t),
            ("real_var_0", self.real_var_0),
            ("imp_var_0", self.imp_var_0),
            ("tau_0", self.tau_0),
            ("tau_t", self.tau_t),
        ])
    }
}

/// Full market state at both ends of a step, as consumed by
/// [`total_pnl`](crate::WeightedVarianceSwap::total_pnl).
#[derive(Debug, Clone, Copy)]
pub struct PnlInputs<'a> {
    /// Forward price at time 0.
    pub f_0: &'a [f64],
    /// Forward price at time t.
    pub f_t: &'a [f64],
    /// Instantaneous realized variance at time 0.
    pub real_var_0: &'a [f64],
    /// Instantaneous implied variance at time 0.
    pub imp_var_0: &'a [f64],
    /// Time to expiry in years at time 0.
    pub tau_0: &'a [f64],
    /// Instantaneous implied variance at time t.
    pub imp_var_t: &'a [f64],
    /// Time to expiry in years at time t.
    pub tau_t: &'a [f64],
}

impl<'a> PnlInputs<'a> {
    /// Number of scenarios, after checking that all seven slices agree.
    pub fn scenarios(&self) -> error::Result<usize> {
        validate_same_len(&[
            ("f_0", self.f_0),
            ("f_t", self.f_t),
            ("real_var_0", self.real_var_0),
            ("imp_var_0", self.imp_var_0),
            ("tau_0", self.tau_0),
            ("imp_var_t", self.imp_var_t),
            ("tau_t", self.tau_t),
        ])
    }

    /// The forward-price part of the state.
    pub fn forward_move(&self) -> ForwardMove<'a> {
        ForwardMove {
            f_0: self.f_0,
            f_t: self.f_t,
        }
    }

    /// The implied-variance part of the state.
    pub fn variance_step(&self) -> VarianceStep<'a> {
        VarianceStep {
            imp_var_0: self.imp_var_0,
            tau_0: self.tau_0,
            imp_var_t: self.imp_var_t,
            tau_t: self.tau_t,
        }
    }

    /// The inputs of the vega hedge (everything except `imp_var_t`).
    pub fn hedge(&self) -> HedgeInputs<'a> {
        HedgeInputs {
            f_0: self.f_0,
            f_t: self.f_t,
            real_var_0: self.real_var_0,
            imp_var_0: self.imp_var_0,
            tau_0: self.tau_0,
            tau_t: self.tau_t,
        }
    }
}

/// P&L of one step broken down into named risk sources, one element per scenario.
///
/// `total` is `price_t - price_0 + vanna + gamma + vega_hedge`. Theta and
/// var-vega split the price change between them, so
/// [`explained`](PnlAttribution::explained) matches `total` up to rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlAttribution {
    /// Value decay from ageing the contract with implied variance held fixed.
    pub theta: Vec<f64>,
    /// Price change due to the implied-variance move, net of theta.
    pub var_vega: Vec<f64>,
    /// Cross spot/variance P&L.
    pub vanna: Vec<f64>,
    /// Convexity P&L of the delta-hedged weighting scheme.
    pub gamma: Vec<f64>,
    /// P&L of the minimum-variance spot hedge.
    pub vega_hedge: Vec<f64>,
    /// Total P&L of the hedged position.
    pub total: Vec<f64>,
}

impl PnlAttribution {
    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.total.len()
    }

    /// `true` if there are no scenarios.
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// Sum of the named components, scenario by scenario.
    pub fn explained(&self) -> Vec<f64> {
        self.theta
            .iter()
            .zip(&self.var_vega)
            .zip(&self.vanna)
            .zip(&self.gamma)
            .zip(&self.vega_hedge)
            .map(|((((theta, vega), vanna), gamma), hedge)| theta + vega + vanna + gamma + hedge)
            .collect()
    }

    /// `total - explained`, scenario by scenario. Zero up to rounding.
    pub fn residual(&self) -> Vec<f64> {
        self.explained()
            .iter()
            .zip(&self.total)
            .map(|(e, t)| t - e)
            .collect()
    }
}
