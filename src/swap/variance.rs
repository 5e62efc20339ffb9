//! Standard variance swap (uniform weighting), replicated by the log contract.
//!
//! Under mean-reverting implied variance `dv = κ(θ − v) dt + ξ √v dW`, the
//! risk-neutral expectation of integrated variance over the remaining life τ is
//!
//! ```text
//! P(v, τ) = θ·τ + (v − θ)·(1 − e^{−κτ}) / κ
//! ```
//!
//! The price is linear in `v`, so var-vega depends on τ only, and the log
//! contract is spot-independent given the variance path, so there is no vanna.
//!
//! # References
//! - Neuberger, A. "The Log Contract", Journal of Portfolio Management 20(2) (1994)
//! - Fukasawa, M. "Volatility Derivatives and Model-Free Implied Leverage",
//!   IJTAF 17(01) (2014)

use serde::{Deserialize, Serialize};

use crate::error;
use crate::kernel::elementwise;
use crate::params::{Correlation, ModelParams, VarianceProcessParams};
use crate::swap::WeightedVarianceSwap;
use crate::types::{ForwardMove, VarianceStep};
use crate::validate::validate_same_len;

/// Standard variance swap, or equivalently a log contract.
///
/// # Examples
/// ```
/// use wvswap::params::{Correlation, VarianceProcessParams};
/// use wvswap::swap::{VarianceSwap, WeightedVarianceSwap};
///
/// let swap = VarianceSwap::new(
///     VarianceProcessParams::new(2.0, 0.04, 0.5)?,
///     VarianceProcessParams::new(4.0, 0.04, 0.8)?,
///     Correlation::new(-0.7, 0.0, 0.0)?,
/// );
/// let price = swap.price(&[0.09], &[1.0])?;
/// let expected = 0.04 + 0.05 * (1.0 - (-2.0_f64).exp()) / 2.0;
/// assert!((price[0] - expected).abs() < 1e-15);
/// # Ok::<(), wvswap::VarSwapError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceSwap {
    imp_var_params: VarianceProcessParams,
    real_var_params: VarianceProcessParams,
    corr: Correlation,
}

impl VarianceSwap {
    /// Create a variance swap from already validated model parameters.
    pub fn new(
        imp_var_params: VarianceProcessParams,
        real_var_params: VarianceProcessParams,
        corr: Correlation,
    ) -> Self {
        #[cfg(feature = "logging")]
        tracing::debug!(
            kappa = imp_var_params.kappa(),
            mean_of_var = imp_var_params.mean_of_var(),
            rho_spot_imp = corr.rho_spot_imp(),
            "variance swap constructed"
        );

        Self {
            imp_var_params,
            real_var_params,
            corr,
        }
    }

    /// Create a variance swap from a full parameter session.
    pub fn from_params(params: &ModelParams) -> Self {
        Self::new(params.imp_var, params.real_var, params.corr)
    }

    /// `(1 − e^{−κτ}) / κ`, via `exp_m1` so short maturities keep full precision.
    fn decay_factor(&self, tau: f64) -> f64 {
        let kappa = self.imp_var_params.kappa();
        -(-kappa * tau).exp_m1() / kappa
    }
}

impl WeightedVarianceSwap for VarianceSwap {
    fn imp_var_params(&self) -> &VarianceProcessParams {
        &self.imp_var_params
    }

    fn real_var_params(&self) -> &VarianceProcessParams {
        &self.real_var_params
    }

    fn corr(&self) -> &Correlation {
        &self.corr
    }

    fn price(&self, imp_var: &[f64], tau: &[f64]) -> error::Result<Vec<f64>> {
        let n = validate_same_len(&[("imp_var", imp_var), ("tau", tau)])?;
        let theta = self.imp_var_params.mean_of_var();
        Ok(elementwise(n, |i| {
            theta * tau[i] + (imp_var[i] - theta) * self.decay_factor(tau[i])
        }))
    }

    fn var_vega(&self, tau: &[f64]) -> Vec<f64> {
        elementwise(tau.len(), |i| self.decay_factor(tau[i]))
    }

    fn gamma_pnl(&self, fwd: &ForwardMove<'_>) -> error::Result<Vec<f64>> {
        let n = fwd.scenarios()?;
        Ok(elementwise(n, |i| {
            let ratio = fwd.f_t[i] / fwd.f_0[i];
            2.0 * (ratio - 1.0 - ratio.ln())
        }))
    }

    fn vanna_pnl(
        &self,
        step: &VarianceStep<'_>,
        fwd: &ForwardMove<'_>,
    ) -> error::Result<Vec<f64>> {
        let n = step.scenarios()?;
        validate_same_len(&[("imp_var_0", step.imp_var_0), ("f_0", fwd.f_0), ("f_t", fwd.f_t)])?;
        Ok(vec![0.0; n])
    }
}
