//! Weighted variance swaps and their P&L attribution.
//!
//! A weighted variance swap pays the realized variance of log-returns, each
//! squared return weighted by a function of the underlying (Lee, 2010). The
//! weighting scheme fixes four primitives: price, var-vega, gamma P&L and
//! vanna P&L. Everything else (forward vega, skew-stickiness ratio,
//! minimum-variance delta and the P&L decomposition) is shared and provided
//! as default methods on [`WeightedVarianceSwap`].
//!
//! ## Instruments
//!
//! - [`VarianceSwap`] — uniform weighting, replicated by the log contract
//!
//! # References
//! - Lee, R. "Weighted Variance Swap", Encyclopedia of Quantitative Finance (2010)

pub mod variance;

pub use variance::VarianceSwap;

use crate::error;
use crate::kernel::elementwise;
use crate::params::{Correlation, VarianceProcessParams};
use crate::types::{ForwardMove, HedgeInputs, PnlAttribution, PnlInputs, VarianceStep};
use crate::validate::validate_same_len;

/// A variance swap under some weighting scheme.
///
/// Implementors supply the four scheme-specific primitives
/// ([`price`](Self::price), [`var_vega`](Self::var_vega),
/// [`gamma_pnl`](Self::gamma_pnl), [`vanna_pnl`](Self::vanna_pnl)) and access
/// to the model parameters. The remaining analytics are derived from those.
///
/// All operations are elementwise over equal-length scenario slices and
/// return a vector of the same length. Mismatched lengths are rejected with
/// [`VarSwapError::InvalidInput`](crate::VarSwapError::InvalidInput).
///
/// # Preconditions
/// Variances must be positive and remaining maturities non-negative. Values
/// outside that domain are not rejected: they produce NaN (or meaningless
/// numbers) in the affected elements only.
///
/// # Thread Safety
/// Implementations are immutable and must be `Send + Sync`; one instrument
/// can be shared across pricing threads behind an `Arc`.
pub trait WeightedVarianceSwap: Send + Sync {
    /// Dynamics of the implied instantaneous variance.
    fn imp_var_params(&self) -> &VarianceProcessParams;

    /// Dynamics of the realized instantaneous variance.
    fn real_var_params(&self) -> &VarianceProcessParams;

    /// Spot / variance correlation structure.
    fn corr(&self) -> &Correlation;

    /// Fair value given instantaneous implied variance and time to expiry in years.
    fn price(&self, imp_var: &[f64], tau: &[f64]) -> error::Result<Vec<f64>>;

    /// Sensitivity of [`price`](Self::price) to a unit shift in instantaneous
    /// implied variance, as a function of time to expiry.
    fn var_vega(&self, tau: &[f64]) -> Vec<f64>;

    /// Convexity P&L of the delta-hedged replicating portfolio as the forward
    /// moves from `f_0` to `f_t`. Depends on the weighting scheme only, not on
    /// the model parameters.
    fn gamma_pnl(&self, fwd: &ForwardMove<'_>) -> error::Result<Vec<f64>>;

    /// Cross P&L from joint spot and implied-variance moves. Identically zero
    /// for schemes without vanna exposure.
    fn vanna_pnl(&self, step: &VarianceStep<'_>, fwd: &ForwardMove<'_>)
        -> error::Result<Vec<f64>>;

    /// Vega to implied variance over the expiry bucket `[tau_front, tau_back]`:
    /// `var_vega(tau_back) - var_vega(tau_front)`.
    fn forward_var_vega(&self, tau_front: &[f64], tau_back: &[f64]) -> error::Result<Vec<f64>> {
        let n = validate_same_len(&[("tau_front", tau_front), ("tau_back", tau_back)])?;
        let back = self.var_vega(tau_back);
        let front = self.var_vega(tau_front);
        Ok(elementwise(n, |i| back[i] - front[i]))
    }

    /// Skew-stickiness ratio with respect to instantaneous implied variance,
    /// `d imp_var · d log F / (d log F)²`:
    ///
    /// ```text
    /// SSR = ρ(spot, imp) · ξ_imp · √imp_var / √real_var
    /// ```
    fn var_skew_stickiness_ratio(&self, real_var: &[f64], imp_var: &[f64]) -> error::Result<Vec<f64>> {
        let n = validate_same_len(&[("real_var", real_var), ("imp_var", imp_var)])?;
        let scale = self.corr().rho_spot_imp() * self.imp_var_params().vol_of_var();
        Ok(elementwise(n, |i| scale * imp_var[i].sqrt() / real_var[i].sqrt()))
    }

    /// Minimum-variance delta: forward var-vega over `[tau_0 - tau_t, tau_0]`
    /// times the skew-stickiness ratio.
    fn min_var_delta(
        &self,
        real_var: &[f64],
        imp_var: &[f64],
        tau_0: &[f64],
        tau_t: &[f64],
    ) -> error::Result<Vec<f64>> {
        let n = validate_same_len(&[
            ("real_var", real_var),
            ("imp_var", imp_var),
            ("tau_0", tau_0),
            ("tau_t", tau_t),
        ])?;
        // Variance between time 0 and t is no longer a risk at the next observation.
        let tau_front = elementwise(n, |i| tau_0[i] - tau_t[i]);
        let fwd_vega = self.forward_var_vega(&tau_front, tau_0)?;
        let ssr = self.var_skew_stickiness_ratio(real_var, imp_var)?;
        Ok(elementwise(n, |i| fwd_vega[i] * ssr[i]))
    }

    /// Expected theta P&L at time 0: `-price(imp_var_0, tau_t - tau_0)`.
    ///
    /// The price is evaluated at the elapsed-time offset with implied variance
    /// held at `imp_var_0`; this is the only place `price` sees a negative tau.
    fn theta_pnl(&self, imp_var_0: &[f64], tau_0: &[f64], tau_t: &[f64]) -> error::Result<Vec<f64>> {
        let n = validate_same_len(&[
            ("imp_var_0", imp_var_0),
            ("tau_0", tau_0),
            ("tau_t", tau_t),
        ])?;
        let offset = elementwise(n, |i| tau_t[i] - tau_0[i]);
        let aged = self.price(imp_var_0, &offset)?;
        Ok(elementwise(n, |i| -aged[i]))
    }

    /// Price change attributable to the implied-variance move, net of theta.
    fn var_vega_pnl(&self, step: &VarianceStep<'_>) -> error::Result<Vec<f64>> {
        let n = step.scenarios()?;
        let price_0 = self.price(step.imp_var_0, step.tau_0)?;
        let price_t = self.price(step.imp_var_t, step.tau_t)?;
        let theta = self.theta_pnl(step.imp_var_0, step.tau_0, step.tau_t)?;
        Ok(elementwise(n, |i| price_t[i] - price_0[i] - theta[i]))
    }

    /// P&L of shorting the minimum-variance delta in the forward over the step.
    fn vega_hedge_pnl(&self, hedge: &HedgeInputs<'_>) -> error::Result<Vec<f64>> {
        let n = hedge.scenarios()?;
        let delta = self.min_var_delta(hedge.real_var_0, hedge.imp_var_0, hedge.tau_0, hedge.tau_t)?;
        Ok(elementwise(n, |i| -delta[i] * (hedge.f_t[i] - hedge.f_0[i])))
    }

    /// Total P&L over the step:
    ///
    /// ```text
    /// price_t - price_0 + vanna + gamma + vega_hedge
    /// ```
    fn total_pnl(&self, inputs: &PnlInputs<'_>) -> error::Result<Vec<f64>> {
        let n = inputs.scenarios()?;
        let fwd = inputs.forward_move();
        let price_0 = self.price(inputs.imp_var_0, inputs.tau_0)?;
        let price_t = self.price(inputs.imp_var_t, inputs.tau_t)?;
        let vanna = self.vanna_pnl(&inputs.variance_step(), &fwd)?;
        let gamma = self.gamma_pnl(&fwd)?;
        let vega_hedge = self.vega_hedge_pnl(&inputs.hedge())?;
        Ok(elementwise(n, |i| {
            price_t[i] - price_0[i] + vanna[i] + gamma[i] + vega_hedge[i]
        }))
    }

    /// Every named component of the step P&L in one pass.
    ///
    /// `total` is computed exactly as in [`total_pnl`](Self::total_pnl);
    /// `theta + var_vega` reproduces `price_t - price_0`.
    fn attribute_pnl(&self, inputs: &PnlInputs<'_>) -> error::Result<PnlAttribution> {
        let n = inputs.scenarios()?;

        #[cfg(feature = "logging")]
        tracing::debug!(n_scenarios = n, "P&L attribution started");

        let fwd = inputs.forward_move();
        let price_0 = self.price(inputs.imp_var_0, inputs.tau_0)?;
        let price_t = self.price(inputs.imp_var_t, inputs.tau_t)?;
        let theta = self.theta_pnl(inputs.imp_var_0, inputs.tau_0, inputs.tau_t)?;
        let var_vega = elementwise(n, |i| price_t[i] - price_0[i] - theta[i]);
        let vanna = self.vanna_pnl(&inputs.variance_step(), &fwd)?;
        let gamma = self.gamma_pnl(&fwd)?;
        let vega_hedge = self.vega_hedge_pnl(&inputs.hedge())?;
        let total = elementwise(n, |i| {
            price_t[i] - price_0[i] + vanna[i] + gamma[i] + vega_hedge[i]
        });

        Ok(PnlAttribution {
            theta,
            var_vega,
            vanna,
            gamma,
            vega_hedge,
            total,
        })
    }
}
