//! Stochastic-variance model parameters.
//!
//! Both the implied and the realized instantaneous variance follow a
//! mean-reverting (Heston-style) square-root process:
//!
//! ```text
//! dv = κ(θ − v) dt + ξ √v dW
//! ```
//!
//! with mean-reversion speed `κ` (`kappa`), long-run level `θ` (`mean_of_var`)
//! and volatility of variance `ξ` (`vol_of_var`). Spot log-returns, implied
//! variance and realized variance are driven by correlated Brownian motions.
//!
//! These types only carry validated values. Calibration and path simulation
//! live upstream of this crate.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::{self, VarSwapError};
use crate::validate::{validate_correlation, validate_non_negative, validate_positive};

/// Smallest eigenvalue tolerated for the correlation matrix to count as
/// positive semi-definite.
const PSD_TOL: f64 = 1e-12;

/// Parameters of one mean-reverting variance process.
///
/// # Examples
/// ```
/// use wvswap::params::VarianceProcessParams;
///
/// let p = VarianceProcessParams::new(2.0, 0.04, 0.5)?;
/// assert_eq!(p.kappa(), 2.0);
/// assert!(VarianceProcessParams::new(0.0, 0.04, 0.5).is_err());
/// # Ok::<(), wvswap::VarSwapError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VarianceProcessParamsRaw", into = "VarianceProcessParamsRaw")]
pub struct VarianceProcessParams {
    /// Mean-reversion speed κ > 0.
    kappa: f64,
    /// Long-run variance level θ ≥ 0.
    mean_of_var: f64,
    /// Volatility of variance ξ ≥ 0.
    vol_of_var: f64,
}

#[derive(Serialize, Deserialize)]
struct VarianceProcessParamsRaw {
    kappa: f64,
    mean_of_var: f64,
    vol_of_var: f64,
}

impl TryFrom<VarianceProcessParamsRaw> for VarianceProcessParams {
    type Error = VarSwapError;
    fn try_from(raw: VarianceProcessParamsRaw) -> Result<Self, Self::Error> {
        Self::new(raw.kappa, raw.mean_of_var, raw.vol_of_var)
    }
}

impl From<VarianceProcessParams> for VarianceProcessParamsRaw {
    fn from(p: VarianceProcessParams) -> Self {
        Self {
            kappa: p.kappa,
            mean_of_var: p.mean_of_var,
            vol_of_var: p.vol_of_var,
        }
    }
}

impl VarianceProcessParams {
    /// Create a validated parameter set.
    ///
    /// # Errors
    /// Returns [`VarSwapError::InvalidParameter`] if `kappa` is not strictly
    /// positive, or if `mean_of_var` or `vol_of_var` is negative. NaN and
    /// infinities are rejected everywhere.
    pub fn new(kappa: f64, mean_of_var: f64, vol_of_var: f64) -> error::Result<Self> {
        validate_positive(kappa, "kappa")?;
        validate_non_negative(mean_of_var, "mean_of_var")?;
        validate_non_negative(vol_of_var, "vol_of_var")?;
        Ok(Self {
            kappa,
            mean_of_var,
            vol_of_var,
        })
    }

    /// Mean-reversion speed κ.
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Long-run variance level θ.
    pub fn mean_of_var(&self) -> f64 {
        self.mean_of_var
    }

    /// Volatility of variance ξ.
    pub fn vol_of_var(&self) -> f64 {
        self.vol_of_var
    }
}

/// Correlation structure between spot log-returns, implied variance and
/// realized variance innovations.
///
/// Only `rho_spot_imp` enters the pricing analytics (through the skew-stickiness
/// ratio). The full triple is validated as a positive semi-definite correlation
/// matrix so that simulators can factorize [`Correlation::matrix`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CorrelationRaw", into = "CorrelationRaw")]
pub struct Correlation {
    rho_spot_imp: f64,
    rho_spot_real: f64,
    rho_imp_real: f64,
}

#[derive(Serialize, Deserialize)]
struct CorrelationRaw {
    rho_spot_imp: f64,
    #[serde(default)]
    rho_spot_real: f64,
    #[serde(default)]
    rho_imp_real: f64,
}

impl TryFrom<CorrelationRaw> for Correlation {
    type Error = VarSwapError;
    fn try_from(raw: CorrelationRaw) -> Result<Self, Self::Error> {
        Self::new(raw.rho_spot_imp, raw.rho_spot_real, raw.rho_imp_real)
    }
}

impl From<Correlation> for CorrelationRaw {
    fn from(c: Correlation) -> Self {
        Self {
            rho_spot_imp: c.rho_spot_imp,
            rho_spot_real: c.rho_spot_real,
            rho_imp_real: c.rho_imp_real,
        }
    }
}

impl Correlation {
    /// Create a validated correlation structure.
    ///
    /// # Errors
    /// Returns [`VarSwapError::InvalidParameter`] if any correlation lies
    /// outside `[-1, 1]` or the three together do not form a positive
    /// semi-definite correlation matrix.
    pub fn new(rho_spot_imp: f64, rho_spot_real: f64, rho_imp_real: f64) -> error::Result<Self> {
        validate_correlation(rho_spot_imp, "rho_spot_imp")?;
        validate_correlation(rho_spot_real, "rho_spot_real")?;
        validate_correlation(rho_imp_real, "rho_imp_real")?;

        let corr = Self {
            rho_spot_imp,
            rho_spot_real,
            rho_imp_real,
        };
        let min_eigen = corr
            .matrix()
            .symmetric_eigenvalues()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        if min_eigen < -PSD_TOL {
            return Err(VarSwapError::InvalidParameter {
                message: format!(
                    "correlation matrix is not positive semi-definite (min eigenvalue {min_eigen})"
                ),
            });
        }
        Ok(corr)
    }

    /// Spot / implied-variance correlation.
    pub fn rho_spot_imp(&self) -> f64 {
        self.rho_spot_imp
    }

    /// Spot / realized-variance correlation.
    pub fn rho_spot_real(&self) -> f64 {
        self.rho_spot_real
    }

    /// Implied-variance / realized-variance correlation.
    pub fn rho_imp_real(&self) -> f64 {
        self.rho_imp_real
    }

    /// Correlation matrix ordered (spot, implied variance, realized variance).
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            1.0,
            self.rho_spot_imp,
            self.rho_spot_real,
            self.rho_spot_imp,
            1.0,
            self.rho_imp_real,
            self.rho_spot_real,
            self.rho_imp_real,
            1.0,
        )
    }
}

/// A full pricing session: implied and realized variance dynamics plus their
/// correlation with spot.
///
/// Deserializing goes through the validating constructors of each part, so a
/// `ModelParams` loaded from JSON is always usable.
///
/// # Examples
/// ```
/// use wvswap::params::ModelParams;
///
/// let json = r#"{
///     "imp_var":  { "kappa": 2.0, "mean_of_var": 0.04, "vol_of_var": 0.5 },
///     "real_var": { "kappa": 4.0, "mean_of_var": 0.03, "vol_of_var": 0.8 },
///     "corr":     { "rho_spot_imp": -0.7 }
/// }"#;
/// let params: ModelParams = serde_json::from_str(json).unwrap();
/// assert_eq!(params.corr.rho_spot_imp(), -0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Dynamics of the implied instantaneous variance.
    pub imp_var: VarianceProcessParams,
    /// Dynamics of the realized instantaneous variance.
    pub real_var: VarianceProcessParams,
    /// Spot / variance correlation structure.
    pub corr: Correlation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_params_accessors() {
        let p = VarianceProcessParams::new(2.0, 0.04, 0.5).unwrap();
        assert_eq!(p.kappa(), 2.0);
        assert_eq!(p.mean_of_var(), 0.04);
        assert_eq!(p.vol_of_var(), 0.5);
    }

    #[test]
    fn process_params_allow_degenerate_levels() {
        let p = VarianceProcessParams::new(1.0, 0.0, 0.0).unwrap();
        assert_eq!(p.mean_of_var(), 0.0);
        assert_eq!(p.vol_of_var(), 0.0);
    }

    #[test]
    fn process_params_reject_bad_kappa() {
        assert!(VarianceProcessParams::new(0.0, 0.04, 0.5).is_err());
        assert!(VarianceProcessParams::new(-1.0, 0.04, 0.5).is_err());
        assert!(VarianceProcessParams::new(f64::NAN, 0.04, 0.5).is_err());
    }

    #[test]
    fn process_params_reject_negative_levels() {
        assert!(VarianceProcessParams::new(2.0, -0.01, 0.5).is_err());
        assert!(VarianceProcessParams::new(2.0, 0.04, -0.5).is_err());
        assert!(VarianceProcessParams::new(2.0, f64::INFINITY, 0.5).is_err());
    }

    #[test]
    fn correlation_accessors_and_matrix() {
        let c = Correlation::new(-0.7, -0.6, 0.9).unwrap();
        assert_eq!(c.rho_spot_imp(), -0.7);
        assert_eq!(c.rho_spot_real(), -0.6);
        assert_eq!(c.rho_imp_real(), 0.9);
        let m = c.matrix();
        assert_eq!(m[(0, 1)], -0.7);
        assert_eq!(m[(1, 0)], -0.7);
        assert_eq!(m[(0, 2)], -0.6);
        assert_eq!(m[(1, 2)], 0.9);
        assert_eq!(m[(2, 2)], 1.0);
    }

    #[test]
    fn correlation_boundary_values() {
        assert!(Correlation::new(-1.0, 0.0, 0.0).is_ok());
        assert!(Correlation::new(1.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn correlation_out_of_range_rejected() {
        assert!(Correlation::new(1.5, 0.0, 0.0).is_err());
        assert!(Correlation::new(0.0, -1.01, 0.0).is_err());
        assert!(Correlation::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn correlation_not_psd_rejected() {
        // Pairwise valid but jointly inconsistent.
        let err = Correlation::new(0.9, 0.9, -0.9).unwrap_err();
        assert!(format!("{err}").contains("positive semi-definite"));
    }

    #[test]
    fn serde_round_trip() {
        let p = VarianceProcessParams::new(2.0, 0.04, 0.5).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let p2: VarianceProcessParams = serde_json::from_str(&json).unwrap();
        assert_eq!(p, p2);

        let c = Correlation::new(-0.7, -0.6, 0.9).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let c2: Correlation = serde_json::from_str(&json).unwrap();
        assert_eq!(c, c2);
    }

    #[test]
    fn serde_rejects_invalid_kappa() {
        let json = r#"{"kappa":0.0,"mean_of_var":0.04,"vol_of_var":0.5}"#;
        assert!(serde_json::from_str::<VarianceProcessParams>(json).is_err());
    }

    #[test]
    fn serde_rejects_invalid_correlation() {
        let json = r#"{"rho_spot_imp":-1.2}"#;
        assert!(serde_json::from_str::<Correlation>(json).is_err());
    }

    #[test]
    fn serde_correlation_defaults_missing_pairs_to_zero() {
        let c: Correlation = serde_json::from_str(r#"{"rho_spot_imp":-0.5}"#).unwrap();
        assert_eq!(c.rho_spot_imp(), -0.5);
        assert_eq!(c.rho_spot_real(), 0.0);
        assert_eq!(c.rho_imp_real(), 0.0);
    }

    #[test]
    fn model_params_rejects_nested_invalid() {
        let json = r#"{
            "imp_var":  {"kappa": 2.0, "mean_of_var": 0.04, "vol_of_var": 0.5},
            "real_var": {"kappa": -4.0, "mean_of_var": 0.03, "vol_of_var": 0.8},
            "corr":     {"rho_spot_imp": -0.7}
        }"#;
        assert!(serde_json::from_str::<ModelParams>(json).is_err());
    }
}
