//! Input validation helpers.
//!
//! Parameter checks use `!is_finite()` to reject NaN, +Inf, and -Inf uniformly.
//! Length checks enforce equal-length observation vectors at the API boundary.

use crate::error::VarSwapError;

/// Validate that a value is strictly positive and finite (rejects NaN, Inf, zero, negatives).
pub(crate) fn validate_positive(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(VarSwapError::InvalidParameter {
            message: format!("{name} must be positive and finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate that a value is non-negative and finite (rejects NaN, Inf, negatives).
pub(crate) fn validate_non_negative(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(VarSwapError::InvalidParameter {
            message: format!("{name} must be non-negative and finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate that a correlation lies in the closed interval [-1, 1].
pub(crate) fn validate_correlation(value: f64, name: &str) -> crate::error::Result<f64> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(VarSwapError::InvalidParameter {
            message: format!("{name} must be in [-1, 1], got {value}"),
        });
    }
    Ok(value)
}

/// Validate that every named slice has the same length, returning that length.
///
/// An empty list of slices has length 0.
pub(crate) fn validate_same_len(slices: &[(&str, &[f64])]) -> crate::error::Result<usize> {
    let Some(&(first_name, first)) = slices.first() else {
        return Ok(0);
    };
    let n = first.len();
    for &(name, s) in &slices[1..] {
        if s.len() != n {
            return Err(VarSwapError::InvalidInput {
                message: format!(
                    "length mismatch: {first_name} has {n} elements, {name} has {}",
                    s.len()
                ),
            });
        }
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_nan_inf() {
        assert!(validate_positive(1.5, "kappa").is_ok());
        assert!(validate_positive(0.0, "kappa").is_err());
        assert!(validate_positive(-1.0, "kappa").is_err());
        assert!(validate_positive(f64::NAN, "kappa").is_err());
        assert!(validate_positive(f64::INFINITY, "kappa").is_err());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(validate_non_negative(0.0, "vol_of_var").unwrap(), 0.0);
        assert!(validate_non_negative(-1e-12, "vol_of_var").is_err());
        assert!(validate_non_negative(f64::NAN, "vol_of_var").is_err());
    }

    #[test]
    fn correlation_bounds_inclusive() {
        assert!(validate_correlation(-1.0, "rho").is_ok());
        assert!(validate_correlation(1.0, "rho").is_ok());
        assert!(validate_correlation(1.0 + 1e-12, "rho").is_err());
        assert!(validate_correlation(f64::NAN, "rho").is_err());
    }

    #[test]
    fn same_len_reports_offender() {
        let a = [1.0, 2.0];
        let b = [1.0];
        let err = validate_same_len(&[("imp_var", &a), ("tau", &b)]).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("imp_var has 2"));
        assert!(msg.contains("tau has 1"));
    }

    #[test]
    fn same_len_empty_and_matching() {
        assert_eq!(validate_same_len(&[]).unwrap(), 0);
        let a: [f64; 0] = [];
        assert_eq!(validate_same_len(&[("f_0", &a), ("f_t", &a)]).unwrap(), 0);
        let c = [1.0, 2.0, 3.0];
        assert_eq!(validate_same_len(&[("f_0", &c), ("f_t", &c)]).unwrap(), 3);
    }
}
