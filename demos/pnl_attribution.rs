//! Attribute one day of P&L on a vega-hedged variance swap.
//!
//! Demonstrates the core workflow:
//!   1. Load a parameter session from JSON
//!   2. Construct a variance swap
//!   3. Price it across maturities
//!   4. Decompose a day's P&L into theta, var-vega, vanna, gamma and vega hedge
//!
//! Run with: `cargo run --example pnl_attribution`

use wvswap::params::ModelParams;
use wvswap::swap::{VarianceSwap, WeightedVarianceSwap};
use wvswap::PnlInputs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ---------------------------------------------------------------
    // 1. Parameter session
    // ---------------------------------------------------------------

    let params: ModelParams = serde_json::from_str(
        r#"{
            "imp_var":  { "kappa": 2.0, "mean_of_var": 0.04, "vol_of_var": 0.6 },
            "real_var": { "kappa": 5.0, "mean_of_var": 0.035, "vol_of_var": 1.1 },
            "corr":     { "rho_spot_imp": -0.75, "rho_spot_real": -0.6, "rho_imp_real": 0.8 }
        }"#,
    )?;
    let swap = VarianceSwap::from_params(&params);

    // ---------------------------------------------------------------
    // 2. Term structure of fair value and var-vega
    // ---------------------------------------------------------------

    let taus = [0.1, 0.25, 0.5, 1.0, 2.0];
    let imp_var = [0.06; 5];
    let prices = swap.price(&imp_var, &taus)?;
    let vegas = swap.var_vega(&taus);

    println!("--- Variance swap, imp_var = 0.06 ---\n");
    println!("{:>8} {:>12} {:>12}", "tau", "price", "var_vega");
    for ((tau, p), v) in taus.iter().zip(&prices).zip(&vegas) {
        println!("{tau:>8.2} {p:>12.6} {v:>12.6}");
    }

    // ---------------------------------------------------------------
    // 3. One trading day across three spot scenarios
    // ---------------------------------------------------------------

    let dt = 1.0 / 252.0;
    let inputs = PnlInputs {
        f_0: &[100.0, 100.0, 100.0],
        f_t: &[98.0, 100.0, 101.5],
        real_var_0: &[0.05, 0.05, 0.05],
        imp_var_0: &[0.06, 0.06, 0.06],
        tau_0: &[0.5, 0.5, 0.5],
        imp_var_t: &[0.066, 0.06, 0.057],
        tau_t: &[0.5 - dt, 0.5 - dt, 0.5 - dt],
    };
    let attr = swap.attribute_pnl(&inputs)?;

    println!("\n--- One-day P&L attribution ---\n");
    println!(
        "{:>8} {:>11} {:>11} {:>11} {:>11} {:>11} {:>11}",
        "f_t", "theta", "var_vega", "vanna", "gamma", "vega_hedge", "total"
    );
    for i in 0..attr.len() {
        println!(
            "{:>8.2} {:>11.3e} {:>11.3e} {:>11.3e} {:>11.3e} {:>11.3e} {:>11.3e}",
            inputs.f_t[i],
            attr.theta[i],
            attr.var_vega[i],
            attr.vanna[i],
            attr.gamma[i],
            attr.vega_hedge[i],
            attr.total[i],
        );
    }

    let max_residual = attr
        .residual()
        .iter()
        .fold(0.0_f64, |acc, r| acc.max(r.abs()));
    println!("\nmax |total - sum of components| = {max_residual:.1e}");

    Ok(())
}
