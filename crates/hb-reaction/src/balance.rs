//! Reactor flow, mass and energy balance terms.
//!
//! The balance functions return the instantaneous right-hand side of the
//! reactor balance equations with the reactor area as independent variable.
//! Integrating them along the reactor is left to the caller.

use crate::error::{ReactionResult, checked_div};

/// Molar flow rate through the reactor cross-section: `u * c * area`.
#[inline]
pub fn flow_rate(u: f64, c: f64, area: f64) -> f64 {
    u * c * area
}

/// Mass balance term `r_ammonia * eta * area_r / 2 * f_n`, where `f_n` is the
/// flow rate at the reactor inlet concentration `c_0`.
pub fn mass_balance(area_r: f64, r_ammonia: f64, eta: f64, u: f64, c_0: f64) -> f64 {
    let f_n = flow_rate(u, c_0, area_r);
    r_ammonia * eta * area_r / 2.0 * f_n
}

/// Energy balance term `-enthalpy * eta * r_ammonia / f_t * cp_mix`.
///
/// Fails with `DivisionByZero` when the flow rate `f_t` is zero, i.e. when any
/// of `u`, `c_0` or `area_r` is zero.
pub fn energy_balance(
    area_r: f64,
    r_ammonia: f64,
    enthalpy: f64,
    eta: f64,
    u: f64,
    c_0: f64,
    cp_mix: f64,
) -> ReactionResult<f64> {
    let f_t = flow_rate(u, c_0, area_r);
    let heat = checked_div(-enthalpy * eta * r_ammonia, f_t, "reactor flow rate")?;
    Ok(heat * cp_mix)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use hb_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn flow_rate_is_linear_in_each_argument(
            u in -1e3_f64..1e3,
            c in -1e3_f64..1e3,
            area in -1e3_f64..1e3,
            k in -1e2_f64..1e2,
        ) {
            let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
            let base = flow_rate(u, c, area);
            prop_assert!(nearly_equal(flow_rate(k * u, c, area), k * base, tol));
            prop_assert!(nearly_equal(flow_rate(u, k * c, area), k * base, tol));
            prop_assert!(nearly_equal(flow_rate(u, c, k * area), k * base, tol));
        }

        #[test]
        fn balances_are_deterministic(
            area in 1e-3_f64..10.0,
            r in -1e3_f64..1e3,
            eta in 0.0_f64..1.0,
            u in 1e-3_f64..10.0,
            c in 1e-3_f64..10.0,
        ) {
            let m1 = mass_balance(area, r, eta, u, c);
            let m2 = mass_balance(area, r, eta, u, c);
            prop_assert_eq!(m1.to_bits(), m2.to_bits());

            let e1 = energy_balance(area, r, -92.22, eta, u, c, 35.0).unwrap();
            let e2 = energy_balance(area, r, -92.22, eta, u, c, 35.0).unwrap();
            prop_assert_eq!(e1.to_bits(), e2.to_bits());
        }
    }
}
