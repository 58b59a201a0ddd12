//! Equilibrium constant of the synthesis reaction.

use crate::error::{ReactionResult, checked_div};

/// Standard-state reaction data used as the Van't Hoff reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardState {
    /// Standard reaction enthalpy [kJ/mol]
    pub delta_h: f64,
    /// Standard Gibbs energy of reaction [kJ/mol]
    pub delta_g: f64,
    /// Gas constant [J/(mol K)]
    pub r: f64,
    /// Reference temperature [K]
    pub t: f64,
}

impl Default for StandardState {
    fn default() -> Self {
        Self {
            delta_h: -92.22,
            delta_g: -32.8,
            r: 8.314,
            t: 298.15,
        }
    }
}

impl StandardState {
    /// Equilibrium constant at the reference temperature, `exp(-ΔG° / (R T°))`.
    pub fn reference_constant(&self) -> f64 {
        ((-self.delta_g * 1000.0) / (self.t * self.r)).exp()
    }

    /// Shift the reference constant to `t_exp` with the Van't Hoff equation.
    ///
    /// The shift is `(-1000 ΔH° / R) (1/T° - 1/t_exp)`, so for the exothermic
    /// reaction the constant grows with temperature.
    ///
    /// Fails with `DivisionByZero` when `t_exp` is zero.
    pub fn equilibrium_constant(&self, t_exp: f64) -> ReactionResult<f64> {
        let inv_t_exp = checked_div(1.0, t_exp, "equilibrium temperature")?;
        let v_hoff = (-1000.0 * self.delta_h / self.r) * ((1.0 / self.t) - inv_t_exp);
        Ok(self.reference_constant() * v_hoff.exp())
    }
}

/// Equilibrium constant at `t_exp` from the default standard state.
pub fn equilibrium_constant(t_exp: f64) -> ReactionResult<f64> {
    StandardState::default().equilibrium_constant(t_exp)
}

/// Empirical correlation for log₁₀ of the equilibrium constant:
///
/// ```text
/// -2.792312 ln T - 5.527463e-5 T + 1.837742e-5 T² + 2002.4 / T + 2.799
/// ```
///
/// Kept as an alternative to the Van't Hoff form; it does not converge when
/// used directly as `k_eq`. Fails with `DivisionByZero` when `t` is zero.
pub fn log10_equilibrium_constant(t: f64) -> ReactionResult<f64> {
    let inv_t = checked_div(2002.4, t, "correlation temperature")?;
    Ok(-2.792312 * t.ln() - 5.527463 * 10f64.powf(-5.0) * t
        + 1.837742 * 10f64.powf(-5.0) * t.powf(2.0)
        + inv_t
        + 2.799)
}
