//! Empirical catalyst effectiveness factor.

/// Coefficients `b0..b6` of the effectiveness polynomial
/// `b0 + b1 T + b2 X + b3 T² + b4 X² + b5 T³ + b6 X³`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalystCoefficients {
    pub b: [f64; 7],
}

impl Default for CatalystCoefficients {
    fn default() -> Self {
        Self {
            b: [-8.21, 0.038, 6.19, -5.35, -20.8, 2.38e-8, 27.9],
        }
    }
}

impl CatalystCoefficients {
    /// Effectiveness at temperature `t` and conversion `x`.
    pub fn efficiency(&self, t: f64, x: f64) -> f64 {
        let b = &self.b;
        b[0] + b[1] * t + b[2] * x + b[3] * t.powf(2.0) + b[4] * x.powf(2.0)
            + b[5] * t.powf(3.0)
            + b[6] * x.powf(3.0)
    }
}

/// Conversion assumed when none is given.
pub const DEFAULT_CONVERSION: f64 = 1.0;

/// Catalyst effectiveness at temperature `t` and full conversion.
pub fn catalyst_eff(t: f64) -> f64 {
    catalyst_eff_at(t, DEFAULT_CONVERSION)
}

/// Catalyst effectiveness at temperature `t` and conversion `x`.
pub fn catalyst_eff_at(t: f64, x: f64) -> f64 {
    CatalystCoefficients::default().efficiency(t, x)
}
