//! Evaluation of every reactor term at a single operating point.
//!
//! An [`OperatingPoint`] bundles the arguments of the individual equations
//! together with their parameter sets, and [`OperatingPoint::evaluate`] chains
//! them in dependency order: activities, rate and equilibrium constants,
//! ammonia rate, catalyst effectiveness, then the balance terms.

use crate::balance::{energy_balance, flow_rate, mass_balance};
use crate::catalyst::{CatalystCoefficients, DEFAULT_CONVERSION};
use crate::equilibrium::StandardState;
use crate::error::ReactionResult;
use crate::fugacity::{Activities, Fugacities, fugacities};
use crate::kinetics::{ArrheniusParams, ammonia_rate};
use crate::reagents::Reagents;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inputs for one evaluation of the reactor equations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OperatingPoint {
    /// Temperature, in the working unit of the correlations
    pub temperature: f64,
    /// Pressure, in the working unit of the fugacity fits
    pub pressure: f64,
    /// Molar amounts of the gas mixture
    pub reagents: Reagents,
    /// Rate law exponent
    pub alpha: f64,
    /// Reactor cross-sectional area
    pub area: f64,
    /// Superficial gas velocity
    pub velocity: f64,
    /// Inlet concentration
    pub inlet_concentration: f64,
    /// Reaction enthalpy
    pub enthalpy: f64,
    /// Mixture heat capacity
    pub cp_mix: f64,
    /// Conversion fed to the catalyst effectiveness polynomial
    pub conversion: f64,
    pub arrhenius: ArrheniusParams,
    pub standard_state: StandardState,
    pub catalyst: CatalystCoefficients,
}

impl Default for OperatingPoint {
    /// Stoichiometric 3:1 feed with a trace of ammonia at 723.15 K and a
    /// pressure of 200 in the working unit of the fugacity fits.
    fn default() -> Self {
        let standard_state = StandardState::default();
        Self {
            temperature: 723.15,
            pressure: 200.0,
            reagents: Reagents::from_species(3.0, 1.0, 0.05),
            alpha: 0.5,
            area: 1.0,
            velocity: 1.0,
            inlet_concentration: 1.0,
            enthalpy: standard_state.delta_h,
            cp_mix: 35.0,
            conversion: DEFAULT_CONVERSION,
            arrhenius: ArrheniusParams::default(),
            standard_state,
            catalyst: CatalystCoefficients::default(),
        }
    }
}

/// Every intermediate and final term computed for an operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactorTerms {
    pub fugacities: Fugacities,
    pub activities: Activities,
    /// Forward rate constant
    pub rate_constant: f64,
    pub equilibrium_constant: f64,
    /// Ammonia formation rate
    pub rate: f64,
    /// Catalyst effectiveness
    pub efficiency: f64,
    pub flow_rate: f64,
    /// Mass balance term (instantaneous, not integrated)
    pub mass_term: f64,
    /// Energy balance term (instantaneous, not integrated)
    pub energy_term: f64,
}

impl OperatingPoint {
    /// Evaluate all reactor terms. The first failing equation aborts the
    /// evaluation and its error is returned unchanged.
    pub fn evaluate(&self) -> ReactionResult<ReactorTerms> {
        let t = self.temperature;
        let phi = fugacities(t, self.pressure);
        let a = Activities::from_fugacities(&phi, &self.reagents)?;

        let k = self.arrhenius.rate_constant(t);
        let k_eq = self.standard_state.equilibrium_constant(t)?;
        let rate = ammonia_rate(k, k_eq, a.n2, a.h2, a.nh3, self.alpha)?;
        let eta = self.catalyst.efficiency(t, self.conversion);

        let (u, c_0, area) = (self.velocity, self.inlet_concentration, self.area);
        let terms = ReactorTerms {
            fugacities: phi,
            activities: a,
            rate_constant: k,
            equilibrium_constant: k_eq,
            rate,
            efficiency: eta,
            flow_rate: flow_rate(u, c_0, area),
            mass_term: mass_balance(area, rate, eta, u, c_0),
            energy_term: energy_balance(area, rate, self.enthalpy, eta, u, c_0, self.cp_mix)?,
        };
        trace!(t, p = self.pressure, rate, "evaluated operating point");
        Ok(terms)
    }

    /// Copy of this point at another temperature.
    pub fn with_temperature(&self, temperature: f64) -> Self {
        Self {
            temperature,
            ..self.clone()
        }
    }

    /// Copy of this point at another pressure.
    pub fn with_pressure(&self, pressure: f64) -> Self {
        Self {
            pressure,
            ..self.clone()
        }
    }
}

/// Evaluate many operating points, keeping the input order.
///
/// Points are independent, so with the `parallel` feature they are spread
/// over the rayon thread pool.
pub fn evaluate_batch(points: &[OperatingPoint]) -> Vec<ReactionResult<ReactorTerms>> {
    debug!(points = points.len(), "evaluating operating point batch");

    #[cfg(feature = "parallel")]
    let results: Vec<_> = points.par_iter().map(OperatingPoint::evaluate).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = points.iter().map(OperatingPoint::evaluate).collect();

    results
}
