//! hb-reaction: Haber–Bosch ammonia synthesis equations.
//!
//! Provides:
//! - Flow rate and reactor mass/energy balance terms
//! - Arrhenius rate constant and the reversible ammonia rate law
//! - Equilibrium constant (Van't Hoff shift from the standard state)
//! - Fugacity coefficients, molar fractions and activities
//! - Empirical catalyst effectiveness
//! - Operating point evaluation, batches and parameter sweeps
//!
//! Every equation is a pure function of its arguments. Arithmetic faults that
//! `f64` would silently absorb (a zero divisor, a missing species) are returned
//! as [`ReactionError`]; NaN and infinity from domain errors or overflow are
//! passed through untouched.
//!
//! # Example
//!
//! ```
//! use hb_reaction::{Reagents, activities, ammonia_rate, arrhenius, equilibrium_constant};
//!
//! let reagents = Reagents::from_species(3.0, 1.0, 0.05);
//! let a = activities(723.15, 200.0, &reagents).unwrap();
//! let k_eq = equilibrium_constant(723.15).unwrap();
//! let r = ammonia_rate(arrhenius(723.15), k_eq, a.n2, a.h2, a.nh3, 0.5).unwrap();
//! assert!(r.is_finite());
//! ```

pub mod balance;
pub mod catalyst;
pub mod equilibrium;
pub mod error;
pub mod fugacity;
pub mod kinetics;
pub mod operating_point;
pub mod reagents;
pub mod species;
pub mod sweeps;

// Re-exports for ergonomics
pub use balance::{energy_balance, flow_rate, mass_balance};
pub use catalyst::{CatalystCoefficients, DEFAULT_CONVERSION, catalyst_eff, catalyst_eff_at};
pub use equilibrium::{StandardState, equilibrium_constant, log10_equilibrium_constant};
pub use error::{ReactionError, ReactionResult};
pub use fugacity::{Activities, Fugacities, activities, fugacities};
pub use kinetics::{ArrheniusParams, ammonia_rate, arrhenius};
pub use operating_point::{OperatingPoint, ReactorTerms, evaluate_batch};
pub use reagents::{Reagents, molar_fraction};
pub use species::Species;
pub use sweeps::{
    SweepDefinition, SweepError, SweepParameter, SweepResult, SweepType, execute_sweep,
};

/// Entry point for running the library as a program. Performs no computation.
pub fn run() {
    tracing::debug!("nothing to run");
}
