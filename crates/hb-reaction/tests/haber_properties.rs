//! Integration tests for the public equation surface.

use hb_core::{Tolerances, nearly_equal};
use hb_reaction::{
    OperatingPoint, ReactionError, Reagents, Species, activities, ammonia_rate, arrhenius,
    catalyst_eff, catalyst_eff_at, energy_balance, equilibrium_constant, evaluate_batch,
    flow_rate, fugacities, mass_balance, molar_fraction,
};

#[test]
fn flow_rate_reference_value() {
    assert_eq!(flow_rate(2.0, 3.0, 4.0), 24.0);
    assert_eq!(flow_rate(2.0 * 2.0, 3.0, 4.0), 2.0 * flow_rate(2.0, 3.0, 4.0));
}

#[test]
fn molar_fractions_normalize() {
    let reagents = Reagents::from([("H_2", 2.7), ("N_2", 0.9), ("NH_3", 0.4)]);
    let sum: f64 = Species::ALL
        .iter()
        .map(|s| molar_fraction(s.key(), &reagents).unwrap())
        .sum();
    assert!(nearly_equal(sum, 1.0, Tolerances::default()));
}

#[test]
fn missing_species_key() {
    let reagents = Reagents::from([("H_2", 1.0), ("N_2", 1.0), ("NH_3", 1.0)]);
    let err = molar_fraction("O_2", &reagents).unwrap_err();
    assert_eq!(err.to_string(), "Unknown species: O_2");
}

#[test]
fn catalyst_default_conversion() {
    for t in [0.0, 1.0, 298.15, 723.15, 1000.0] {
        assert_eq!(catalyst_eff(t), catalyst_eff_at(t, 1.0));
    }
}

#[test]
fn equilibrium_constant_at_reference_temperature() {
    let k_eq_std = (32800.0_f64 / (298.15 * 8.314)).exp();
    let k_eq = equilibrium_constant(298.15).unwrap();
    assert!(nearly_equal(k_eq, k_eq_std, Tolerances::default()));
}

#[test]
fn ammonia_rate_with_unit_activities() {
    let (k, k_eq) = (0.8, 3.0);
    let r = ammonia_rate(k, k_eq, 1.0, 1.0, 1.0, 0.5).unwrap();
    assert_eq!(r, 2.0 * k * (k_eq.powf(2.0) - 1.0));
}

#[test]
fn energy_balance_zero_flow() {
    let err = energy_balance(0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, ReactionError::DivisionByZero { .. }));
}

#[test]
fn every_equation_is_deterministic() {
    let reagents = Reagents::from_species(3.0, 1.0, 0.2);
    for _ in 0..3 {
        assert_eq!(arrhenius(1e-3).to_bits(), arrhenius(1e-3).to_bits());
        assert_eq!(
            equilibrium_constant(650.0).unwrap().to_bits(),
            equilibrium_constant(650.0).unwrap().to_bits()
        );
        assert_eq!(fugacities(650.0, 180.0), fugacities(650.0, 180.0));
        assert_eq!(
            activities(650.0, 180.0, &reagents),
            activities(650.0, 180.0, &reagents)
        );
        assert_eq!(
            mass_balance(2.0, 0.3, 0.9, 1.5, 0.7).to_bits(),
            mass_balance(2.0, 0.3, 0.9, 1.5, 0.7).to_bits()
        );
    }
}

#[test]
fn manual_chain_matches_operating_point() {
    let point = OperatingPoint {
        temperature: 5e-4,
        pressure: 50.0,
        reagents: Reagents::from_species(3.0, 1.0, 0.1),
        ..OperatingPoint::default()
    };
    let terms = point.evaluate().unwrap();

    let a = activities(point.temperature, point.pressure, &point.reagents).unwrap();
    let k = arrhenius(point.temperature);
    let k_eq = equilibrium_constant(point.temperature).unwrap();
    let r = ammonia_rate(k, k_eq, a.n2, a.h2, a.nh3, point.alpha).unwrap();
    let eta = catalyst_eff(point.temperature);
    let q = energy_balance(
        point.area,
        r,
        point.enthalpy,
        eta,
        point.velocity,
        point.inlet_concentration,
        point.cp_mix,
    )
    .unwrap();

    assert_eq!(terms.rate, r);
    assert_eq!(terms.energy_term, q);
}

#[test]
fn batch_matches_serial_evaluation() {
    let base = OperatingPoint::default();
    let points: Vec<OperatingPoint> = (0..64)
        .map(|i| base.with_temperature(600.0 + i as f64 * 2.5))
        .collect();

    let batch = evaluate_batch(&points);
    let serial: Vec<_> = points.iter().map(OperatingPoint::evaluate).collect();
    assert_eq!(batch, serial);
}
