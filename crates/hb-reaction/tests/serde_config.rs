//! Operating point configuration through serde (requires the `serde` feature).

#![cfg(feature = "serde")]

use hb_reaction::{ArrheniusParams, OperatingPoint, Reagents, StandardState};

#[test]
fn partial_config_fills_defaults() {
    let json = r#"{
        "temperature": 650.0,
        "reagents": { "items": [["H_2", 3.0], ["N_2", 1.0], ["NH_3", 0.2]] }
    }"#;
    let point: OperatingPoint = serde_json::from_str(json).unwrap();

    assert_eq!(point.temperature, 650.0);
    assert_eq!(point.reagents, Reagents::from_species(3.0, 1.0, 0.2));
    assert_eq!(point.arrhenius, ArrheniusParams::default());
    assert_eq!(point.standard_state, StandardState::default());
    assert_eq!(point.alpha, 0.5);
}

#[test]
fn serialized_point_reloads_identically() {
    let point = OperatingPoint::default().with_pressure(120.0);
    let json = serde_json::to_string(&point).unwrap();
    let back: OperatingPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);
    assert_eq!(back.evaluate(), point.evaluate());
}
