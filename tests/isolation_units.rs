//! Operating-speed scenarios. The model only compares like with like; these
//! tests pin what happens when the caller converts correctly and what a
//! plain rpm/60 comparison against ω₀ would produce instead.

use vibroiso::core::model::{isolation_effectiveness, transmissibility, IsolationRegion};
use vibroiso::core::oscillator::OscillatorParameters;
use vibroiso::core::units::OperatingSpeed;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn machine() -> OscillatorParameters {
    OscillatorParameters::new(10_000.0, 10.0, 0.05).unwrap()
}

#[test]
fn natural_frequency_of_the_machine_mount() {
    assert!(approx_eq(machine().natural_frequency(), 31.622776601683793, 1e-12));
}

#[test]
fn raw_model_value_for_ten_units_of_frequency() {
    let p = machine();
    let point = isolation_effectiveness(10.0, p.natural_frequency(), p.damping_ratio()).unwrap();
    assert!(approx_eq(point.frequency_ratio, 0.31622776601683794, 1e-15));
    assert!(approx_eq(point.isolation_effectiveness, 1.1109809486713655, 1e-12));
    assert!(point.isolation_effectiveness > 1.0);
    assert_eq!(point.region(), IsolationRegion::Amplification);
}

#[test]
fn six_hundred_rpm_in_consistent_units() {
    let p = machine();
    let point = OperatingSpeed::Rpm(600.0).effectiveness(&p).unwrap();
    assert!(approx_eq(point.operating_frequency, 62.83185307179586, 1e-12));
    assert!(approx_eq(point.frequency_ratio, 1.9869176531592203, 1e-12));
    assert!(approx_eq(point.isolation_effectiveness, 0.3450795999604625, 1e-12));
    assert_eq!(point.region(), IsolationRegion::Isolation);
}

#[test]
fn rpm_over_sixty_against_rad_per_sec_is_a_different_answer() {
    let p = machine();
    let mismatched = isolation_effectiveness(
        OperatingSpeed::Rpm(600.0).to_hertz(),
        p.natural_frequency(),
        p.damping_ratio(),
    )
    .unwrap();
    let consistent = OperatingSpeed::Rpm(600.0).effectiveness(&p).unwrap();
    assert!(approx_eq(
        consistent.frequency_ratio / mismatched.frequency_ratio,
        2.0 * std::f64::consts::PI,
        1e-12
    ));
    // one says "amplifies", the other says "isolates"
    assert_ne!(mismatched.region(), consistent.region());
}

#[test]
fn every_unit_reaches_the_same_operating_point() {
    let p = machine();
    let a = OperatingSpeed::Rpm(600.0).effectiveness(&p).unwrap();
    let b = OperatingSpeed::Hertz(10.0).effectiveness(&p).unwrap();
    let c = OperatingSpeed::RadPerSec(20.0 * std::f64::consts::PI).effectiveness(&p).unwrap();
    for other in [b, c] {
        assert!(approx_eq(a.isolation_effectiveness, other.isolation_effectiveness, 1e-12));
    }
}

#[test]
fn effectiveness_is_transmissibility_at_one_point() {
    let p = machine();
    for w in [0.0, 5.0, 31.622776601683793, 44.72, 300.0] {
        let point = isolation_effectiveness(w, p.natural_frequency(), p.damping_ratio()).unwrap();
        assert_eq!(
            point.isolation_effectiveness,
            transmissibility(w / p.natural_frequency(), p.damping_ratio())
        );
    }
}

#[test]
fn stopped_machine_has_unit_effectiveness() {
    let point = OperatingSpeed::Rpm(0.0).effectiveness(&machine()).unwrap();
    assert_eq!(point.frequency_ratio, 0.0);
    assert_eq!(point.isolation_effectiveness, 1.0);
}

#[test]
fn undamped_mount_at_resonance_is_infinite() {
    let p = OscillatorParameters::new(1.0, 1.0, 0.0).unwrap();
    let point = OperatingSpeed::RadPerSec(1.0).effectiveness(&p).unwrap();
    assert_eq!(point.isolation_effectiveness, f64::INFINITY);
}

#[test]
fn negative_speed_is_invalid() {
    let err = isolation_effectiveness(-1.0, 10.0, 0.05).unwrap_err();
    assert!(err.to_string().starts_with("Invalid Parameter"));
}
