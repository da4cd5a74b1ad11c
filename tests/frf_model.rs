use vibroiso::core::model::{
    frequency_ratios, isolation_onset_frequency, magnitude, phase_degrees, receptance,
    transmissibility,
};
use vibroiso::core::oscillator::natural_frequency;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

const DAMPINGS: [f64; 6] = [0.0, 1e-4, 0.01, 0.05, 0.3, 1.5];

fn ratios() -> Vec<f64> {
    (0..=400).map(|i| i as f64 * 0.025).collect()
}

#[test]
fn natural_frequency_squared_is_k_over_m() {
    for k in [0.1, 1.0, 37.5, 1.0e4, 2.5e7] {
        for m in [0.1, 1.0, 10.0, 850.0] {
            let w0 = natural_frequency(k, m).unwrap();
            assert!(w0.is_finite() && w0 > 0.0);
            assert!(approx_eq(w0 * w0, k / m, 1e-12 * (k / m)), "k={k} m={m}");
        }
    }
}

#[test]
fn natural_frequency_rejects_non_positive() {
    assert!(natural_frequency(0.0, 1.0).is_err());
    assert!(natural_frequency(-5.0, 1.0).is_err());
    assert!(natural_frequency(1.0, 0.0).is_err());
}

#[test]
fn transmissibility_is_never_negative() {
    for d in DAMPINGS {
        for r in ratios() {
            let t = transmissibility(r, d);
            assert!(t >= 0.0, "T({r}, {d}) = {t}");
            assert!(!t.is_nan(), "T({r}, {d}) is NaN");
        }
    }
}

#[test]
fn zero_frequency_transmits_everything() {
    for d in DAMPINGS {
        assert_eq!(transmissibility(0.0, d), 1.0);
        assert_eq!(magnitude(receptance(0.0, d)), 1.0);
    }
}

#[test]
fn transmissibility_decays_past_isolation_onset() {
    let onset = isolation_onset_frequency(1.0);
    for d in DAMPINGS {
        let mut prev = f64::INFINITY;
        for i in 1..2000 {
            let r = onset + i as f64 * 0.05;
            let t = transmissibility(r, d);
            assert!(t < 1.0 && t <= prev, "d={d} r={r} t={t} prev={prev}");
            prev = t;
        }
        assert!(transmissibility(1.0e6, d) < 1e-5);
    }
}

#[test]
fn undamped_resonance_is_unbounded_not_a_fault() {
    let y = receptance(1.0, 0.0);
    assert_eq!(magnitude(y), f64::INFINITY);
    assert_eq!(transmissibility(1.0, 0.0), f64::INFINITY);
    assert!(!phase_degrees(y).is_nan());
}

#[test]
fn spike_grows_as_sweep_approaches_resonance() {
    let mut prev = 0.0;
    for eps in [1e-1, 1e-2, 1e-4, 1e-6, 1e-8] {
        let m = magnitude(receptance(1.0 - eps, 0.0));
        assert!(m > prev, "eps={eps}: {m} <= {prev}");
        prev = m;
    }
}

#[test]
fn receptance_and_transmissibility_are_distinct() {
    for d in [0.01, 0.05, 0.3] {
        for r in ratios().into_iter().skip(1) {
            let y = magnitude(receptance(r, d));
            let t = transmissibility(r, d);
            assert!((y - t).abs() > 1e-9, "|Y| and T coincide at r={r} d={d}");
        }
    }
}

#[test]
fn phase_stays_in_half_open_range() {
    for d in DAMPINGS {
        for r in ratios() {
            let p = phase_degrees(receptance(r, d));
            assert!(p > -180.0 && p <= 180.0, "phase({r}, {d}) = {p}");
        }
    }
}

#[test]
fn unit_oscillator_reference_values() {
    let w0 = natural_frequency(1.0, 1.0).unwrap();
    assert_eq!(w0, 1.0);
    assert!(approx_eq(transmissibility(1.0, 0.01), 50.0, 0.02));
    assert_eq!(transmissibility(0.0, 0.01), 1.0);
    assert!(approx_eq(transmissibility(10.0, 0.01), 0.010301, 1e-6));
}

#[test]
fn ratios_follow_the_sweep() {
    let r = frequency_ratios(&[0.0, 15.811388300841896, 31.622776601683793], 31.622776601683793);
    assert_eq!(r[0], 0.0);
    assert!(approx_eq(r[1], 0.5, 1e-15));
    assert_eq!(r[2], 1.0);
}

const EXTREME_DAMPINGS: [f64; 9] = [0.0, 5e-324, 1e-300, 1e-200, 1e-20, 0.01, 1e20, 1e300, f64::MAX];
const EXTREME_RATIOS: [f64; 12] =
    [0.0, 1e-300, 0.5, 1.0 - 1e-16, 1.0, 1.0 + 2.2e-16, 2.0, 1e10, 1e154, 1e200, 1e300, f64::MAX];

#[test]
fn degenerate_inputs_never_produce_nan() {
    for d in EXTREME_DAMPINGS {
        for r in EXTREME_RATIOS {
            let y = receptance(r, d);
            let (m, p, t) = (magnitude(y), phase_degrees(y), transmissibility(r, d));
            assert!(!y.re.is_nan() && !y.im.is_nan(), "Y({r}, {d}) = {y}");
            assert!(!m.is_nan() && !p.is_nan() && !t.is_nan(), "r={r} d={d}: |Y|={m} phase={p} T={t}");
            assert!(p > -180.0 && p <= 180.0, "phase({r}, {d}) = {p}");
            assert!(t >= 0.0, "T({r}, {d}) = {t}");
        }
    }
}

#[test]
fn near_zero_damping_peak_agrees_with_transmissibility() {
    for d in [1e-300, 1e-200, 1e-100, 1e-20] {
        let y = receptance(1.0, d);
        let t = transmissibility(1.0, d);
        assert!(t.is_finite() && magnitude(y).is_finite(), "d={d}");
        assert!(approx_eq(magnitude(y) / t, 1.0, 1e-12), "d={d}: |Y|={} T={t}", magnitude(y));
        assert!(approx_eq(phase_degrees(y), -90.0, 1e-9), "d={d}");
    }
}
