use std::time::Instant;

use poseavg_core::models::Axis;
use poseavg_core::{PoseSample, PoseSmoother, Reject, SmootherConfig};

fn s(x: f64, y: f64, z: f64) -> PoseSample {
    PoseSample::new(x, y, z)
}

#[test]
fn test_first_sample_always_accepted() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());

    // Ingen historikk → ingen statistikk å avvise mot
    let avg = sm.observe(s(1.0, 2.0, 0.5)).expect("første måling skal godkjennes");

    assert_eq!((avg.x, avg.y, avg.z), (1.0, 2.0, 0.5));
    assert_eq!(sm.total(), 1);
    assert_eq!(sm.accepted(), 1);
}

#[test]
fn test_window_caps_at_max_positions() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());
    let t0 = Instant::now(); // samme ankomsttid for hele sekvensen – ingen pauser

    // Seks nesten identiske målinger: alle godkjennes, den sjette kaster
    // den eldste – vinduet blir stående på 5
    for i in 0..6 {
        let jitter = i as f64 * 0.01;
        sm.observe_at(t0, s(1.0 + jitter, 2.0, 0.5))
            .expect("nesten identiske målinger skal godkjennes");
        assert!(sm.window().len() <= 5);
    }
    assert_eq!(sm.window().len(), 5);
    assert_eq!(sm.accepted(), 6);
}

#[test]
fn test_emitted_average_matches_window_mean() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());
    let t0 = Instant::now();

    sm.observe_at(t0, s(1.0, 0.0, 0.0)).unwrap();
    sm.observe_at(t0, s(2.0, 0.0, 0.0)).unwrap();
    let avg = sm.observe_at(t0, s(3.0, 0.0, 0.0)).unwrap();

    // snittet ETTER innsetting, ikke før
    assert!((avg.x - 2.0).abs() < 1e-12);
    assert!((avg.x - sm.window().mean(Axis::X)).abs() < 1e-12);
}

#[test]
fn test_outlier_rejected_against_constant_window() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());
    let t0 = Instant::now();
    for _ in 0..5 {
        sm.observe_at(t0, s(1.0, 1.0, 1.0)).unwrap();
    }

    // stdev=0 → gulvet tar over: port = 3.0 * max(0, 1.0) = 3.0
    let err = sm.observe_at(t0, s(10.0, 1.0, 1.0)).unwrap_err();
    assert_eq!(err, Reject::Outlier { axis: Axis::X });

    // Avvisning muterer ingenting annet enn total-telleren
    assert_eq!(sm.window().len(), 5);
    assert!((sm.window().mean(Axis::X) - 1.0).abs() < 1e-12);
    assert_eq!(sm.total(), 6);
    assert_eq!(sm.accepted(), 5);
}

#[test]
fn test_gate_checks_axes_in_order() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());
    let t0 = Instant::now();
    for _ in 0..3 {
        sm.observe_at(t0, s(1.0, 1.0, 1.0)).unwrap();
    }

    // Både x og z er utenfor porten, men x sjekkes først
    let err = sm.observe_at(t0, s(10.0, 1.0, 10.0)).unwrap_err();
    assert_eq!(err, Reject::Outlier { axis: Axis::X });

    // Bare z utenfor → z rapporteres
    let err = sm.observe_at(t0, s(1.0, 1.0, 10.0)).unwrap_err();
    assert_eq!(err, Reject::Outlier { axis: Axis::Z });
}

#[test]
fn test_negative_z_rejected_with_wide_gate_policy() {
    let mut sm = PoseSmoother::new(SmootherConfig::wide_gate());
    let t0 = Instant::now();
    sm.observe_at(t0, s(1.0, 1.0, 0.5)).unwrap();

    // Fysisk krav slår til uansett statistisk avstand
    let err = sm.observe_at(t0, s(1.0, 1.0, -0.1)).unwrap_err();
    assert_eq!(err, Reject::NegativeZ);
    assert_eq!(sm.accepted(), 1);
    assert_eq!(sm.total(), 2);
}

#[test]
fn test_negative_z_allowed_by_default_policy() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());
    let avg = sm.observe(s(1.0, 1.0, -0.1)).unwrap();
    assert!((avg.z + 0.1).abs() < 1e-12);
}

#[test]
fn test_non_finite_sample_rejected() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());
    let t0 = Instant::now();
    sm.observe_at(t0, s(1.0, 1.0, 1.0)).unwrap();

    assert_eq!(
        sm.observe_at(t0, s(f64::NAN, 1.0, 1.0)).unwrap_err(),
        Reject::NonFinite
    );
    assert_eq!(
        sm.observe_at(t0, s(1.0, f64::INFINITY, 1.0)).unwrap_err(),
        Reject::NonFinite
    );

    // NaN/Inf skal ikke ha forgiftet vinduet
    let avg = sm.observe_at(t0, s(1.0, 1.0, 1.0)).unwrap();
    assert!(avg.x.is_finite() && avg.y.is_finite() && avg.z.is_finite());
    assert_eq!(sm.total(), 4);
    assert_eq!(sm.accepted(), 2);
}

#[test]
fn test_counters_accepted_never_exceeds_total() {
    let mut sm = PoseSmoother::new(SmootherConfig::default());
    let t0 = Instant::now();
    let inputs = [
        s(1.0, 1.0, 1.0),
        s(1.1, 1.0, 1.0),
        s(9.0, 1.0, 1.0), // utligger
        s(0.9, 1.0, 1.0),
        s(f64::NAN, 0.0, 0.0),
        s(1.2, 1.0, 1.0),
    ];
    for (i, input) in inputs.iter().enumerate() {
        let _ = sm.observe_at(t0, *input);
        assert!(sm.accepted() <= sm.total());
        assert_eq!(sm.total(), (i + 1) as u64); // nøyaktig én per innkommende
    }
    assert_eq!(sm.accepted(), 4);
}

#[test]
fn test_gate_decision_is_deterministic() {
    // Samme tilstand + samme input ⇒ samme avgjørelse, hver gang
    let feed = [s(1.0, 1.0, 1.0), s(1.2, 0.9, 1.1), s(0.8, 1.1, 0.9)];
    let probe = s(4.5, 1.0, 1.0);
    let t0 = Instant::now();

    let mut a = PoseSmoother::new(SmootherConfig::default());
    let mut b = PoseSmoother::new(SmootherConfig::default());
    for f in feed {
        a.observe_at(t0, f).unwrap();
        b.observe_at(t0, f).unwrap();
    }
    assert_eq!(a.observe_at(t0, probe), b.observe_at(t0, probe));
}
