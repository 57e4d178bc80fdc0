use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Prosess-tellere for inn/ut-strømmen. Speiler glatterens egne
/// total/godkjent-felter, men på eget register for skraping.
pub struct Metrics {
    pub registry: Registry,
    samples_total: IntCounter,
    samples_accepted_total: IntCounter,
    samples_rejected_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let samples_total = IntCounter::new(
            "pose_samples_total",
            "Antall mottatte pose-målinger",
        )
        .unwrap();
        let samples_accepted_total = IntCounter::new(
            "pose_samples_accepted_total",
            "Antall godkjente pose-målinger",
        )
        .unwrap();
        let samples_rejected_total = IntCounter::new(
            "pose_samples_rejected_total",
            "Antall forkastede pose-målinger",
        )
        .unwrap();

        registry.register(Box::new(samples_total.clone())).unwrap();
        registry
            .register(Box::new(samples_accepted_total.clone()))
            .unwrap();
        registry
            .register(Box::new(samples_rejected_total.clone()))
            .unwrap();

        Self {
            registry,
            samples_total,
            samples_accepted_total,
            samples_rejected_total,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Delt default-instans for prosesser som ikke setter opp eget register.
pub static DEFAULT_METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn samples_total(m: &Metrics) -> &IntCounter {
    &m.samples_total
}

pub fn samples_accepted_total(m: &Metrics) -> &IntCounter {
    &m.samples_accepted_total
}

pub fn samples_rejected_total(m: &Metrics) -> &IntCounter {
    &m.samples_rejected_total
}
