use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AveragedPose, Axis, PoseSample};
use crate::window::PoseWindow;

/// Fast policy, satt ved oppstart og aldri endret i drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// Maks antall posisjoner i vinduet.
    pub max_positions: usize,
    /// Pause lengre enn dette ugyldiggjør historikken.
    pub stale_after_ms: u64,
    /// Multiplikator for det statistiske avviket.
    pub threshold_factor: f64,
    /// Gulv for standardavviket, så porten ikke blir for trang
    /// når vinduet er nesten konstant.
    pub stdev_floor: f64,
    /// Avvis målinger med negativ z uansett statistikk.
    pub reject_negative_z: bool,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            max_positions: 5,
            stale_after_ms: 200,
            threshold_factor: 3.0,
            stdev_floor: 1.0,
            reject_negative_z: false,
        }
    }
}

impl SmootherConfig {
    /// Policy fra den andre prosessvarianten: videre statistisk port,
    /// lavere gulv og fysisk krav om ikke-negativ z.
    pub fn wide_gate() -> Self {
        Self {
            threshold_factor: 10.0,
            stdev_floor: 0.8,
            reject_negative_z: true,
            ..Self::default()
        }
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_millis(self.stale_after_ms)
    }
}

/// Grunner til at en måling forkastes. Lokalt håndtert – ingen av disse
/// er feil som skal videre ut av godkjenningsstien.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reject {
    #[error("ikke-finitt koordinat i målingen")]
    NonFinite,
    #[error("negativ z-posisjon")]
    NegativeZ,
    #[error("posisjon signifikant utenfor snittet på {axis}-aksen")]
    Outlier { axis: Axis },
}

/// Glatteren: vindu + policy + tidspunkt for siste godkjente måling,
/// pluss tellerne for mottatt/godkjent. Én instans per prosess i praksis,
/// men ingenting her er global tilstand – instansier fritt i tester.
pub struct PoseSmoother {
    cfg: SmootherConfig,
    window: PoseWindow,
    last_accepted: Option<Instant>,
    total: u64,
    accepted: u64,
}

impl PoseSmoother {
    pub fn new(cfg: SmootherConfig) -> Self {
        let window = PoseWindow::new(cfg.max_positions);
        Self {
            cfg,
            window,
            last_accepted: None,
            total: 0,
            accepted: 0,
        }
    }

    /// Behandle én innkommende måling med ankomsttid "nå".
    pub fn observe(&mut self, sample: PoseSample) -> Result<AveragedPose, Reject> {
        self.observe_at(Instant::now(), sample)
    }

    /// Samme som `observe`, men med eksplisitt ankomsttid (testbarhet).
    pub fn observe_at(
        &mut self,
        now: Instant,
        sample: PoseSample,
    ) -> Result<AveragedPose, Reject> {
        self.total += 1;

        // Kjøres før portene på hver eneste måling: en lang pause gjør
        // historikken irrelevant, og da skal den ikke få stemme.
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) > self.cfg.stale_after() {
                log::warn!(
                    "Over {} ms siden forrige godkjente deteksjon, posisjonsvinduet nullstilles",
                    self.cfg.stale_after_ms
                );
                self.window.clear();
            }
        }

        // NaN/Inf ville forgiftet snitt og standardavvik permanent.
        if !sample.is_finite() {
            log::warn!("Måling med NaN/Inf-koordinat ignoreres");
            return Err(Reject::NonFinite);
        }

        if self.cfg.reject_negative_z && sample.z < 0.0 {
            log::warn!("Måling med negativ z ({:.3}) ignoreres", sample.z);
            return Err(Reject::NegativeZ);
        }

        // Statistisk port, akse for akse i fast rekkefølge. Første akse
        // som feiler avgjør – vinduet røres ikke ved avvisning.
        if !self.window.is_empty() {
            for axis in Axis::ALL {
                let mean = self.window.mean(axis);
                let stdev = self.window.stdev(axis);
                let gate = self.cfg.threshold_factor * stdev.max(self.cfg.stdev_floor);
                if (sample.axis(axis) - mean).abs() > gate {
                    log::warn!(
                        "Posisjon signifikant utenfor snittet på {}-aksen ({:.3} mot snitt {:.3}), ignoreres",
                        axis,
                        sample.axis(axis),
                        mean
                    );
                    return Err(Reject::Outlier { axis });
                }
            }
        }

        self.last_accepted = Some(now);
        self.window.push(sample.coords());
        self.accepted += 1;

        let m = self.window.means();
        log::debug!(
            "Vindu med {} posisjoner, snitt=({:.3}, {:.3}, {:.3})",
            self.window.len(),
            m[0],
            m[1],
            m[2]
        );

        Ok(AveragedPose {
            x: m[0],
            y: m[1],
            z: m[2],
        })
    }

    /// Antall mottatte målinger (godkjente + forkastede).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Antall godkjente målinger.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    pub fn window(&self) -> &PoseWindow {
        &self.window
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.cfg
    }
}
