// core/src/node.rs
//
// Tynn I/O-lim rundt kjernen: én abonnent-kanal inn, én publisist ut.
// All algoritmikk ligger i `smoother`.

use std::sync::mpsc::{Receiver, Sender};

use crate::diagnostics::DiagnosticsSink;
use crate::metrics::{self, Metrics};
use crate::models::{AveragedPose, PoseSample};
use crate::smoother::PoseSmoother;
use crate::wire;

/// Utgående kanal for glattede posisjoner.
/// Prod: `ChannelPublisher`; test: en samlende dummy.
pub trait AveragePublisher {
    fn publish(&mut self, avg: &AveragedPose) -> anyhow::Result<()>;
}

/// Publisering over mpsc (transport i samme prosess).
pub struct ChannelPublisher {
    tx: Sender<AveragedPose>,
}

impl ChannelPublisher {
    pub fn new(tx: Sender<AveragedPose>) -> Self {
        Self { tx }
    }
}

impl AveragePublisher for ChannelPublisher {
    fn publish(&mut self, avg: &AveragedPose) -> anyhow::Result<()> {
        self.tx
            .send(*avg)
            .map_err(|_| anyhow::anyhow!("mottakeren av average_pose er borte"))
    }
}

/// Kjør glattesløyfen til innkanalen lukkes. Samples behandles én om
/// gangen, ferdig før neste hentes – ingen låsing nødvendig i kjernen.
pub fn run(
    rx: Receiver<PoseSample>,
    publisher: &mut dyn AveragePublisher,
    smoother: &mut PoseSmoother,
    mut sink: Option<&mut (dyn DiagnosticsSink + '_)>,
    metrics: &Metrics,
) -> anyhow::Result<()> {
    log::info!("PoseAvg-node startet {}", chrono::Utc::now().to_rfc3339());
    for sample in rx {
        step(sample, publisher, smoother, sink.as_deref_mut(), metrics)?;
    }
    log::info!("Innkanalen er lukket, node avsluttes");
    Ok(())
}

/// Samme sløyfe, men med rå JSON-meldinger fra transporten. Meldinger som
/// ikke lar seg dekode er et transportproblem og når aldri kjernen.
pub fn run_json(
    rx: Receiver<String>,
    publisher: &mut dyn AveragePublisher,
    smoother: &mut PoseSmoother,
    mut sink: Option<&mut (dyn DiagnosticsSink + '_)>,
    metrics: &Metrics,
) -> anyhow::Result<()> {
    log::info!("PoseAvg-node (JSON) startet {}", chrono::Utc::now().to_rfc3339());
    for msg in rx {
        match wire::parse_pose_sample(&msg) {
            Ok(sample) => {
                step(sample, publisher, smoother, sink.as_deref_mut(), metrics)?
            }
            Err(e) => log::warn!("Ugyldig pose-melding hoppes over: {}", e),
        }
    }
    log::info!("Innkanalen er lukket, node avsluttes");
    Ok(())
}

fn step(
    sample: PoseSample,
    publisher: &mut dyn AveragePublisher,
    smoother: &mut PoseSmoother,
    sink: Option<&mut (dyn DiagnosticsSink + '_)>,
    metrics: &Metrics,
) -> anyhow::Result<()> {
    metrics::samples_total(metrics).inc();
    match smoother.observe(sample) {
        Ok(avg) => {
            metrics::samples_accepted_total(metrics).inc();
            publisher.publish(&avg)?;
            // Diagnostikk er best-effort og skal aldri stoppe publiseringen.
            if let Some(s) = sink {
                if let Err(e) = s.record(&avg, smoother.accepted(), smoother.total()) {
                    log::warn!("Diagnostikk-skriv feilet: {}", e);
                }
            }
        }
        Err(_) => metrics::samples_rejected_total(metrics).inc(),
    }
    Ok(())
}
