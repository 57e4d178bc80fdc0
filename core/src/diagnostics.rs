use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::models::AveragedPose;

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("klarte ikke å skrive diagnostikk: {0}")]
    Io(#[from] std::io::Error),
}

/// Valgfri mottaker for deteksjonsstatistikk. Kalles én gang per godkjente
/// måling; feil herfra skal aldri stoppe publiseringen.
pub trait DiagnosticsSink {
    fn record(
        &mut self,
        avg: &AveragedPose,
        accepted: u64,
        total: u64,
    ) -> Result<(), DiagnosticsError>;
}

/// Append-only tekstlogger på disk: kommaseparerte x- og z-snitt pluss én
/// tellerlinje per godkjenning. Vokser ubegrenset – ment for enkel skraping,
/// ikke strukturert parsing.
pub struct FileDiagnostics {
    x_log: File,
    z_log: File,
    detections: File,
}

impl FileDiagnostics {
    pub fn open(dir: &Path) -> Result<Self, DiagnosticsError> {
        create_dir_all(dir)?;
        let open = |name: &str| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(name))
        };
        Ok(Self {
            x_log: open("x_avg.txt")?,
            z_log: open("z_avg.txt")?,
            detections: open("detections.txt")?,
        })
    }
}

impl DiagnosticsSink for FileDiagnostics {
    fn record(
        &mut self,
        avg: &AveragedPose,
        accepted: u64,
        total: u64,
    ) -> Result<(), DiagnosticsError> {
        write!(self.x_log, "{},", avg.x)?;
        write!(self.z_log, "{},", avg.z)?;
        writeln!(self.detections, "correct: {} total: {}", accepted, total)?;
        Ok(())
    }
}
