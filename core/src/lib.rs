pub mod diagnostics;
pub mod metrics;
pub mod models;
pub mod node;
pub mod smoother;
pub mod storage;
pub mod window;
pub mod wire;

pub use diagnostics::{DiagnosticsError, DiagnosticsSink, FileDiagnostics};
pub use models::{AveragedPose, Axis, PoseSample};
pub use node::{run, run_json, AveragePublisher, ChannelPublisher};
pub use smoother::{PoseSmoother, Reject, SmootherConfig};
pub use storage::{load_config, save_config};
pub use window::{PoseWindow, WindowState};
