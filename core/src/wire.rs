// core/src/wire.rs
use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::models::{AveragedPose, PoseSample};

#[derive(Debug, Clone, Deserialize)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct PoseBody {
    position: Point,
}

// Stemplet detektor-form: { "pose": { "position": { x, y, z } } }
#[derive(Debug, Clone, Deserialize)]
struct Stamped {
    pose: PoseBody,
}

// Bar form: { "position": { x, y, z } }
#[derive(Debug, Clone, Deserialize)]
struct Positioned {
    position: Point,
}

// Prøv STEMPLET først, så bar, så flat
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PoseIn {
    Stamped(Stamped),
    Positioned(Positioned),
    Flat(Point),
}

/// Tolerant dekoding av én innkommende pose-melding. Feil rapporteres med
/// stien til feltet som feilet.
pub fn parse_pose_sample(json_str: &str) -> Result<PoseSample, String> {
    let mut de = json::Deserializer::from_str(json_str);
    let parsed: PoseIn = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (PoseIn) at {}: {}", e.path(), e))?;

    let p = match parsed {
        PoseIn::Stamped(s) => s.pose.position,
        PoseIn::Positioned(s) => s.position,
        PoseIn::Flat(p) => p,
    };
    Ok(PoseSample::new(p.x, p.y, p.z))
}

/// JSON-payload for den utgående average_pose-kanalen.
pub fn encode_average(avg: &AveragedPose) -> String {
    serde_json::to_string(avg).expect("Vector3-serialisering feiler ikke")
}
