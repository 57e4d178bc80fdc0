use std::fmt;

use serde::{Deserialize, Serialize};

/// Én rå 3D-måling fra markørdetektoren. Ankomsttid er implisitt
/// (øyeblikket `observe` kalles).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    pub x: f64, // meter
    pub y: f64, // meter
    pub z: f64, // meter
}

impl PoseSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn axis(&self, axis: Axis) -> f64 {
        self.coords()[axis.index()]
    }

    /// NaN/Inf i én koordinat gjør hele målingen ubrukelig.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Glattet posisjon – aksevis snitt av vinduet i godkjenningsøyeblikket.
/// Publiseres uten tidsstempel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AveragedPose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Koordinatakse. Portvakten sjekker aksene i fast rekkefølge x, y, z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
