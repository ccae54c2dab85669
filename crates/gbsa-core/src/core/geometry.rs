use nalgebra::{Point3, Vector3};
use std::fmt;

/// Separation between two atoms as seen by a pairwise kernel.
///
/// `delta` points from the first atom to the second (`to - from`), so a force
/// `k * delta` added to the first atom pulls it towards the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// Displacement vector `to - from`, minimum-imaged when periodic.
    pub delta: Vector3<f64>,
    /// Squared length of `delta`.
    pub r2: f64,
    /// Length of `delta`.
    pub r: f64,
}

impl Displacement {
    #[inline]
    fn from_delta(delta: Vector3<f64>) -> Self {
        let r2 = delta.dot(&delta);
        Self {
            delta,
            r2,
            r: r2.sqrt(),
        }
    }
}

/// Distance provider used by every pairwise loop.
///
/// The evaluator picks one implementation per call from the parameters'
/// [`Boundary`]; the pair loops are generic over it.
pub trait PairGeometry {
    fn displacement(&self, from: &Point3<f64>, to: &Point3<f64>) -> Displacement;
}

/// Plain Cartesian distances, no wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpenBoundary;

impl PairGeometry for OpenBoundary {
    #[inline]
    fn displacement(&self, from: &Point3<f64>, to: &Point3<f64>) -> Displacement {
        Displacement::from_delta(to - from)
    }
}

/// Rectangular periodic cell using the minimum-image convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicBox {
    lengths: Vector3<f64>,
}

impl PeriodicBox {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            lengths: Vector3::new(x, y, z),
        }
    }

    pub fn lengths(&self) -> &Vector3<f64> {
        &self.lengths
    }

    pub fn shortest_edge(&self) -> f64 {
        self.lengths.x.min(self.lengths.y).min(self.lengths.z)
    }
}

impl PairGeometry for PeriodicBox {
    #[inline]
    fn displacement(&self, from: &Point3<f64>, to: &Point3<f64>) -> Displacement {
        let raw = to - from;
        let wrapped = raw.zip_map(&self.lengths, |d, edge| {
            d - (d / edge + 0.5).floor() * edge
        });
        Displacement::from_delta(wrapped)
    }
}

/// Boundary condition carried by the solvent parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Boundary {
    #[default]
    Open,
    Periodic(PeriodicBox),
}

impl Boundary {
    pub fn is_periodic(&self) -> bool {
        matches!(self, Boundary::Periodic(_))
    }

    pub fn periodic_box(&self) -> Option<&PeriodicBox> {
        match self {
            Boundary::Open => None,
            Boundary::Periodic(pbox) => Some(pbox),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Open => write!(f, "open"),
            Boundary::Periodic(pbox) => {
                let l = pbox.lengths();
                write!(f, "periodic [{} x {} x {}]", l.x, l.y, l.z)
            }
        }
    }
}
