use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Solvation energy split into its electrostatic (GB) and nonpolar (ACE) parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolvationEnergy {
    pub polar: f64,
    pub nonpolar: f64,
}

impl SolvationEnergy {
    pub fn new(polar: f64, nonpolar: f64) -> Self {
        Self { polar, nonpolar }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.polar + self.nonpolar
    }
}

impl Add for SolvationEnergy {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            polar: self.polar + rhs.polar,
            nonpolar: self.nonpolar + rhs.nonpolar,
        }
    }
}

impl AddAssign for SolvationEnergy {
    fn add_assign(&mut self, rhs: Self) {
        self.polar += rhs.polar;
        self.nonpolar += rhs.nonpolar;
    }
}

impl Mul<f64> for SolvationEnergy {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            polar: self.polar * rhs,
            nonpolar: self.nonpolar * rhs,
        }
    }
}

impl Sum for SolvationEnergy {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, term| acc + term)
    }
}
