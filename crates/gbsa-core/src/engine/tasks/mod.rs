//! Passes that make up a single GB/SA evaluation.
//!
//! An evaluation runs the [`electrostatic`] pass over every unordered atom pair
//! (self pairs included) and then the [`back_propagation`] pass, which turns the
//! accumulated Born-radius derivatives into Cartesian forces and, in the same
//! loop, computes the Born radii for the next evaluation. Both passes are
//! serial and accumulate in a fixed `(i, j)` order so results are
//! reproducible bit for bit.

pub mod back_propagation;
pub mod electrostatic;
