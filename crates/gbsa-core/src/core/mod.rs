//! # Core Module
//!
//! Stateless foundation of the library: input records, distance geometry and the
//! GB/SA solvent model itself.
//!
//! ## Architecture
//!
//! - **Input Records** ([`models`]) - Row-oriented atom records
//! - **Distance Geometry** ([`geometry`]) - Open and periodic (minimum-image) pair displacements
//! - **Solvent Model** ([`solvent`]) - Parameters, formulas, Born radii and the nonpolar term
//!
//! Nothing in this layer holds state between calls; every function is a pure
//! function of positions and parameters. The stateful two-pass evaluation lives in
//! [`crate::engine`].

pub mod geometry;
pub mod models;
pub mod solvent;
