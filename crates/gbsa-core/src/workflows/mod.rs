//! # Workflows Module
//!
//! High-level entry points that take plain per-atom records and a solvent
//! configuration, build and validate the parameter set, and run the engine.
//!
//! - **Single-point evaluation** ([`single_point`]) - Energy, forces and Born radii
//!   for one set of coordinates, with radii solved at those coordinates.

pub mod single_point;
