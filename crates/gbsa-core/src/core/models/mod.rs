//! # Core Models Module
//!
//! Row-oriented input records for implicit-solvent evaluations.
//!
//! ## Key Components
//!
//! - [`atom`] - The [`atom::SolvatedAtom`] record (position, charge, Born radius and
//!   scale factors) plus helpers that split a slice of records into the parallel
//!   arrays consumed by the engine.
//!
//! ## Usage
//!
//! ```ignore
//! use gbsa_obc::core::models::atom::{self, SolvatedAtom};
//!
//! let atoms = vec![
//!     SolvatedAtom::new(Point3::new(0.0, 0.0, 0.0), 1.0, 0.15, 0.8),
//!     SolvatedAtom::new(Point3::new(0.3, 0.0, 0.0), -1.0, 0.15, 0.8),
//! ];
//! let positions = atom::positions(&atoms);
//! let charges = atom::charges(&atoms);
//! ```

pub mod atom;
