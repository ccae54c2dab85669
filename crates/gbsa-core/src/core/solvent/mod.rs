//! # Solvent Module
//!
//! Stateless building blocks of the Generalized-Born/Surface-Area (OBC) implicit
//! solvent model: validated parameters, the closed-form pair and per-atom formulas,
//! and the per-atom Born-radius solve.
//!
//! ## Overview
//!
//! The solvent is described by one [`params::SolventParameters`] object per system.
//! From it and the current atom positions the module computes:
//!
//! - **Born radii** by summing Hawkins–Cramer–Truhlar (HCT) pairwise descreening
//!   integrals and rescaling them with the Onufriev–Bashford–Case (OBC) tanh mapping
//! - **OBC chain derivatives** `dB/dsum`, needed to push Born-radius sensitivity
//!   back onto Cartesian forces
//! - **Nonpolar (ACE) energy** from the Born radii, together with its Born-radius
//!   derivative
//!
//! ## Key Components
//!
//! - [`config`] - TOML-loadable global constants and boundary settings
//! - [`params`] - Validated per-system parameters and their builder
//! - [`potentials`] - HCT, OBC, Still and ACE formulas
//! - [`born`] - Born-radius solver over all atoms
//! - [`nonpolar`] - ACE nonpolar term
//! - [`term`] - Polar/nonpolar energy breakdown
//!
//! ## Usage
//!
//! ```ignore
//! use gbsa_obc::core::geometry::OpenBoundary;
//! use gbsa_obc::core::solvent::{born, params::SolventParameters};
//!
//! let params = SolventParameters::builder()
//!     .atomic_radii(vec![0.15, 0.15])
//!     .scale_factors(vec![0.8, 0.8])
//!     .build()?;
//! let born = born::compute_born_radii(&positions, &params, &OpenBoundary);
//! ```

pub mod born;
pub mod config;
pub mod nonpolar;
pub mod params;
pub mod potentials;
pub mod term;
