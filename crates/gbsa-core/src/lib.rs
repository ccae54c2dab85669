//! # GB/SA OBC Implicit Solvent
//!
//! Energies and forces of the Generalized Born / Surface Area implicit-solvent
//! model with Onufriev–Bashford–Case Born radii and the ACE nonpolar term, for
//! use inside a molecular simulation step.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data: per-atom records, boundary
//!   geometry, validated solvent parameters, the closed-form pair potentials, and
//!   the standalone Born radius solver.
//!
//! - **[`engine`]: The Logic Core.** The stateful `ObcEngine`, which owns scratch
//!   buffers sized to the system, runs the electrostatic and back-propagation
//!   passes, and carries the committed Born radii from one step to the next.
//!
//! - **[`workflows`]: The Public API.** One-shot procedures that build parameters
//!   from plain atom records and a configuration and run a single evaluation.

pub mod core;
pub mod engine;
pub mod workflows;
