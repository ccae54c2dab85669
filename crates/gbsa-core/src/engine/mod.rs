//! # Engine Module
//!
//! This module implements the stateful GB/SA OBC evaluator: the object a
//! molecular dynamics or minimisation driver calls once per step to obtain the
//! implicit-solvent energy and forces for the current coordinates.
//!
//! ## Overview
//!
//! An [`evaluator::ObcEngine`] owns a validated parameter set and the
//! per-system scratch buffers. Every evaluation runs a fixed sequence of
//! passes over all atom pairs:
//!
//! 1. Seed the Born radii (reuse the committed ones, or solve for them)
//! 2. ACE nonpolar term and its Born-radius derivative
//! 3. Still electrostatic pass over pairs `j >= i`
//! 4. Chain-rule prescale of the Born-radius derivatives
//! 5. Back-propagation to Cartesian forces, computing next-step radii in the same loop
//! 6. Unit conversion and commit of the new radii
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Radius seeding policy and the nonpolar toggle
//! - **State Tracking** ([`state`]) - Committed radii, their successors, and scratch accumulators
//! - **Passes** ([`tasks`]) - The electrostatic and back-propagation pair loops
//! - **Evaluator** ([`evaluator`]) - Orchestration, boundary dispatch, and commit
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Key Capabilities
//!
//! - **Open or periodic boundaries**, dispatched once per evaluation rather than per pair
//! - **Optional cutoff** applied uniformly to every pair loop
//! - **Deterministic accumulation** in a fixed pair order
//! - **Allocation-free evaluation** after construction

pub mod config;
pub mod error;
pub mod evaluator;
pub mod state;
pub(crate) mod tasks;
