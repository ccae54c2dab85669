use super::config::{EngineConfig, RadiusSeeding};
use super::error::EngineError;
use super::state::ResultState;
use super::tasks::{back_propagation, electrostatic};
use crate::core::geometry::{Boundary, OpenBoundary, PairGeometry};
use crate::core::solvent::born;
use crate::core::solvent::nonpolar;
use crate::core::solvent::params::SolventParameters;
use crate::core::solvent::term::SolvationEnergy;
use nalgebra::{Point3, Vector3};
use tracing::{debug, instrument, warn};

/// Factor applied to both the returned energy and the forces added to the
/// caller's buffer.
pub const ENERGY_CONVERSION: f64 = 0.4184;

/// GB/SA OBC implicit-solvent evaluator for a fixed-size system.
///
/// The engine owns the per-system scratch buffers and the Born radii carried
/// from one evaluation to the next. Each call to [`ObcEngine::evaluate`]
/// consumes the committed radii, returns the solvation energy, adds forces to
/// the caller's buffer and commits radii computed at the positions it was
/// given.
#[derive(Debug, Clone)]
pub struct ObcEngine {
    params: SolventParameters,
    config: EngineConfig,
    state: ResultState,
}

impl ObcEngine {
    pub fn new(params: SolventParameters, config: EngineConfig) -> Self {
        let state = ResultState::new(params.number_of_atoms());
        Self {
            params,
            config,
            state,
        }
    }

    pub fn parameters(&self) -> &SolventParameters {
        &self.params
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn number_of_atoms(&self) -> usize {
        self.params.number_of_atoms()
    }

    /// Replaces the parameter set. Committed radii are discarded, and the
    /// buffers are resized when the atom count changes.
    pub fn set_parameters(&mut self, params: SolventParameters) {
        if params.number_of_atoms() == self.state.number_of_atoms() {
            self.state.invalidate();
        } else {
            self.state = ResultState::new(params.number_of_atoms());
        }
        self.params = params;
    }

    /// Committed Born radii, or `None` before the first evaluation.
    pub fn born_radii(&self) -> Option<&[f64]> {
        self.state.born_radii()
    }

    pub fn obc_chain(&self) -> Option<&[f64]> {
        self.state.obc_chain()
    }

    /// Solves for the Born radii at `positions` and commits them.
    #[instrument(skip_all, name = "refresh_born_radii")]
    pub fn refresh_born_radii(&mut self, positions: &[Point3<f64>]) -> Result<(), EngineError> {
        self.check_atom_count("positions", positions.len())?;

        let Self { params, state, .. } = self;
        match *params.boundary() {
            Boundary::Open => seed_radii(params, state, &OpenBoundary, positions),
            Boundary::Periodic(periodic_box) => seed_radii(params, state, &periodic_box, positions),
        }
        if let Some(radii) = self.state.born_radii() {
            report_invalid_radii(radii);
        }
        Ok(())
    }

    /// Runs one energy and force evaluation.
    ///
    /// Forces are added to `forces` (already multiplied by
    /// [`ENERGY_CONVERSION`]); the buffer is never cleared. On success the
    /// radii computed at `positions` become the committed radii.
    #[instrument(skip_all, name = "gbsa_evaluation")]
    pub fn evaluate(
        &mut self,
        positions: &[Point3<f64>],
        charges: &[f64],
        forces: &mut [Vector3<f64>],
    ) -> Result<SolvationEnergy, EngineError> {
        self.check_atom_count("positions", positions.len())?;
        self.check_atom_count("charges", charges.len())?;
        self.check_atom_count("forces", forces.len())?;

        let Self {
            params,
            config,
            state,
        } = self;
        let energy = match *params.boundary() {
            Boundary::Open => {
                evaluate_with(params, config, state, &OpenBoundary, positions, charges, forces)
            }
            Boundary::Periodic(periodic_box) => {
                evaluate_with(params, config, state, &periodic_box, positions, charges, forces)
            }
        };

        if let Some(radii) = self.state.born_radii() {
            report_invalid_radii(radii);
        }
        debug!(
            atoms = positions.len(),
            polar = energy.polar,
            nonpolar = energy.nonpolar,
            "GB/SA evaluation complete."
        );
        Ok(energy)
    }

    fn check_atom_count(&self, what: &'static str, found: usize) -> Result<(), EngineError> {
        let expected = self.params.number_of_atoms();
        if found == expected {
            Ok(())
        } else {
            Err(EngineError::AtomCountMismatch {
                what,
                expected,
                found,
            })
        }
    }
}

fn seed_radii<G>(
    params: &SolventParameters,
    state: &mut ResultState,
    geometry: &G,
    positions: &[Point3<f64>],
) where
    G: PairGeometry + Sync,
{
    let (radii, chain) = state.current_mut();
    born::compute_born_radii_into(positions, params, geometry, radii, chain);
    state.mark_committed();
}

fn evaluate_with<G>(
    params: &SolventParameters,
    config: &EngineConfig,
    state: &mut ResultState,
    geometry: &G,
    positions: &[Point3<f64>],
    charges: &[f64],
    forces: &mut [Vector3<f64>],
) -> SolvationEnergy
where
    G: PairGeometry + Sync,
{
    if config.radius_seeding == RadiusSeeding::Recompute || !state.is_committed() {
        seed_radii(params, state, geometry, positions);
    }

    let buffers = state.begin_pass();

    let mut nonpolar_energy = 0.0;
    if config.include_nonpolar {
        nonpolar::compute_nonpolar(
            buffers.born_radii,
            params,
            &mut nonpolar_energy,
            buffers.born_force,
        );
    }

    let polar_energy = electrostatic::run(
        positions,
        charges,
        params,
        geometry,
        buffers.born_radii,
        buffers.born_force,
        buffers.forces,
    );

    back_propagation::scale_born_force(buffers.born_force, buffers.born_radii, buffers.obc_chain);
    back_propagation::run(
        positions,
        params,
        geometry,
        buffers.born_force,
        buffers.forces,
        buffers.born_radii_next,
        buffers.obc_chain_next,
    );

    for (out, force) in forces.iter_mut().zip(buffers.forces.iter()) {
        *out += force * ENERGY_CONVERSION;
    }

    state.commit();
    SolvationEnergy::new(polar_energy, nonpolar_energy) * ENERGY_CONVERSION
}

fn report_invalid_radii(radii: &[f64]) {
    let invalid = radii
        .iter()
        .filter(|radius| !(radius.is_finite() && **radius > 0.0))
        .count();
    if invalid > 0 {
        warn!(
            invalid,
            "Born radii that are not finite and positive were committed; check atom radii and overlaps."
        );
    }
}
