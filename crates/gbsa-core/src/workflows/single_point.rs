use crate::core::models::atom::{self, SolvatedAtom};
use crate::core::solvent::config::SolventConfig;
use crate::core::solvent::params::SolventParametersBuilder;
use crate::core::solvent::term::SolvationEnergy;
use crate::engine::config::{EngineConfig, RadiusSeeding};
use crate::engine::error::EngineError;
use crate::engine::evaluator::ObcEngine;
use nalgebra::Vector3;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct SinglePointResult {
    pub energy: SolvationEnergy,
    pub forces: Vec<Vector3<f64>>,
    pub born_radii: Vec<f64>,
    pub obc_chain: Vec<f64>,
}

#[instrument(skip_all, name = "single_point_workflow")]
pub fn run(atoms: &[SolvatedAtom], config: &SolventConfig) -> Result<SinglePointResult, EngineError> {
    info!(atoms = atoms.len(), "Starting single-point GB/SA evaluation.");

    let params = SolventParametersBuilder::from_config(config)
        .atoms(atoms)
        .build()?;
    debug!("Solvent parameters:\n{}", params);

    let engine_config = EngineConfig::builder()
        .radius_seeding(RadiusSeeding::Recompute)
        .build();
    let mut engine = ObcEngine::new(params, engine_config);

    let positions = atom::positions(atoms);
    let charges = atom::charges(atoms);
    let mut forces = vec![Vector3::zeros(); atoms.len()];
    let energy = engine.evaluate(&positions, &charges, &mut forces)?;

    info!(
        total = energy.total(),
        polar = energy.polar,
        nonpolar = energy.nonpolar,
        "Single-point evaluation finished."
    );

    Ok(SinglePointResult {
        energy,
        forces,
        born_radii: engine.born_radii().map(<[f64]>::to_vec).unwrap_or_default(),
        obc_chain: engine.obc_chain().map(<[f64]>::to_vec).unwrap_or_default(),
    })
}
