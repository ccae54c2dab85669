use crate::core::geometry::PairGeometry;
use crate::core::solvent::params::SolventParameters;
use crate::core::solvent::potentials;
use nalgebra::{Point3, Vector3};
use tracing::{instrument, trace};

/// Still generalized-Born energy over all pairs `j >= i`.
///
/// Adds direct pair forces into `forces` and Born-radius derivatives into
/// `born_force`; neither buffer is reset. Returns the polar energy before the
/// energy conversion is applied.
#[instrument(skip_all, name = "electrostatic_pass")]
pub fn run<G>(
    positions: &[Point3<f64>],
    charges: &[f64],
    params: &SolventParameters,
    geometry: &G,
    born_radii: &[f64],
    born_force: &mut [f64],
    forces: &mut [Vector3<f64>],
) -> f64
where
    G: PairGeometry,
{
    let pre_factor = params.pre_factor();
    let n = positions.len();

    let mut energy = 0.0;
    for atom_i in 0..n {
        let scaled_charge_i = pre_factor * charges[atom_i];
        let born_i = born_radii[atom_i];

        for atom_j in atom_i..n {
            let displacement = geometry.displacement(&positions[atom_i], &positions[atom_j]);
            if params.beyond_cutoff(displacement.r) {
                continue;
            }

            let born_j = born_radii[atom_j];
            let pair = potentials::still_pair(
                scaled_charge_i,
                charges[atom_j],
                displacement.r2,
                born_i * born_j,
            );

            if atom_i == atom_j {
                energy += 0.5 * pair.energy;
            } else {
                energy += pair.energy;
                born_force[atom_j] += pair.d_energy_dalpha2 * born_i;

                let force = displacement.delta * pair.d_energy_dr;
                forces[atom_i] += force;
                forces[atom_j] -= force;
            }
            born_force[atom_i] += pair.d_energy_dalpha2 * born_j;
        }
    }

    trace!(energy, "Electrostatic pass finished.");
    energy
}
