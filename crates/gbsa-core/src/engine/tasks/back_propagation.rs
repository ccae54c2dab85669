use crate::core::geometry::PairGeometry;
use crate::core::solvent::params::SolventParameters;
use crate::core::solvent::potentials::{self, ObcRadius};
use nalgebra::{Point3, Vector3};
use tracing::{instrument, trace};

/// Applies the OBC chain rule, turning `dE/d(alpha2)` sums into `dE/d(sum)`.
pub fn scale_born_force(born_force: &mut [f64], born_radii: &[f64], obc_chain: &[f64]) {
    for ((force, &born), &chain) in born_force.iter_mut().zip(born_radii).zip(obc_chain) {
        *force *= born * born * chain;
    }
}

/// Cartesian forces from the prescaled Born-radius derivatives.
///
/// The same HCT pair loop also produces each atom's descreening sum, so the
/// Born radii and chain derivatives at the current positions are written to
/// `born_radii_next` and `obc_chain_next` as a by-product.
#[instrument(skip_all, name = "back_propagation_pass")]
pub fn run<G>(
    positions: &[Point3<f64>],
    params: &SolventParameters,
    geometry: &G,
    born_force: &[f64],
    forces: &mut [Vector3<f64>],
    born_radii_next: &mut [f64],
    obc_chain_next: &mut [f64],
) where
    G: PairGeometry,
{
    let atomic_radii = params.atomic_radii();
    let nonpolar_scale_factors = params.nonpolar_scale_factors();
    let n = positions.len();

    for atom_i in 0..n {
        let offset_radius_i = params.offset_radius(atom_i);
        let born_force_i = born_force[atom_i];

        let mut born_sum = 0.0;
        for atom_j in 0..n {
            if atom_j == atom_i {
                continue;
            }

            let displacement = geometry.displacement(&positions[atom_i], &positions[atom_j]);
            let r = displacement.r;
            if params.beyond_cutoff(r) {
                continue;
            }

            let scaled_radius_j = params.scaled_radius(atom_j);
            let Some(overlap) = potentials::hct_overlap(offset_radius_i, scaled_radius_j, r)
            else {
                continue;
            };

            let de = born_force_i * overlap.radial_factor(scaled_radius_j, r) / r;
            let force = displacement.delta * de;
            forces[atom_i] -= force;
            forces[atom_j] += force;

            born_sum += nonpolar_scale_factors[atom_j] * overlap.term;
        }

        let ObcRadius { born_radius, chain } = potentials::obc_born_radius(
            born_sum,
            atomic_radii[atom_i],
            offset_radius_i,
            params.obc(),
        );
        born_radii_next[atom_i] = born_radius;
        obc_chain_next[atom_i] = chain;
    }

    trace!(atoms = n, "Back-propagation pass finished.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::OpenBoundary;
    use crate::core::solvent::born;

    fn params() -> SolventParameters {
        SolventParameters::builder()
            .atomic_radii(vec![0.17, 0.15, 0.12])
            .scale_factors(vec![0.72, 0.85, 0.8])
            .build()
            .unwrap()
    }

    fn positions() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.25, 0.05, 0.0),
            Point3::new(0.1, 0.22, 0.07),
        ]
    }

    #[test]
    fn scale_born_force_multiplies_by_radius_squared_and_chain() {
        let mut born_force = vec![2.0, -1.0];
        scale_born_force(&mut born_force, &[0.5, 0.2], &[0.9, 0.4]);
        assert!((born_force[0] - 2.0 * 0.25 * 0.9).abs() < 1e-15);
        assert!((born_force[1] + 0.04 * 0.4).abs() < 1e-15);
    }

    #[test]
    fn next_radii_match_standalone_solver() {
        let params = params();
        let positions = positions();
        let mut forces = vec![Vector3::zeros(); 3];
        let mut radii = vec![0.0; 3];
        let mut chain = vec![0.0; 3];
        run(
            &positions,
            &params,
            &OpenBoundary,
            &[0.0; 3],
            &mut forces,
            &mut radii,
            &mut chain,
        );

        let expected = born::compute_born_radii(&positions, &params, &OpenBoundary);
        for i in 0..3 {
            assert!((radii[i] - expected.radii[i]).abs() < 1e-14);
            assert!((chain[i] - expected.chain[i]).abs() < 1e-14);
        }
        assert!(forces.iter().all(|f| *f == Vector3::zeros()));
    }

    #[test]
    fn next_radii_weight_descreening_by_nonpolar_scale_factors() {
        let params = SolventParameters::builder()
            .atomic_radii(vec![0.17, 0.15, 0.12])
            .scale_factors(vec![0.72, 0.85, 0.8])
            .nonpolar_scale_factors(vec![1.0, 0.0, 0.5])
            .build()
            .unwrap();
        let positions = positions();
        let mut forces = vec![Vector3::zeros(); 3];
        let mut radii = vec![0.0; 3];
        let mut chain = vec![0.0; 3];
        run(
            &positions,
            &params,
            &OpenBoundary,
            &[0.0; 3],
            &mut forces,
            &mut radii,
            &mut chain,
        );

        let expected = born::compute_born_radii(&positions, &params, &OpenBoundary);
        assert_eq!(radii, expected.radii);
        assert_eq!(chain, expected.chain);

        let unweighted = born::compute_born_radii(&positions, &self::params(), &OpenBoundary);
        assert!(radii[0] < unweighted.radii[0]);
        assert!(radii[2] < unweighted.radii[2]);
    }

    #[test]
    fn back_propagated_forces_sum_to_zero() {
        let params = params();
        let mut forces = vec![Vector3::zeros(); 3];
        let mut radii = vec![0.0; 3];
        let mut chain = vec![0.0; 3];
        run(
            &positions(),
            &params,
            &OpenBoundary,
            &[-120.0, 45.0, -30.0],
            &mut forces,
            &mut radii,
            &mut chain,
        );
        let net: Vector3<f64> = forces.iter().sum();
        assert!(net.norm() < 1e-9);
        assert!(forces[0].norm() > 0.0);
    }
}
