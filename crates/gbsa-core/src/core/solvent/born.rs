use super::params::SolventParameters;
use super::potentials::{self, ObcRadius};
use crate::core::geometry::PairGeometry;
use nalgebra::Point3;
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Born radii and OBC chain derivatives for every atom of a system.
#[derive(Debug, Clone, PartialEq)]
pub struct BornRadii {
    pub radii: Vec<f64>,
    pub chain: Vec<f64>,
}

/// Computes Born radii for the current positions, allocating the output.
///
/// # Panics
///
/// Panics if `positions` does not hold exactly one entry per parameterized atom.
pub fn compute_born_radii<G>(
    positions: &[Point3<f64>],
    params: &SolventParameters,
    geometry: &G,
) -> BornRadii
where
    G: PairGeometry + Sync,
{
    let n = params.number_of_atoms();
    assert_eq!(positions.len(), n, "one position per atom is required");
    let mut radii = vec![0.0; n];
    let mut chain = vec![0.0; n];
    compute_born_radii_into(positions, params, geometry, &mut radii, &mut chain);
    BornRadii { radii, chain }
}

/// Computes Born radii into caller-owned buffers of length `N`.
///
/// Every atom is independent, so with the `parallel` feature the atoms are
/// distributed across the rayon pool; each atom's sum is still accumulated in
/// ascending `j` order and the result does not depend on the feature.
#[instrument(skip_all, name = "born_radii_task")]
pub(crate) fn compute_born_radii_into<G>(
    positions: &[Point3<f64>],
    params: &SolventParameters,
    geometry: &G,
    radii: &mut [f64],
    chain: &mut [f64],
) where
    G: PairGeometry + Sync,
{
    debug_assert_eq!(positions.len(), params.number_of_atoms());
    debug_assert_eq!(radii.len(), params.number_of_atoms());
    debug_assert_eq!(chain.len(), params.number_of_atoms());

    #[cfg(not(feature = "parallel"))]
    let iterator = radii.iter_mut().zip(chain.iter_mut()).enumerate();

    #[cfg(feature = "parallel")]
    let iterator = radii.par_iter_mut().zip(chain.par_iter_mut()).enumerate();

    iterator.for_each(|(atom_i, (radius_out, chain_out))| {
        let ObcRadius { born_radius, chain } = born_radius_of(atom_i, positions, params, geometry);
        *radius_out = born_radius;
        *chain_out = chain;
    });
}

/// Born radius of a single atom from its weighted HCT descreening sum.
///
/// # Panics
///
/// Panics if `atom_i` is out of range or `positions` is longer than the
/// parameterized atom count.
pub fn born_radius_of<G>(
    atom_i: usize,
    positions: &[Point3<f64>],
    params: &SolventParameters,
    geometry: &G,
) -> ObcRadius
where
    G: PairGeometry,
{
    let nonpolar_scale_factors = params.nonpolar_scale_factors();
    let offset_radius_i = params.offset_radius(atom_i);
    let position_i = &positions[atom_i];

    let mut sum = 0.0;
    for (atom_j, position_j) in positions.iter().enumerate() {
        if atom_j == atom_i {
            continue;
        }
        let r = geometry.displacement(position_i, position_j).r;
        if params.beyond_cutoff(r) {
            continue;
        }
        if let Some(overlap) = potentials::hct_overlap(offset_radius_i, params.scaled_radius(atom_j), r)
        {
            sum += nonpolar_scale_factors[atom_j] * overlap.term;
        }
    }

    potentials::obc_born_radius(
        sum,
        params.atomic_radii()[atom_i],
        offset_radius_i,
        params.obc(),
    )
}
