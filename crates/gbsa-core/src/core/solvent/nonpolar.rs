use super::params::SolventParameters;
use super::potentials;

/// Adds the ACE nonpolar solvation energy and its Born-radius derivative.
///
/// `born_force` receives `dE/dB_i` per atom (a Born-radius-space quantity, not a
/// Cartesian force); nothing is reset. Returns the energy added to `energy`.
///
/// # Panics
///
/// Panics if `born_radii` is longer than the parameterized atom count or
/// `born_force` is shorter than `born_radii`.
pub fn compute_nonpolar(
    born_radii: &[f64],
    params: &SolventParameters,
    energy: &mut f64,
    born_force: &mut [f64],
) -> f64 {
    let atomic_radii = params.atomic_radii();
    let nonpolar_scale_factors = params.nonpolar_scale_factors();
    let probe_radius = params.probe_radius();
    let surface_area_factor = params.surface_area_factor();

    let mut added = 0.0;
    for (atom_i, &born_radius) in born_radii.iter().enumerate() {
        if born_radius <= 0.0 {
            continue;
        }
        let sa_term = potentials::ace_surface_term(
            atomic_radii[atom_i],
            born_radius,
            probe_radius,
            surface_area_factor,
            nonpolar_scale_factors[atom_i],
        );
        added += sa_term;
        born_force[atom_i] += -6.0 * sa_term / born_radius;
    }
    *energy += added;
    added
}
