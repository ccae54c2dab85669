use nalgebra::Point3;

/// Per-atom input record for an implicit-solvent evaluation.
///
/// The engine itself works on parallel arrays (positions, charges, and the
/// per-atom columns of [`SolventParameters`](crate::core::solvent::params::SolventParameters));
/// this record is the convenient row-oriented form used when assembling a
/// system by hand or from a topology reader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvatedAtom {
    /// Cartesian position of the atom.
    pub position: Point3<f64>,
    /// Partial charge in elementary charge units.
    pub charge: f64,
    /// Intrinsic (atomic) Born radius, before the dielectric offset is removed.
    pub radius: f64,
    /// HCT descreening scale factor applied to this atom's offset radius.
    pub scale_factor: f64,
    /// Nonpolar scale factor; weights both the ACE surface term and this
    /// atom's descreening of its neighbours.
    pub nonpolar_scale_factor: f64,
}

impl SolvatedAtom {
    /// Creates an atom with a nonpolar scale factor of 1.0.
    pub fn new(position: Point3<f64>, charge: f64, radius: f64, scale_factor: f64) -> Self {
        Self {
            position,
            charge,
            radius,
            scale_factor,
            nonpolar_scale_factor: 1.0,
        }
    }

    pub fn with_nonpolar_scale_factor(mut self, factor: f64) -> Self {
        self.nonpolar_scale_factor = factor;
        self
    }
}

pub fn positions(atoms: &[SolvatedAtom]) -> Vec<Point3<f64>> {
    atoms.iter().map(|atom| atom.position).collect()
}

pub fn charges(atoms: &[SolvatedAtom]) -> Vec<f64> {
    atoms.iter().map(|atom| atom.charge).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_nonpolar_scale_factor_to_one() {
        let atom = SolvatedAtom::new(Point3::origin(), 0.5, 0.15, 0.8);
        assert_eq!(atom.nonpolar_scale_factor, 1.0);
        assert_eq!(atom.charge, 0.5);
        assert_eq!(atom.radius, 0.15);
        assert_eq!(atom.scale_factor, 0.8);
    }

    #[test]
    fn with_nonpolar_scale_factor_overrides_default() {
        let atom = SolvatedAtom::new(Point3::origin(), 0.0, 0.15, 0.8).with_nonpolar_scale_factor(0.25);
        assert_eq!(atom.nonpolar_scale_factor, 0.25);
    }

    #[test]
    fn positions_and_charges_preserve_atom_order() {
        let atoms = [
            SolvatedAtom::new(Point3::new(1.0, 0.0, 0.0), 1.0, 0.15, 0.8),
            SolvatedAtom::new(Point3::new(0.0, 2.0, 0.0), -1.0, 0.15, 0.8),
        ];
        assert_eq!(
            positions(&atoms),
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0)]
        );
        assert_eq!(charges(&atoms), vec![1.0, -1.0]);
    }
}
