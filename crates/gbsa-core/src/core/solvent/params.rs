use super::config::{ObcGlobals, SolventConfig};
use crate::core::geometry::{Boundary, PeriodicBox};
use crate::core::models::atom::SolvatedAtom;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Length of '{name}' is {found}, expected {expected} (one entry per atom)")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(
        "Atom {atom} has radius {radius}, which does not exceed the dielectric offset {dielectric_offset}"
    )]
    NonPositiveOffsetRadius {
        atom: usize,
        radius: f64,
        dielectric_offset: f64,
    },

    #[error("Parameter '{name}' must be finite and positive, got {value}")]
    InvalidScalar { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Periodic boundary conditions require a cutoff distance")]
    PeriodicWithoutCutoff,

    #[error("Cutoff {cutoff} exceeds half the shortest periodic box edge ({half_box})")]
    CutoffExceedsHalfBox { cutoff: f64, half_box: f64 },
}

/// Immutable per-system configuration of the GB/SA term.
#[derive(Debug, Clone, PartialEq)]
pub struct SolventParameters {
    atomic_radii: Vec<f64>,
    scale_factors: Vec<f64>,
    nonpolar_scale_factors: Vec<f64>,
    obc: ObcGlobals,
    pre_factor: f64,
    cutoff: Option<f64>,
    boundary: Boundary,
}

impl SolventParameters {
    pub fn builder() -> SolventParametersBuilder {
        SolventParametersBuilder::new()
    }

    pub fn number_of_atoms(&self) -> usize {
        self.atomic_radii.len()
    }

    pub fn atomic_radii(&self) -> &[f64] {
        &self.atomic_radii
    }

    pub fn scale_factors(&self) -> &[f64] {
        &self.scale_factors
    }

    pub fn nonpolar_scale_factors(&self) -> &[f64] {
        &self.nonpolar_scale_factors
    }

    pub fn obc(&self) -> &ObcGlobals {
        &self.obc
    }

    pub fn dielectric_offset(&self) -> f64 {
        self.obc.dielectric_offset
    }

    pub fn alpha_obc(&self) -> f64 {
        self.obc.alpha
    }

    pub fn beta_obc(&self) -> f64 {
        self.obc.beta
    }

    pub fn gamma_obc(&self) -> f64 {
        self.obc.gamma
    }

    pub fn probe_radius(&self) -> f64 {
        self.obc.probe_radius
    }

    pub fn surface_area_factor(&self) -> f64 {
        self.obc.surface_area_factor
    }

    pub fn pre_factor(&self) -> f64 {
        self.pre_factor
    }

    pub fn use_cutoff(&self) -> bool {
        self.cutoff.is_some()
    }

    pub fn cutoff_distance(&self) -> Option<f64> {
        self.cutoff
    }

    pub fn periodic(&self) -> bool {
        self.boundary.is_periodic()
    }

    pub fn periodic_box(&self) -> Option<&PeriodicBox> {
        self.boundary.periodic_box()
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// `radius - dielectric_offset` for atom `index`.
    #[inline]
    pub fn offset_radius(&self, index: usize) -> f64 {
        self.atomic_radii[index] - self.obc.dielectric_offset
    }

    /// Offset radius of atom `index` scaled by its HCT factor.
    #[inline]
    pub fn scaled_radius(&self, index: usize) -> f64 {
        self.offset_radius(index) * self.scale_factors[index]
    }

    /// Whether a pair at distance `r` lies outside the cutoff and must be skipped.
    #[inline]
    pub fn beyond_cutoff(&self, r: f64) -> bool {
        matches!(self.cutoff, Some(cutoff) if r > cutoff)
    }
}

impl fmt::Display for SolventParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GB/SA OBC parameters")?;
        writeln!(f, "  atoms:               {}", self.number_of_atoms())?;
        writeln!(f, "  dielectric offset:   {}", self.obc.dielectric_offset)?;
        writeln!(
            f,
            "  alpha/beta/gamma:    {} / {} / {}",
            self.obc.alpha, self.obc.beta, self.obc.gamma
        )?;
        writeln!(f, "  probe radius:        {}", self.obc.probe_radius)?;
        writeln!(f, "  surface area factor: {}", self.obc.surface_area_factor)?;
        writeln!(
            f,
            "  dielectrics:         solute {} / solvent {}",
            self.obc.solute_dielectric, self.obc.solvent_dielectric
        )?;
        writeln!(f, "  pre-factor:          {}", self.pre_factor)?;
        match self.cutoff {
            Some(cutoff) => writeln!(f, "  cutoff:              {cutoff}")?,
            None => writeln!(f, "  cutoff:              none")?,
        }
        write!(f, "  boundary:            {}", self.boundary)
    }
}

#[derive(Debug, Default, Clone)]
pub struct SolventParametersBuilder {
    atomic_radii: Option<Vec<f64>>,
    scale_factors: Option<Vec<f64>>,
    nonpolar_scale_factors: Option<Vec<f64>>,
    obc: ObcGlobals,
    cutoff: Option<f64>,
    periodic_box: Option<[f64; 3]>,
}

impl SolventParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SolventConfig) -> Self {
        Self {
            obc: config.obc,
            cutoff: config.boundary.cutoff,
            periodic_box: config.boundary.periodic_box,
            ..Self::default()
        }
    }

    pub fn atomic_radii(mut self, radii: Vec<f64>) -> Self {
        self.atomic_radii = Some(radii);
        self
    }
    pub fn scale_factors(mut self, factors: Vec<f64>) -> Self {
        self.scale_factors = Some(factors);
        self
    }
    pub fn nonpolar_scale_factors(mut self, factors: Vec<f64>) -> Self {
        self.nonpolar_scale_factors = Some(factors);
        self
    }
    pub fn obc(mut self, obc: ObcGlobals) -> Self {
        self.obc = obc;
        self
    }
    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn periodic_box(mut self, lengths: [f64; 3]) -> Self {
        self.periodic_box = Some(lengths);
        self
    }

    /// Fills all per-atom columns from row records.
    pub fn atoms(self, atoms: &[SolvatedAtom]) -> Self {
        self.atomic_radii(atoms.iter().map(|a| a.radius).collect())
            .scale_factors(atoms.iter().map(|a| a.scale_factor).collect())
            .nonpolar_scale_factors(atoms.iter().map(|a| a.nonpolar_scale_factor).collect())
    }

    pub fn build(self) -> Result<SolventParameters, ParamError> {
        let atomic_radii = self
            .atomic_radii
            .ok_or(ParamError::MissingParameter("atomic_radii"))?;
        let scale_factors = self
            .scale_factors
            .ok_or(ParamError::MissingParameter("scale_factors"))?;
        let n = atomic_radii.len();
        let nonpolar_scale_factors = self.nonpolar_scale_factors.unwrap_or_else(|| vec![1.0; n]);

        check_length("scale_factors", n, scale_factors.len())?;
        check_length("nonpolar_scale_factors", n, nonpolar_scale_factors.len())?;

        let obc = self.obc;
        for (name, value) in [
            ("dielectric_offset", obc.dielectric_offset),
            ("alpha", obc.alpha),
            ("beta", obc.beta),
            ("gamma", obc.gamma),
            ("probe_radius", obc.probe_radius),
            ("surface_area_factor", obc.surface_area_factor),
        ] {
            check_finite(name, value)?;
        }
        check_positive("solute_dielectric", obc.solute_dielectric)?;
        check_positive("solvent_dielectric", obc.solvent_dielectric)?;
        let pre_factor = obc.effective_pre_factor();
        check_finite("pre_factor", pre_factor)?;

        for (atom, &radius) in atomic_radii.iter().enumerate() {
            let offset_radius = radius - obc.dielectric_offset;
            if offset_radius.is_nan() || offset_radius <= 0.0 {
                return Err(ParamError::NonPositiveOffsetRadius {
                    atom,
                    radius,
                    dielectric_offset: obc.dielectric_offset,
                });
            }
        }
        for &factor in &scale_factors {
            check_finite("scale_factors", factor)?;
        }
        for &factor in &nonpolar_scale_factors {
            check_finite("nonpolar_scale_factors", factor)?;
        }

        if let Some(cutoff) = self.cutoff {
            check_positive("cutoff", cutoff)?;
        }

        let boundary = match self.periodic_box {
            None => Boundary::Open,
            Some([x, y, z]) => {
                check_positive("periodic_box", x)?;
                check_positive("periodic_box", y)?;
                check_positive("periodic_box", z)?;
                let pbox = PeriodicBox::new(x, y, z);
                let cutoff = self.cutoff.ok_or(ParamError::PeriodicWithoutCutoff)?;
                let half_box = 0.5 * pbox.shortest_edge();
                if cutoff > half_box {
                    return Err(ParamError::CutoffExceedsHalfBox { cutoff, half_box });
                }
                Boundary::Periodic(pbox)
            }
        };

        Ok(SolventParameters {
            atomic_radii,
            scale_factors,
            nonpolar_scale_factors,
            obc,
            pre_factor,
            cutoff: self.cutoff,
            boundary,
        })
    }
}

fn check_length(name: &'static str, expected: usize, found: usize) -> Result<(), ParamError> {
    if expected == found {
        Ok(())
    } else {
        Err(ParamError::LengthMismatch {
            name,
            expected,
            found,
        })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NonFinite { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::InvalidScalar { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solvent::config::BoundaryConfig;
    use nalgebra::Point3;

    fn two_atom_builder() -> SolventParametersBuilder {
        SolventParameters::builder()
            .atomic_radii(vec![0.15, 0.17])
            .scale_factors(vec![0.8, 0.85])
    }

    #[test]
    fn build_succeeds_with_minimal_inputs() {
        let params = two_atom_builder().build().unwrap();
        assert_eq!(params.number_of_atoms(), 2);
        assert_eq!(params.nonpolar_scale_factors(), &[1.0, 1.0]);
        assert!(!params.use_cutoff());
        assert!(!params.periodic());
        assert_eq!(params.pre_factor(), ObcGlobals::default().effective_pre_factor());
    }

    #[test]
    fn build_fails_without_radii() {
        let result = SolventParameters::builder().scale_factors(vec![0.8]).build();
        assert_eq!(result, Err(ParamError::MissingParameter("atomic_radii")));
    }

    #[test]
    fn build_fails_without_scale_factors() {
        let result = SolventParameters::builder().atomic_radii(vec![0.15]).build();
        assert_eq!(result, Err(ParamError::MissingParameter("scale_factors")));
    }

    #[test]
    fn build_rejects_mismatched_array_lengths() {
        let result = SolventParameters::builder()
            .atomic_radii(vec![0.15, 0.15])
            .scale_factors(vec![0.8])
            .build();
        assert_eq!(
            result,
            Err(ParamError::LengthMismatch {
                name: "scale_factors",
                expected: 2,
                found: 1,
            })
        );

        let result = two_atom_builder()
            .nonpolar_scale_factors(vec![1.0, 1.0, 1.0])
            .build();
        assert!(matches!(
            result,
            Err(ParamError::LengthMismatch {
                name: "nonpolar_scale_factors",
                ..
            })
        ));
    }

    #[test]
    fn build_rejects_radius_not_exceeding_dielectric_offset() {
        let result = SolventParameters::builder()
            .atomic_radii(vec![0.15, 0.009])
            .scale_factors(vec![0.8, 0.8])
            .build();
        assert!(matches!(
            result,
            Err(ParamError::NonPositiveOffsetRadius { atom: 1, .. })
        ));
    }

    #[test]
    fn build_rejects_non_finite_radius() {
        let result = SolventParameters::builder()
            .atomic_radii(vec![f64::NAN])
            .scale_factors(vec![0.8])
            .build();
        assert!(matches!(
            result,
            Err(ParamError::NonPositiveOffsetRadius { atom: 0, .. })
        ));
    }

    #[test]
    fn build_rejects_non_positive_cutoff() {
        let result = two_atom_builder().cutoff(0.0).build();
        assert!(matches!(
            result,
            Err(ParamError::InvalidScalar { name: "cutoff", .. })
        ));
    }

    #[test]
    fn build_rejects_periodic_box_without_cutoff() {
        let result = two_atom_builder().periodic_box([3.0, 3.0, 3.0]).build();
        assert_eq!(result, Err(ParamError::PeriodicWithoutCutoff));
    }

    #[test]
    fn build_rejects_cutoff_beyond_half_box() {
        let result = two_atom_builder()
            .cutoff(1.6)
            .periodic_box([3.0, 4.0, 5.0])
            .build();
        assert!(matches!(
            result,
            Err(ParamError::CutoffExceedsHalfBox { half_box, .. }) if half_box == 1.5
        ));
    }

    #[test]
    fn build_rejects_zero_dielectric() {
        let obc = ObcGlobals {
            solvent_dielectric: 0.0,
            ..ObcGlobals::default()
        };
        let result = two_atom_builder().obc(obc).build();
        assert!(matches!(
            result,
            Err(ParamError::InvalidScalar {
                name: "solvent_dielectric",
                ..
            })
        ));
    }

    #[test]
    fn build_accepts_valid_periodic_setup() {
        let params = two_atom_builder()
            .cutoff(1.0)
            .periodic_box([3.0, 3.0, 3.0])
            .build()
            .unwrap();
        assert!(params.periodic());
        assert!(params.use_cutoff());
        assert_eq!(params.cutoff_distance(), Some(1.0));
        assert_eq!(params.periodic_box().map(|b| b.shortest_edge()), Some(3.0));
    }

    #[test]
    fn from_config_carries_globals_and_boundary() {
        let config = SolventConfig {
            obc: ObcGlobals {
                alpha: 0.8,
                ..ObcGlobals::default()
            },
            boundary: BoundaryConfig {
                cutoff: Some(1.0),
                periodic_box: Some([2.5, 2.5, 2.5]),
            },
        };
        let params = SolventParametersBuilder::from_config(&config)
            .atomic_radii(vec![0.15])
            .scale_factors(vec![0.8])
            .build()
            .unwrap();
        assert_eq!(params.alpha_obc(), 0.8);
        assert!(params.periodic());
        assert_eq!(params.cutoff_distance(), Some(1.0));
    }

    #[test]
    fn atoms_fills_all_per_atom_columns() {
        let atoms = [
            SolvatedAtom::new(Point3::origin(), 1.0, 0.15, 0.8),
            SolvatedAtom::new(Point3::origin(), -1.0, 0.2, 0.7).with_nonpolar_scale_factor(0.5),
        ];
        let params = SolventParameters::builder().atoms(&atoms).build().unwrap();
        assert_eq!(params.atomic_radii(), &[0.15, 0.2]);
        assert_eq!(params.scale_factors(), &[0.8, 0.7]);
        assert_eq!(params.nonpolar_scale_factors(), &[1.0, 0.5]);
    }

    #[test]
    fn derived_radii_use_dielectric_offset() {
        let params = two_atom_builder().build().unwrap();
        assert!((params.offset_radius(0) - 0.141).abs() < 1e-12);
        assert!((params.scaled_radius(1) - 0.161 * 0.85).abs() < 1e-12);
    }

    #[test]
    fn beyond_cutoff_is_strictly_greater() {
        let params = two_atom_builder().cutoff(1.0).build().unwrap();
        assert!(!params.beyond_cutoff(1.0));
        assert!(params.beyond_cutoff(1.0 + 1e-12));
        let open = two_atom_builder().build().unwrap();
        assert!(!open.beyond_cutoff(1e6));
    }

    #[test]
    fn display_summarizes_settings() {
        let params = two_atom_builder().cutoff(1.0).build().unwrap();
        let text = params.to_string();
        assert!(text.contains("atoms:               2"));
        assert!(text.contains("cutoff:              1"));
        assert!(text.contains("boundary:            open"));
    }
}
