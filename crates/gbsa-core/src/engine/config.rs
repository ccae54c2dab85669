/// How the engine obtains the Born radii consumed by an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusSeeding {
    /// Use the radii committed by the previous evaluation (one step behind
    /// the current positions). The solver only runs when nothing has been
    /// committed yet.
    #[default]
    Reuse,
    /// Solve for the radii at the current positions before every evaluation,
    /// so energies and forces are consistent with the geometry passed in.
    Recompute,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub radius_seeding: RadiusSeeding,
    pub include_nonpolar: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius_seeding: RadiusSeeding::default(),
            include_nonpolar: true,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    radius_seeding: Option<RadiusSeeding>,
    include_nonpolar: Option<bool>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius_seeding(mut self, seeding: RadiusSeeding) -> Self {
        self.radius_seeding = Some(seeding);
        self
    }

    pub fn include_nonpolar(mut self, include: bool) -> Self {
        self.include_nonpolar = Some(include);
        self
    }

    pub fn build(self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            radius_seeding: self.radius_seeding.unwrap_or(defaults.radius_seeding),
            include_nonpolar: self.include_nonpolar.unwrap_or(defaults.include_nonpolar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_reuses_radii_and_includes_nonpolar() {
        let config = EngineConfig::default();
        assert_eq!(config.radius_seeding, RadiusSeeding::Reuse);
        assert!(config.include_nonpolar);
    }

    #[test]
    fn builder_without_overrides_matches_default() {
        assert_eq!(EngineConfig::builder().build(), EngineConfig::default());
    }

    #[test]
    fn builder_applies_overrides() {
        let config = EngineConfig::builder()
            .radius_seeding(RadiusSeeding::Recompute)
            .include_nonpolar(false)
            .build();
        assert_eq!(config.radius_seeding, RadiusSeeding::Recompute);
        assert!(!config.include_nonpolar);
    }
}
