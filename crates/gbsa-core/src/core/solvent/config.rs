use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Electrostatic constant of the Still prefactor, sign included.
///
/// Paired with nm radii; the resulting energies are brought to reporting units
/// by the engine's `ENERGY_CONVERSION`.
pub const ELECTRIC_CONSTANT: f64 = -166.02691;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObcGlobals {
    pub dielectric_offset: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub probe_radius: f64,
    pub surface_area_factor: f64,
    pub solute_dielectric: f64,
    pub solvent_dielectric: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_factor: Option<f64>,
}

impl Default for ObcGlobals {
    fn default() -> Self {
        Self {
            dielectric_offset: 0.009,
            alpha: 1.0,
            beta: 0.8,
            gamma: 4.85,
            probe_radius: 0.14,
            surface_area_factor: 28.3919551,
            solute_dielectric: 1.0,
            solvent_dielectric: 78.3,
            pre_factor: None,
        }
    }
}

impl ObcGlobals {
    /// Electrostatic prefactor of the Still pair term.
    ///
    /// An explicit `pre_factor` wins; otherwise it is derived from the solute
    /// and solvent dielectric constants.
    pub fn effective_pre_factor(&self) -> f64 {
        self.pre_factor.unwrap_or_else(|| {
            2.0 * ELECTRIC_CONSTANT * (1.0 / self.solute_dielectric - 1.0 / self.solvent_dielectric)
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_box: Option<[f64; 3]>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolventConfig {
    pub obc: ObcGlobals,
    pub boundary: BoundaryConfig,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl SolventConfig {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ParamLoadError> {
        toml::from_str(content).map_err(|e| ParamLoadError::Toml {
            path: "<inline>".to_string(),
            source: e,
        })
    }
}
