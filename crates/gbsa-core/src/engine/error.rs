use thiserror::Error;

use crate::core::solvent::params::ParamError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Expected {expected} {what} (one per atom), found {found}")]
    AtomCountMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid solvent parameters: {source}")]
    Parameters {
        #[from]
        source: ParamError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_count_mismatch_names_the_offending_array() {
        let err = EngineError::AtomCountMismatch {
            what: "charges",
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected 3 charges (one per atom), found 2"
        );
    }

    #[test]
    fn param_error_converts_into_engine_error() {
        let err: EngineError = ParamError::PeriodicWithoutCutoff.into();
        assert!(matches!(err, EngineError::Parameters { .. }));
    }
}
