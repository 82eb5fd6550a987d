//! Fluid property errors.

use pn_core::PnError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while building fluids or evaluating fluid correlations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, viscosity, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<FluidError> for PnError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => PnError::Invariant {
                what: format!("Non-physical fluid value: {what}"),
            },
            FluidError::InvalidArg { what } => PnError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::NonPhysical { what: "density" };
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn error_to_pn_error() {
        let pn: PnError = FluidError::NonPhysical { what: "viscosity" }.into();
        assert!(matches!(pn, PnError::Invariant { .. }));
        let pn: PnError = FluidError::InvalidArg { what: "constant" }.into();
        assert_eq!(pn, PnError::InvalidArg { what: "constant" });
    }
}
