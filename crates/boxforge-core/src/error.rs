//! Error types for box generation.
//!
//! Three failure classes exist: a `BoxSpec` that can never produce a box
//! (rejected before any geometry is attempted), an internal topology defect
//! (unreachable for well-formed specs), and a modeling-backend rejection.
//! An edge too short to joint is *not* an error; it degrades to a flat edge
//! and is reported as a warning on the generation report.

use thiserror::Error;

/// Errors that can occur while generating a box.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxError {
    /// The box specification is invalid and generation was not attempted.
    #[error("Invalid spec: {name} = {value}: {reason}")]
    InvalidSpec {
        /// The offending parameter.
        name: &'static str,
        /// The supplied value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// An expected shared edge could not be located or constructed.
    ///
    /// This signals a programming defect, not bad input; it is fatal and
    /// never retried.
    #[error("Topology error on panel '{panel}': {detail}")]
    Topology {
        /// The panel being processed when the defect was detected.
        panel: String,
        /// Description of the inconsistency.
        detail: String,
    },

    /// The modeling backend rejected an extrude or combine call.
    #[error("Backend failure on panel '{panel}': {detail}")]
    Backend {
        /// The panel whose solid was being built or cut.
        panel: String,
        /// The backend's failure description.
        detail: String,
    },
}

/// Result type alias for box generation operations.
pub type Result<T> = std::result::Result<T, BoxError>;
