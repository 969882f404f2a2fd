//! Error types for the synthesis crate.

use thiserror::Error;

/// Errors that can occur while synthesizing a pattern.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Transition qubit outside the path.
    #[error("Transition qubit {transition} is out of range for a path of {len} qubits")]
    InvalidParameter {
        /// The requested transition index.
        transition: usize,
        /// Length of the path it was requested for.
        len: usize,
    },

    /// The requested pattern variant does not exist.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Name of the pattern.
        pattern: &'static str,
        /// Why the variant is rejected.
        reason: &'static str,
    },

    /// Pattern name could not be parsed.
    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),

    /// A gate does not act on two neighbouring positions of the path.
    #[error(
        "Gate {index} does not act on neighbouring path positions (control at {control:?}, target at {target:?})"
    )]
    NonAdjacent {
        /// Index of the offending gate in the sequence.
        index: usize,
        /// Path position of the control, if it is on the path.
        control: Option<usize>,
        /// Path position of the target, if it is on the path.
        target: Option<usize>,
    },

    /// Pattern specification could not be decoded.
    #[error("Invalid pattern specification: {0}")]
    Config(#[from] serde_json::Error),

    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] chainshift_ir::IrError),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
