use thiserror::Error;

/// Errors produced by dense-state operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A qubit index does not address any qubit of the register.
    #[error("qubit {qubit} out of range for a {n_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, n_qubits: usize },

    /// An operator cannot act on a state of a different dimension.
    #[error("operator dimension {got} does not match state dimension {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Result type for state and operator algebra.
pub type ChainResult<T> = Result<T, ChainError>;
