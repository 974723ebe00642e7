use chain::ChainError;
use thiserror::Error;

/// Errors terminating a simulation run. No retries anywhere; every
/// failure is terminal for the batch.
#[derive(Debug, Error)]
pub enum SimError {
    /// Averaging over zero trajectories would divide by zero.
    #[error("num_trajectories must be at least 1")]
    NoTrajectories,

    #[error("measured qubit {qubit} out of range for {n_qubits} qubits")]
    MeasuredQubitOutOfRange { qubit: usize, n_qubits: usize },

    #[error("operator dimension {got} does not match 2^{n_qubits} = {expected}")]
    DimensionMismatch {
        n_qubits: usize,
        expected: usize,
        got: usize,
    },

    #[error("trajectory energy sequences have mismatched lengths")]
    RaggedSequences,

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("plot rendering failed: {0}")]
    Plot(String),
}

/// Result type for simulation runs.
pub type SimResult<T> = Result<T, SimError>;
