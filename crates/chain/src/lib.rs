pub mod energy;
pub mod error;
pub mod evolution;
pub mod hamiltonian;
pub mod measurement;
pub mod op;
pub mod pauli;
pub mod state;

pub use error::{ChainError, ChainResult};
