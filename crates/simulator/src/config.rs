use chain::hamiltonian::ChainHamiltonian;

use crate::error::{SimError, SimResult};

/// Run parameters. Defaults: J = (-2.0, 2.0, 2.0), Δt = π/3, 3 qubits,
/// qubit 1 measured, 10 steps, a single trajectory.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub hamiltonian: ChainHamiltonian,
    /// Evolution time Δt between measurements.
    pub evolution_time: f64,
    pub num_qubits: usize,
    /// Qubit projectively measured after each evolution.
    pub measured_qubit: usize,
    pub num_steps: usize,
    pub num_trajectories: usize,
    /// Root seed; trajectory t draws from the stream "{seed}-traj-{t}".
    pub seed: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hamiltonian: ChainHamiltonian::default(),
            evolution_time: std::f64::consts::FRAC_PI_3,
            num_qubits: ChainHamiltonian::NUM_QUBITS,
            measured_qubit: 1,
            num_steps: 10,
            num_trajectories: 1,
            seed: "closed-chain".to_string(),
        }
    }
}

impl SimConfig {
    /// Fail fast on non-physical parameters, before any simulation work.
    pub fn validate(&self) -> SimResult<()> {
        if self.num_trajectories == 0 {
            return Err(SimError::NoTrajectories);
        }
        if self.measured_qubit >= self.num_qubits {
            return Err(SimError::MeasuredQubitOutOfRange {
                qubit: self.measured_qubit,
                n_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Shared stem of the output file names:
    /// "<N> trajectories, T = <Δt:.2>".
    pub fn output_stem(&self) -> String {
        format!(
            "{} trajectories, T = {:.2}",
            self.num_trajectories, self.evolution_time
        )
    }
}
