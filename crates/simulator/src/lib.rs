use std::path::PathBuf;

use chain::evolution::evolution_operator;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod output;
pub mod plot;
pub mod trajectory;

pub use config::SimConfig;
pub use error::{SimError, SimResult};

/// Full computation: validate, build H and U once, run every trajectory,
/// average. Returns the mean energy per step (num_steps + 1 values).
pub fn run(cfg: &SimConfig) -> SimResult<Vec<f64>> {
    cfg.validate()?;

    let h = cfg.hamiltonian.matrix();
    let expected = 1usize << cfg.num_qubits;
    if h.dim != expected {
        return Err(SimError::DimensionMismatch {
            n_qubits: cfg.num_qubits,
            expected,
            got: h.dim,
        });
    }

    let u = evolution_operator(&h, cfg.evolution_time);

    log::info!(
        "running {} trajectories of {} steps (Δt = {:.4}, measuring qubit {})",
        cfg.num_trajectories,
        cfg.num_steps,
        cfg.evolution_time,
        cfg.measured_qubit
    );

    let sequences = trajectory::run_trajectories(&u, &h, cfg)?;
    aggregate::mean_energy(&sequences)
}

/// Persist the averaged curve as a text file and a PNG plot in the
/// current directory. Returns the two paths.
pub fn report(cfg: &SimConfig, energies: &[f64]) -> SimResult<(PathBuf, PathBuf)> {
    let stem = cfg.output_stem();
    let data_path = PathBuf::from(format!("{stem}.txt"));
    let plot_path = PathBuf::from(format!("{stem}.png"));

    output::write_energies(&data_path, energies)?;
    plot::plot_energies(&plot_path, energies)?;

    Ok((data_path, plot_path))
}
