use chain::energy::energy;
use chain::measurement::measure_z;
use chain::op::Op;
use chain::state::State;
use rayon::prelude::*;
use rng::ShakeRng;

use crate::config::SimConfig;
use crate::error::SimResult;

/// One stochastic trajectory: M repetitions of (evolve, measure, record),
/// plus the initial energy at step 0. Returns num_steps + 1 values.
pub fn run_trajectory(
    u: &Op,
    h: &Op,
    cfg: &SimConfig,
    rng: &mut ShakeRng,
) -> SimResult<Vec<f64>> {
    let mut psi = State::zero(cfg.num_qubits);

    let mut energies = Vec::with_capacity(cfg.num_steps + 1);
    energies.push(energy(&psi, h)?);

    for _ in 0..cfg.num_steps {
        psi.apply(u)?;
        measure_z(&mut psi, cfg.measured_qubit, rng)?;
        energies.push(energy(&psi, h)?);
    }

    Ok(energies)
}

/// All trajectories of a run. Each one owns an independent seeded stream,
/// so the map is order-independent and safe to parallelize.
pub fn run_trajectories(u: &Op, h: &Op, cfg: &SimConfig) -> SimResult<Vec<Vec<f64>>> {
    (0..cfg.num_trajectories)
        .into_par_iter()
        .map(|t| {
            let seed = format!("{}-traj-{}", cfg.seed, t);
            let mut rng = ShakeRng::new(seed.as_bytes());
            run_trajectory(u, h, cfg, &mut rng)
        })
        .collect()
}
