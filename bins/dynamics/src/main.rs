use chain::hamiltonian::ChainHamiltonian;
use clap::Parser;
use simulator::SimConfig;

/// Measurement-induced dynamics of a 3-qubit closed spin chain
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Coupling J1 (I⊗X⊗X term enters as -J1/2)
    #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
    j1: f64,

    /// Coupling J2 (Z⊗Z⊗I term enters as +J2/2)
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    j2: f64,

    /// Coupling J3 (X⊗I⊗X term enters as -J3/2)
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    j3: f64,

    /// Evolution time Δt between measurements
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_3, allow_hyphen_values = true)]
    evolution_time: f64,

    /// Number of evolution-and-measurement steps per trajectory
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Number of independent stochastic trajectories to average
    #[arg(long, default_value_t = 1)]
    trajectories: usize,

    /// Qubit measured after each evolution
    #[arg(long, default_value_t = 1)]
    measured_qubit: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "closed-chain")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .expect("Failed to build Rayon thread pool");
    }

    let cfg = SimConfig {
        hamiltonian: ChainHamiltonian::new(args.j1, args.j2, args.j3),
        evolution_time: args.evolution_time,
        measured_qubit: args.measured_qubit,
        num_steps: args.steps,
        num_trajectories: args.trajectories,
        seed: args.seed,
        ..SimConfig::default()
    };

    let energies = match simulator::run(&cfg) {
        Ok(e) => e,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            std::process::exit(1);
        }
    };

    match simulator::report(&cfg, &energies) {
        Ok((data_path, plot_path)) => {
            println!(
                "Mean energy: E0 = {:.5}, E{} = {:.5} ({} trajectories)",
                energies[0],
                cfg.num_steps,
                energies[energies.len() - 1],
                cfg.num_trajectories
            );
            println!("Wrote {} and {}", data_path.display(), plot_path.display());
        }
        Err(err) => {
            eprintln!("failed to write outputs: {err}");
            std::process::exit(1);
        }
    }
}
