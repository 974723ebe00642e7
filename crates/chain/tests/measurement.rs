use chain::measurement::measure_z;
use chain::op::C64;
use chain::pauli::{identity, kron3, pauli_x};
use chain::state::State;
use rng::ShakeRng;

#[test]
fn basis_state_measurement_is_deterministic() {
    let mut rng = ShakeRng::new(b"basis");

    let mut psi = State::zero(3);
    assert_eq!(measure_z(&mut psi, 1, &mut rng).unwrap(), 0);
    assert!((psi.norm() - 1.0).abs() < 1e-12);

    // Flip qubit 1, then its measurement must read 1.
    let mut psi = State::zero(3);
    psi.apply(&kron3(&identity(), &pauli_x(), &identity())).unwrap();
    assert_eq!(measure_z(&mut psi, 1, &mut rng).unwrap(), 1);
}

#[test]
fn collapse_renormalizes_and_repeats() {
    // (|000> + |010>)/√2: measuring qubit 1 collapses to a basis state.
    for shot in 0..20 {
        let mut rng = ShakeRng::new(format!("collapse-{}", shot).as_bytes());

        let mut psi = State::zero(3);
        let s = C64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        psi.amps[0] = s;
        psi.amps[2] = s;

        let first = measure_z(&mut psi, 1, &mut rng).unwrap();
        assert!((psi.norm() - 1.0).abs() < 1e-12);

        // Collapsed, so the outcome is pinned from now on.
        for _ in 0..3 {
            let again = measure_z(&mut psi, 1, &mut rng).unwrap();
            assert_eq!(again, first);
            assert!((psi.norm() - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn both_outcomes_occur_in_superposition() {
    let mut counts = [0usize; 2];
    for shot in 0..100 {
        let mut rng = ShakeRng::new(format!("outcome-{}", shot).as_bytes());

        let mut psi = State::zero(3);
        let s = C64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        psi.amps[0] = s;
        psi.amps[2] = s;

        let m = measure_z(&mut psi, 1, &mut rng).unwrap();
        counts[m as usize] += 1;
    }
    assert!(counts[0] > 0, "never observed 0, counts = {:?}", counts);
    assert!(counts[1] > 0, "never observed 1, counts = {:?}", counts);
}

#[test]
fn seeded_measurement_is_reproducible() {
    let run = |seed: &str| -> Vec<u8> {
        let mut rng = ShakeRng::new(seed.as_bytes());
        let mut psi = State::zero(3);
        let s = C64::new(0.5, 0.0);
        psi.amps[0] = s;
        psi.amps[2] = s;
        psi.amps[4] = s;
        psi.amps[6] = s;

        (0..3)
            .map(|k| measure_z(&mut psi, k, &mut rng).unwrap())
            .collect()
    };

    assert_eq!(run("repro"), run("repro"));
}

#[test]
fn out_of_range_qubit_is_rejected() {
    let mut rng = ShakeRng::new(b"range");
    let mut psi = State::zero(3);
    assert!(measure_z(&mut psi, 3, &mut rng).is_err());
}
