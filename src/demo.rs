use qubit_demos::{
    gate::Gate,
    session::{ Session, SessionConfig },
    random,
};
use tracing_subscriber::EnvFilter;

const SEED: Option<u64> = None;
const GROVER_SIZE: usize = 64;
const REPEATS: usize = 5;

fn main() -> qubit_demos::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SessionConfig {
        seed: SEED,
        grover_size: GROVER_SIZE,
        ..Default::default()
    };
    let mut session = Session::new(config)?;

    println!("single qubit");
    println!("  start: {}", session.qubit);
    for gate in [Gate::H, Gate::Z, Gate::H, Gate::X, Gate::H] {
        println!("  {}    : {}", gate, session.apply_gate(gate));
    }
    println!("  measured {} -> {}", session.measure_qubit(), session.qubit);
    session.reset_qubit();
    let outcomes: Vec<u8>
        = (0..4 * REPEATS)
        .map(|_| {
            session.reset_qubit();
            session.apply_gate(Gate::H);
            session.measure_qubit().into()
        })
        .collect();
    println!("  H then measure: {}", random::bits_to_string(&outcomes));

    println!("entangled pair");
    for _ in 0..REPEATS {
        session.reset_pair();
        let a = session.measure_a();
        let b = session.measure_b();
        println!(
            "  A = {}, B = {}, correlated: {} | {}",
            a, b, session.pair.are_correlated(), session.pair,
        );
    }

    println!("search");
    for _ in 0..REPEATS {
        let cmp = session.run_search();
        println!("  {} ({:.1}x)", cmp, cmp.speedup());
        session.new_target();
    }

    println!("random");
    println!("  bits    : {}", random::bits_to_string(&session.random_bits()));
    println!("  number  : {}", session.random_number()?);
    println!("  password: {}", session.password()?);
    Ok(())
}
