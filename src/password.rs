use qubit_demos::random;
use tracing_subscriber::EnvFilter;

const LENGTH: usize = 16;
const COUNT: usize = 4;

fn main() -> qubit_demos::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::thread_rng();
    for _ in 0..COUNT {
        println!("{}", random::generate_password(LENGTH, &mut rng)?);
    }
    Ok(())
}
