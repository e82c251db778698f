use std::io;

use modexp_cost::{BenchConfig, BenchRng, Harness, Rfc3526};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let group = Rfc3526::modp_4096().inspect_err(|e| error!("Failed to load group: {e}"))?;
    let config = BenchConfig::default();
    info!(
        bits = group.bits(),
        mul_ops = config.mul_ops,
        exp_ops = config.exp_ops,
        seed = config.seed,
        "Starting benchmark"
    );

    let mut rng = BenchRng::from_seed(config.seed);
    let harness = Harness::new(group, config, &mut rng)
        .inspect_err(|e| error!("Configuration validation failed: {e}"))?;

    let report = harness.run();
    print!("{report}");

    Ok(())
}
