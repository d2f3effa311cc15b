use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use solar_canvas::composer;
use solar_canvas::{Cli, Config};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let config = Config::resolve(&cli, &mut rng);
    composer::run(&config, &mut rng)
        .with_context(|| format!("generating {}", config.output.display()))?;
    Ok(())
}
