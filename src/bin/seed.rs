use anyhow::{Context, Result};
use coffee_seed::{config::Config, seed};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // A missing .env is fine; the variables may come from the environment.
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("invalid configuration")?;
    seed::run(&config).await.context("seeding failed")?;

    Ok(())
}
