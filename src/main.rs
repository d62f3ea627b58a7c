use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let tracing_config = relpurge::tracing::Config::from_env()?;
    tracing_config.install()?;

    let args = relpurge::Args::parse();
    let config = args.into_config()?;
    let app = config.build()?;
    let summary = app.run().await?;
    tracing::info!(%summary, "run complete");

    Ok(())
}
