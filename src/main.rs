use anyhow::{Context, Result};
use clap::Parser;
use participant_scraper::{
    config::{Args, Config},
    pipeline,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve config ───────────────────────────────────────────
    let cfg = Config::try_from(Args::parse())?;

    // ─── 3) scrape ───────────────────────────────────────────────────
    let summary = pipeline::run(&cfg)
        .await
        .with_context(|| format!("scraping {}", cfg.url))?;

    info!(
        participants = summary.participants,
        output = %summary.output.display(),
        "all done"
    );
    Ok(())
}
