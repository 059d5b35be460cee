use clap::Parser as _;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = guardian_comment_export::CliArgs::parse();
    let summary = guardian_comment_export::run(args).await?;

    if !summary.failures.is_empty() {
        anyhow::bail!(
            "{} of {} articles failed",
            summary.failures.len(),
            summary.processed()
        );
    }
    Ok(())
}
