use anyhow::{Context, Result};
use clap::Parser;
use service_logging::service_info;
use summarizer_service::{build_summarizer, serve, Args, ServiceState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Args::parse().resolve()?;
    service_logging::initialize(settings.log_destination()?, settings.log_level()?);

    let summarizer = build_summarizer(&settings)?;
    service_info!(
        "starting summarizer: addr {}, language {}, {} stop words, default max_length {}",
        settings.addr,
        settings.language,
        summarizer.stop_words().len(),
        settings.default_max_length
    );

    let listener = TcpListener::bind(&settings.addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.addr))?;
    serve(
        listener,
        ServiceState::new(summarizer, settings.default_max_length),
    )
    .await?;

    Ok(())
}
