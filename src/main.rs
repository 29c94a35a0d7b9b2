use todo_api::config::AppConfig;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::new()?;
    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("listening on {address}");

    todo_api::run(listener, todo_api::app()).await?;
    Ok(())
}
