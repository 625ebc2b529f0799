use console_core::observability::init_tracing;
use doc_console::config::get_configuration;
use doc_console::startup::Application;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("doc-console", "info");

    let app = Application::build(configuration)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start doc-console: {}", e))?;

    info!("Starting doc-console on port {}", app.port());
    app.run_until_stopped().await?;

    Ok(())
}
