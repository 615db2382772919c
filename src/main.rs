use anyhow::Context;
use vulnerable_app::{Store, logging, server};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = vulnerable_app::config::load().context("Failed to load configuration")?;

    logging::init(&config.observability);

    let store = Store::new(&config.database);
    store
        .initialize()
        .await
        .with_context(|| format!("Failed to initialize store at {}", config.database.path))?;

    ::tracing::warn!("This application is intentionally vulnerable, never expose it publicly");
    ::tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        address = %config.server.address(),
        "Starting server"
    );

    server::run(&config, store)
        .with_context(|| format!("Failed to bind {}", config.server.address()))?
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
