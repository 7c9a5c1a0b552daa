use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayfare_api::{app, AppState};
use wayfare_store::app_config::Config;
use wayfare_store::seed::{default_flights, seed_if_empty};
use wayfare_store::DbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    let default_filter = if config.server.debug {
        "wayfare_api=debug,wayfare_store=debug,wayfare_core=debug,tower_http=debug,axum::rejection=trace"
    } else {
        "wayfare_api=info,wayfare_store=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wayfare on {}", config.bind_address());

    let db = DbClient::new(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;
    db.migrate().await.context("Failed to run migrations")?;

    if config.seed.enabled {
        seed_if_empty(&db.pool, &default_flights())
            .await
            .context("Failed to seed flights")?;
    }

    let app = app(AppState::new(&db));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
