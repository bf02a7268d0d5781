mod api;
mod middleware;

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, default_rate_limit_state, AppState},
    middleware::AuthState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = smkt_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting smkt-server");

    let pool_config = smkt_db::PoolConfig::from_app_config(&config);
    let pool = smkt_db::connect_pool(config.require_database_url()?, pool_config).await?;
    let applied = smkt_db::run_migrations(&pool).await?;
    tracing::info!(applied, "migrations up to date");

    let geocoder = smkt_geocode::NominatimClient::with_base_url(
        &config.user_agent,
        config.geocoder_timeout_secs,
        &config.geocoder_url,
    )?;

    let auth = AuthState::from_env(config.is_development())?;
    let app = build_app(AppState { pool, geocoder }, auth, default_rate_limit_state()).layer(
        TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
