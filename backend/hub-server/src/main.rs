use hub_auth::{ClaimStore, UserRegistry};
use hub_config::Config;
use hub_provision::{AccountProvisioner, SystemAccountDatabase, SystemCommandRunner};
use hub_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level.filter()?,
        log_file_path,
        config.logging.colored,
    )?;

    info!("Starting hub-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if config.tls.enabled() {
        warn!("TLS certificate configured; this listener serves plain HTTP behind the proxy");
    }

    if config.server.api_token.is_none() {
        warn!("server.api_token unset; account API rejects all calls");
    }

    let claims = ClaimStore::open(config.claims_path()?)?;
    let registry = UserRegistry::with_claim_store(
        config.auth.allowed_users.iter().cloned(),
        config.auth.admin_users.iter().cloned(),
        claims,
    );
    if !registry.allow_list_enabled().await {
        warn!("Allow-list DISABLED - every authenticated user may sign in");
    }
    if config.auth.delete_invalid_users {
        let dropped = registry.prune_claims().await?;
        if dropped > 0 {
            info!("Dropped {dropped} identity claim(s) no longer on the allow-list");
        }
    }

    let provisioner = AccountProvisioner::new(
        &config.provisioning,
        Arc::new(SystemAccountDatabase),
        Arc::new(SystemCommandRunner),
        registry,
    );

    let app = build_router(AppState::new(
        provisioner,
        config.spawner.clone(),
        &config.server,
    ));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
